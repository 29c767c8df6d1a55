use std::{
    cell::{Ref, RefCell, RefMut},
    fmt,
    rc::Rc,
};

use crate::frame::{Frame, FrameState, ResumeError};

/// Shared ownership of a [`Frame`].
///
/// Cloning registers another reference to the same frame; moving transfers
/// the reference; dropping releases it. The frame (and with it the
/// producer's captured locals) is destroyed when the last handle goes away,
/// whether or not the producer had finished. A handle can also be null, in
/// which case releasing it does nothing.
///
/// Handles are `!Send`: a frame is resumed on one thread only.
///
/// # Panics
///
/// Resuming while the frame is already borrowed (for example, from inside
/// the producer itself, or while a [`Cursor::get`](crate::Cursor::get) guard
/// is alive) panics.
pub struct FrameHandle<T> {
    frame: Option<Rc<RefCell<Frame<T>>>>,
}

impl<T> FrameHandle<T> {
    pub fn new(frame: Frame<T>) -> Self {
        Self {
            frame: Some(Rc::new(RefCell::new(frame))),
        }
    }

    pub const fn null() -> Self {
        Self { frame: None }
    }

    pub fn is_null(&self) -> bool {
        self.frame.is_none()
    }

    /// Number of live handles to this frame, `0` for a null handle.
    pub fn ref_count(&self) -> usize {
        self.frame.as_ref().map_or(0, Rc::strong_count)
    }

    /// `true` if both handles reference the same frame. Null handles are
    /// never equal to anything.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.frame, &other.frame) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub fn state(&self) -> Option<FrameState> {
        self.frame.as_ref().map(|f| f.borrow().state())
    }

    /// `true` for null handles and terminated frames.
    pub fn is_done(&self) -> bool {
        self.state().map_or(true, |s| s == FrameState::Terminated)
    }

    pub fn try_resume(&self) -> Result<FrameState, ResumeError> {
        let frame = self.frame.as_ref().ok_or(ResumeError::Null)?;
        frame.borrow_mut().try_resume()
    }

    /// Resume the frame once.
    ///
    /// # Panics
    ///
    /// Panics if the handle is null or the frame has terminated; continuing
    /// past the end of a sequence is a caller bug.
    pub fn resume(&self) -> FrameState {
        match self.try_resume() {
            Ok(state) => state,
            Err(err) => panic!("{err}"),
        }
    }

    /// Drop this handle's reference now, leaving it null.
    pub fn release(&mut self) {
        self.frame = None;
    }

    pub(crate) fn borrow(&self) -> Option<Ref<'_, Frame<T>>> {
        self.frame.as_ref().map(|f| f.borrow())
    }

    pub(crate) fn borrow_mut(&self) -> Option<RefMut<'_, Frame<T>>> {
        self.frame.as_ref().map(|f| f.borrow_mut())
    }
}

impl<T> Clone for FrameHandle<T> {
    fn clone(&self) -> Self {
        Self {
            frame: self.frame.clone(),
        }
    }
}

impl<T> Default for FrameHandle<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> fmt::Debug for FrameHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameHandle")
            .field("state", &self.state())
            .field("ref_count", &self.ref_count())
            .finish()
    }
}
