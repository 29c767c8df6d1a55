//! Single-pass iteration positions over a generator's frame.
//!
//! A [`Cursor`] is either live (bound to a frame that has not terminated) or
//! exhausted, in which case it compares equal to [`Sentinel`]. It implements
//! the input-iteration contract directly:
//!
//! | operation         | method                       |
//! |-------------------|------------------------------|
//! | dereference       | [`Cursor::get`]              |
//! | move out          | [`Cursor::take`]             |
//! | pre-advance       | [`Cursor::advance`]          |
//! | post-advance      | [`Cursor::post_advance`]     |
//! | at end            | `cursor == Sentinel`         |
//!
//! All cursors and generators cloned from the same origin share one frame,
//! so advancing any of them moves all of them.

use std::{
    cell::RefMut,
    fmt,
    ops::{Deref, DerefMut},
};

use crate::{frame::FrameState, generator::Sentinel, handle::FrameHandle};

pub struct Cursor<T> {
    frame: FrameHandle<T>,
}

impl<T> Cursor<T> {
    /// Bind to `frame`. A null or terminated frame gives an exhausted cursor.
    pub(crate) fn bind(frame: FrameHandle<T>) -> Self {
        if frame.is_done() {
            Self::default()
        } else {
            Self { frame }
        }
    }

    /// `true` once the bound frame has terminated, or if the cursor was never
    /// bound. Equivalent to `self == Sentinel`.
    pub fn is_end(&self) -> bool {
        self.frame.is_done()
    }

    /// `true` if there is a current value that has not been taken.
    pub fn has_value(&self) -> bool {
        self.frame
            .borrow()
            .map_or(false, |frame| frame.current().is_some())
    }

    /// Mutable access to the current value, or `None` if the cursor is
    /// exhausted or the value was taken.
    pub fn try_get(&self) -> Option<RefMut<'_, T>> {
        let frame = self.frame.borrow_mut()?;
        RefMut::filter_map(frame, |frame| frame.current_mut()).ok()
    }

    /// Mutable access to the current value.
    ///
    /// The guard borrows the shared frame: drop it before advancing this or
    /// any other cursor on the same frame.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is exhausted, or if the current value was moved
    /// out with [`take`](Self::take) or [`post_advance`](Self::post_advance).
    pub fn get(&self) -> RefMut<'_, T> {
        if self.is_end() {
            panic!("dereferenced an exhausted cursor");
        }
        match self.try_get() {
            Some(value) => value,
            None => panic!("current value was already taken from this cursor"),
        }
    }

    /// Move the current value out of the frame. The slot stays empty until
    /// the next advance.
    ///
    /// # Panics
    ///
    /// Same conditions as [`get`](Self::get).
    pub fn take(&mut self) -> T {
        let taken = match self.frame.borrow_mut() {
            Some(mut frame) if !frame.is_terminated() => frame.take_current(),
            _ => panic!("dereferenced an exhausted cursor"),
        };
        match taken {
            Some(value) => value,
            None => panic!("current value was already taken from this cursor"),
        }
    }

    /// Resume the frame once (`++cursor`). If the producer terminates, the
    /// cursor becomes exhausted and releases its frame reference.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already exhausted, and re-raises any panic
    /// from the producer.
    pub fn advance(&mut self) -> &mut Self {
        if self.is_end() {
            panic!("advanced a cursor past the end of its generator");
        }
        if self.frame.resume() == FrameState::Terminated {
            self.frame.release();
        }
        self
    }

    /// Advance and return the value from before the advance (`cursor++`).
    ///
    /// The previous value is moved out of the frame before resuming, so this
    /// works for element types that are neither `Copy` nor `Clone`.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let gen = from_iter(vec![String::from("a"), String::from("b")]).into_generator();
    /// let mut cursor = gen.begin();
    /// let first = cursor.post_advance();
    /// assert_eq!(*first, "a");
    /// assert_eq!(*cursor.get(), "b");
    /// ```
    ///
    /// # Panics
    ///
    /// Same conditions as [`take`](Self::take) and [`advance`](Self::advance).
    pub fn post_advance(&mut self) -> PostAdvance<T> {
        let value = self.take();
        self.advance();
        PostAdvance { value }
    }
}

impl<T> Default for Cursor<T> {
    /// An unbound cursor; equal to [`Sentinel`].
    fn default() -> Self {
        Self {
            frame: FrameHandle::null(),
        }
    }
}

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        Self {
            frame: self.frame.clone(),
        }
    }
}

impl<T> PartialEq<Sentinel> for Cursor<T> {
    fn eq(&self, _: &Sentinel) -> bool {
        self.is_end()
    }
}

impl<T> PartialEq<Cursor<T>> for Sentinel {
    fn eq(&self, cursor: &Cursor<T>) -> bool {
        cursor.is_end()
    }
}

/// Two cursors are equal if both are exhausted, or both are live on the same
/// frame (and therefore at the same position).
impl<T> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_end(), other.is_end()) {
            (true, true) => true,
            (false, false) => self.frame.ptr_eq(&other.frame),
            _ => false,
        }
    }
}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("end", &self.is_end())
            .field("frame", &self.frame)
            .finish()
    }
}

/// The value a cursor held before [`Cursor::post_advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostAdvance<T> {
    value: T,
}

impl<T> PostAdvance<T> {
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Deref for PostAdvance<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for PostAdvance<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}
