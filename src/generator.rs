//! The public entry point: [`Generator`] and the [`Sentinel`] end marker.

use std::fmt;

use crate::{
    cursor::Cursor,
    frame::{Frame, FrameState},
    handle::FrameHandle,
    iter::Iter,
    produce::Producer,
};

/// Stateless end-of-sequence marker. Equal to every exhausted [`Cursor`] and
/// to no live one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sentinel;

/// A lazy sequence backed by a suspended producer.
///
/// Creating a generator runs nothing; the producer's first statement
/// executes on the first [`begin`](Self::begin).
///
/// # Shared suspension
///
/// Cloning a generator does **not** create an independent replay. Every
/// clone, and every cursor obtained from any of them, drives the same frame:
/// advancing one advances them all, and calling `begin` again continues
/// from the current position instead of restarting. The frame is destroyed
/// when the last generator or cursor referencing it is dropped, which also
/// drops whatever the producer was holding.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let gen = from_iter(0..5).into_generator();
/// let other = gen.clone();
///
/// let mut a = gen.begin();
/// assert_eq!(*a.get(), 0);
/// a.advance();
///
/// let b = other.begin();
/// assert_eq!(*b.get(), 1);
/// ```
///
/// Generators are neither `Send` nor `Sync`.
pub struct Generator<T> {
    frame: FrameHandle<T>,
}

impl<T> Generator<T> {
    /// Wrap `producer` in a new frame. None of the producer runs yet.
    pub fn new<P>(producer: P) -> Self
    where
        P: Producer<Item = T> + 'static,
    {
        Self {
            frame: FrameHandle::new(Frame::new(producer)),
        }
    }

    /// Return a cursor at the current position.
    ///
    /// The first call resumes the producer once, running it up to its first
    /// yield (or to completion, in which case the cursor equals
    /// [`end`](Self::end)). Later calls continue from the shared position;
    /// they resume only if the current value was already moved out through
    /// another handle, so a live cursor always has a value to dereference.
    pub fn begin(&self) -> Cursor<T> {
        let needs_resume = self.frame.borrow().map_or(false, |frame| match frame.state() {
            FrameState::Pending => true,
            FrameState::Yielded => frame.current().is_none(),
            FrameState::Terminated => false,
        });
        if needs_resume {
            self.frame.resume();
        }
        Cursor::bind(self.frame.clone())
    }

    /// The end marker every exhausted cursor compares equal to.
    pub fn end(&self) -> Sentinel {
        Sentinel
    }

    /// An [`Iterator`] over the remaining values, moved out one at a time.
    pub fn iter(&self) -> Iter<T> {
        Iter::new(self.clone())
    }

    /// `None` for a default-constructed generator.
    pub fn state(&self) -> Option<FrameState> {
        self.frame.state()
    }

    /// `true` once the producer has been resumed at least once. Always
    /// `false` for a default-constructed generator.
    pub fn is_started(&self) -> bool {
        matches!(
            self.state(),
            Some(FrameState::Yielded | FrameState::Terminated)
        )
    }

    pub fn is_terminated(&self) -> bool {
        self.frame.is_done()
    }

    /// Number of generators and live cursors sharing this frame.
    pub fn handle_count(&self) -> usize {
        self.frame.ref_count()
    }
}

impl<T> Clone for Generator<T> {
    fn clone(&self) -> Self {
        Self {
            frame: self.frame.clone(),
        }
    }
}

impl<T> Default for Generator<T> {
    /// A generator with no frame. It is already at its end.
    fn default() -> Self {
        Self {
            frame: FrameHandle::null(),
        }
    }
}

impl<T> fmt::Debug for Generator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("frame", &self.frame)
            .finish()
    }
}

impl<T> IntoIterator for Generator<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        Iter::new(self)
    }
}

impl<T> IntoIterator for &Generator<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        self.iter()
    }
}
