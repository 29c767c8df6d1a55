//! The suspended-computation frame behind every generator.
//!
//! A [`Frame`] owns a producer (its position and captured locals), the slot
//! for the value it most recently yielded, and its [`FrameState`]. The state
//! machine has three states:
//!
//! ```text
//!   Pending --resume--> Yielded --resume--> Yielded ...
//!      |                   |
//!      +------resume-------+-----------> Terminated (absorbing)
//! ```
//!
//! Frames are not shared directly; see [`FrameHandle`](crate::FrameHandle).

use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

use crate::{produce::Producer, step::Step};

/// Externally visible state of a [`Frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameState {
    /// Created; no statement of the producer has run yet.
    Pending,
    /// Suspended right after a yield.
    Yielded,
    /// Ran to completion (or panicked). Never yields again.
    Terminated,
}

/// Precondition violations reported by the checked resume path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResumeError {
    #[error("resumed through a null frame handle")]
    Null,
    #[error("resumed a frame that has already terminated")]
    Terminated,
}

/// A producer's suspended state together with the value it last yielded.
///
/// Frames are normally shared through a [`FrameHandle`](crate::FrameHandle);
/// the producer is dropped as soon as the frame terminates.
pub struct Frame<T> {
    producer: Option<Box<dyn Producer<Item = T>>>,
    current: Option<T>,
    state: FrameState,
}

impl<T> Frame<T> {
    /// Create a frame in the [`Pending`](FrameState::Pending) state. Does not
    /// run the producer.
    pub fn new<P>(producer: P) -> Self
    where
        P: Producer<Item = T> + 'static,
    {
        log::trace!("frame created");
        Self {
            producer: Some(Box::new(producer)),
            current: None,
            state: FrameState::Pending,
        }
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state == FrameState::Terminated
    }

    /// Run the producer until its next yield or completion.
    ///
    /// On a terminated frame this is a no-op that returns
    /// [`FrameState::Terminated`] without touching the producer. The previous
    /// value is dropped before the producer runs.
    ///
    /// A panic inside the producer terminates the frame, drops the producer's
    /// locals, and is then re-raised to the caller.
    pub fn resume(&mut self) -> FrameState {
        let Some(producer) = self.producer.as_mut() else {
            return FrameState::Terminated;
        };
        self.current = None;

        match panic::catch_unwind(AssertUnwindSafe(|| producer.resume())) {
            Ok(Step::Yielded(value)) => {
                self.current = Some(value);
                self.state = FrameState::Yielded;
                log::trace!("frame yielded");
            }
            Ok(Step::Complete(())) => {
                self.terminate();
                log::trace!("frame ran to completion");
            }
            Err(payload) => {
                log::debug!("producer panicked; terminating frame");
                self.terminate();
                panic::resume_unwind(payload);
            }
        }
        self.state
    }

    /// Like [`resume`](Self::resume), but reports resuming a terminated frame
    /// as an error instead of absorbing it.
    pub fn try_resume(&mut self) -> Result<FrameState, ResumeError> {
        if self.is_terminated() {
            return Err(ResumeError::Terminated);
        }
        Ok(self.resume())
    }

    /// The value stored by the most recent yield, unless it was taken.
    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.current.as_mut()
    }

    /// Move the current value out, leaving the slot empty until the next yield.
    pub fn take_current(&mut self) -> Option<T> {
        self.current.take()
    }

    fn terminate(&mut self) {
        self.state = FrameState::Terminated;
        self.producer = None;
        self.current = None;
    }
}

impl<T> Drop for Frame<T> {
    fn drop(&mut self) {
        if self.producer.is_some() {
            log::trace!("dropping suspended frame in state {:?}", self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_fn, once};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_new_frame_is_pending_and_runs_nothing() {
        let calls = Rc::new(Cell::new(0));
        let frame = Frame::new(from_fn({
            let calls = Rc::clone(&calls);
            move || {
                calls.set(calls.get() + 1);
                Step::Yielded(())
            }
        }));

        assert_eq!(frame.state(), FrameState::Pending);
        assert!(frame.current().is_none());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_resume_walks_the_state_machine() {
        let mut frame = Frame::new(once(7));

        assert_eq!(frame.resume(), FrameState::Yielded);
        assert_eq!(frame.current(), Some(&7));

        assert_eq!(frame.resume(), FrameState::Terminated);
        assert!(frame.current().is_none());
    }

    #[test]
    fn test_terminated_is_absorbing() {
        let calls = Rc::new(Cell::new(0));
        let mut frame = Frame::new(from_fn({
            let calls = Rc::clone(&calls);
            move || -> Step<u8> {
                calls.set(calls.get() + 1);
                Step::Complete(())
            }
        }));

        assert_eq!(frame.resume(), FrameState::Terminated);
        assert_eq!(frame.resume(), FrameState::Terminated);
        assert_eq!(frame.try_resume(), Err(ResumeError::Terminated));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_take_current_empties_slot() {
        let mut frame = Frame::new(once(String::from("v")));
        frame.resume();

        assert_eq!(frame.take_current().as_deref(), Some("v"));
        assert!(frame.current().is_none());
        assert_eq!(frame.state(), FrameState::Yielded);
    }

    #[test]
    fn test_producer_panic_terminates_and_propagates() {
        let mut n = 0;
        let mut frame = Frame::new(from_fn(move || {
            n += 1;
            if n == 2 {
                panic!("boom");
            }
            Step::Yielded(n)
        }));

        assert_eq!(frame.resume(), FrameState::Yielded);
        let result = panic::catch_unwind(AssertUnwindSafe(|| frame.resume()));

        assert!(result.is_err());
        assert!(frame.is_terminated());
        assert!(frame.current().is_none());
        assert_eq!(frame.resume(), FrameState::Terminated);
    }

    #[test]
    fn test_resume_error_messages() {
        assert_eq!(
            ResumeError::Null.to_string(),
            "resumed through a null frame handle"
        );
        assert_eq!(
            ResumeError::Terminated.to_string(),
            "resumed a frame that has already terminated"
        );
    }
}
