//! Producers written as `async` bodies.
//!
//! Stable Rust has no `yield` statement, but an `async` block is already a
//! compiler-generated state machine that suspends at every `.await`. Here the
//! only future a body may await is the one returned by [`Co::yield_`]: it
//! parks its value in a slot shared with the producer and suspends once.
//! Resuming the producer polls the body with a no-op waker and hands back
//! whatever value was parked.
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let gen = from_async(|co| async move {
//!     for i in 0..3 {
//!         co.yield_(i).await;
//!     }
//! })
//! .into_generator();
//!
//! assert_eq!(gen.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
//! ```

use std::{
    cell::Cell,
    fmt,
    future::Future,
    pin::Pin,
    rc::Rc,
    task::{Context, Poll},
};

use futures::{task::noop_waker_ref, FutureExt};

use crate::{produce::Producer, step::Step};

type Slot<T> = Rc<Cell<Option<T>>>;

/// Yield handle passed to an async producer body.
pub struct Co<T> {
    slot: Slot<T>,
}

impl<T> Co<T> {
    /// Store `value` as the current element and suspend the body.
    ///
    /// The returned future must be awaited immediately; dropping it without
    /// awaiting yields nothing.
    pub fn yield_(&self, value: T) -> Yield<T> {
        Yield {
            slot: Rc::clone(&self.slot),
            value: Some(value),
        }
    }
}

impl<T> fmt::Debug for Co<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Co").finish_non_exhaustive()
    }
}

/// Future returned by [`Co::yield_`]. Pending exactly once.
#[must_use = "a yield does nothing unless awaited"]
pub struct Yield<T> {
    slot: Slot<T>,
    value: Option<T>,
}

// `value` is never pinned in place; it is only moved into the slot.
impl<T> Unpin for Yield<T> {}

impl<T> Future for Yield<T> {
    type Output = ();

    fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<()> {
        let this = self.get_mut();
        match this.value.take() {
            Some(value) => {
                if this.slot.replace(Some(value)).is_some() {
                    panic!("async producer yielded twice without suspending");
                }
                Poll::Pending
            }
            None => Poll::Ready(()),
        }
    }
}

/// A [`Producer`] driving an `async` body. Created by [`from_async`].
pub struct Coroutine<T, F> {
    slot: Slot<T>,
    body: Pin<Box<F>>,
}

/// Create a producer from an async body.
///
/// `body` is called right away to build the future, but an `async` block
/// does not execute any of its statements until first polled, so nothing
/// in it runs before the generator's first resume.
///
/// # Panics
///
/// Resuming panics if the body suspends on anything other than a
/// [`Co::yield_`] future, since nothing would ever wake it. It also panics
/// if two yields are pending at once (for example under `join!`), which
/// would otherwise overwrite the first value.
pub fn from_async<T, B, F>(body: B) -> Coroutine<T, F>
where
    B: FnOnce(Co<T>) -> F,
    F: Future<Output = ()>,
{
    let slot: Slot<T> = Rc::new(Cell::new(None));
    let co = Co {
        slot: Rc::clone(&slot),
    };
    Coroutine {
        slot,
        body: Box::pin(body(co)),
    }
}

impl<T, F> Producer for Coroutine<T, F>
where
    F: Future<Output = ()>,
{
    type Item = T;

    fn resume(&mut self) -> Step<T> {
        let mut cx = Context::from_waker(noop_waker_ref());
        match self.body.poll_unpin(&mut cx) {
            Poll::Ready(()) => Step::Complete(()),
            Poll::Pending => match self.slot.take() {
                Some(value) => Step::Yielded(value),
                None => panic!("async producer suspended on a future other than `Co::yield_`"),
            },
        }
    }
}
