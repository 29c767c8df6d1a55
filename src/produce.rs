//! The producer side of a generator.
//!
//! A [`Producer`] is a suspended routine expressed as explicit state plus a
//! step function. Each call to [`Producer::resume`] runs the routine until it
//! yields one value ([`Step::Yielded`]) or runs off its end
//! ([`Step::Complete`]). A [`Generator`] owns a producer inside its frame and
//! is the only thing that should call `resume` on it.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut n = 0;
//! let mut countdown = from_fn(move || {
//!     n += 1;
//!     if n <= 3 { Step::Yielded(4 - n) } else { Step::Complete(()) }
//! });
//! assert_eq!(countdown.resume(), Step::Yielded(3));
//! assert_eq!(countdown.resume(), Step::Yielded(2));
//! assert_eq!(countdown.resume(), Step::Yielded(1));
//! assert!(countdown.resume().is_complete());
//! ```

use either::Either;

use crate::{generator::Generator, step::Step};

/// A routine that can be resumed until it yields or terminates.
///
/// Implementations must not do any work before the first `resume`, and are
/// never resumed again after returning [`Step::Complete`].
pub trait Producer {
    /// Element type yielded by this routine.
    type Item;

    /// Run until the next yield or until completion.
    fn resume(&mut self) -> Step<Self::Item>;

    fn boxed(self) -> Box<dyn Producer<Item = Self::Item>>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }

    /// Wrap this producer in a fresh, not yet started [`Generator`].
    fn into_generator(self) -> Generator<Self::Item>
    where
        Self: Sized + 'static,
        Self::Item: 'static,
    {
        Generator::new(self)
    }
}

impl<T> Producer for Box<dyn Producer<Item = T>> {
    type Item = T;

    fn resume(&mut self) -> Step<T> {
        (**self).resume()
    }
}

impl<T> Producer for &'_ mut dyn Producer<Item = T> {
    type Item = T;

    fn resume(&mut self) -> Step<T> {
        (**self).resume()
    }
}

/// `None` is a producer that terminates on its first resume.
impl<P> Producer for Option<P>
where
    P: Producer,
{
    type Item = P::Item;

    fn resume(&mut self) -> Step<Self::Item> {
        match self {
            Some(p) => p.resume(),
            None => Step::Complete(()),
        }
    }
}

impl<L, R> Producer for Either<L, R>
where
    L: Producer,
    R: Producer<Item = L::Item>,
{
    type Item = L::Item;

    fn resume(&mut self) -> Step<Self::Item> {
        match self {
            Either::Left(l) => l.resume(),
            Either::Right(r) => r.resume(),
        }
    }
}
