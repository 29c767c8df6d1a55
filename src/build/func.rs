use crate::{produce::Producer, step::Step};

pub struct FromFn<F>(F);

impl<T, F> Producer for FromFn<F>
where
    F: FnMut() -> Step<T>,
{
    type Item = T;

    fn resume(&mut self) -> Step<T> {
        (self.0)()
    }
}

/// Create a producer from a step closure.
///
/// The closure's captured variables are the producer's locals; they live in
/// the frame until the producer completes or the last handle is dropped.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut i = 0;
/// let gen = from_fn(move || {
///     i += 1;
///     if i <= 2 { Step::Yielded(i) } else { Step::Complete(()) }
/// })
/// .into_generator();
/// assert_eq!(gen.iter().collect::<Vec<_>>(), vec![1, 2]);
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Step<T>,
{
    FromFn(f)
}

/// Yields a single value, then completes.
pub struct Once<T>(Option<T>);

/// Create a producer that yields `value` once.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut stage = once(5);
/// assert_eq!(stage.resume(), Step::Yielded(5));
/// assert!(stage.resume().is_complete());
/// ```
pub fn once<T>(value: T) -> Once<T> {
    Once(Some(value))
}

impl<T> Producer for Once<T> {
    type Item = T;

    fn resume(&mut self) -> Step<T> {
        self.0.take().into()
    }
}

/// Yields the result of a closure forever.
///
/// Never completes on its own; the consumer decides how much to take.
pub struct RepeatWith<F>(F);

/// Create an infinite producer from a closure.
pub fn repeat_with<T, F>(f: F) -> RepeatWith<F>
where
    F: FnMut() -> T,
{
    RepeatWith(f)
}

impl<T, F> Producer for RepeatWith<F>
where
    F: FnMut() -> T,
{
    type Item = T;

    fn resume(&mut self) -> Step<T> {
        Step::Yielded((self.0)())
    }
}

/// Yields `first`, then each successor computed from the previous value.
pub struct Successors<T, F> {
    next: Option<T>,
    succ: F,
}

/// Create a producer from a seed and a successor function.
///
/// The successor of the value being yielded is computed eagerly, at the
/// same resume, so `succ` must not rely on the consumer having observed it.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let powers = successors(Some(1_u32), |n| n.checked_mul(10).filter(|n| *n < 10_000));
/// let gen = powers.into_generator();
/// assert_eq!(gen.iter().collect::<Vec<_>>(), vec![1, 10, 100, 1000]);
/// ```
pub fn successors<T, F>(first: Option<T>, succ: F) -> Successors<T, F>
where
    F: FnMut(&T) -> Option<T>,
{
    Successors { next: first, succ }
}

impl<T, F> Producer for Successors<T, F>
where
    F: FnMut(&T) -> Option<T>,
{
    type Item = T;

    fn resume(&mut self) -> Step<T> {
        match self.next.take() {
            Some(value) => {
                self.next = (self.succ)(&value);
                Step::Yielded(value)
            }
            None => Step::Complete(()),
        }
    }
}

/// Drives an [`Iterator`] one element per resume.
pub struct FromIter<I>(I);

/// Create a producer that yields the elements of `iterable`.
///
/// This is how a producer is built on top of another sequence: filter or
/// map with ordinary iterator adapters and yield the result.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let ints = successors(Some(0), |n| if *n < 4 { Some(n + 1) } else { None }).into_generator();
/// let evens = from_iter(ints.into_iter().filter(|n| n % 2 == 0)).into_generator();
/// assert_eq!(evens.iter().collect::<Vec<_>>(), vec![0, 2, 4]);
/// ```
pub fn from_iter<I>(iterable: I) -> FromIter<I::IntoIter>
where
    I: IntoIterator,
{
    FromIter(iterable.into_iter())
}

impl<I> Producer for FromIter<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn resume(&mut self) -> Step<I::Item> {
        self.0.next().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_runs_closure_per_resume() {
        let mut calls = 0;
        let mut stage = from_fn(|| {
            calls += 1;
            if calls < 3 {
                Step::Yielded(calls * 10)
            } else {
                Step::Complete(())
            }
        });

        assert_eq!(stage.resume(), Step::Yielded(10));
        assert_eq!(stage.resume(), Step::Yielded(20));
        assert!(stage.resume().is_complete());
    }

    #[test]
    fn test_once_completes_after_single_yield() {
        let mut stage = once(String::from("x"));
        assert_eq!(stage.resume(), Step::Yielded(String::from("x")));
        assert!(stage.resume().is_complete());
        assert!(stage.resume().is_complete());
    }

    #[test]
    fn test_repeat_with_never_completes() {
        let mut n = 0_u64;
        let mut stage = repeat_with(|| {
            n += 1;
            n
        });
        for expected in 1..=100 {
            assert_eq!(stage.resume(), Step::Yielded(expected));
        }
    }

    #[test]
    fn test_successors_stops_on_none() {
        let mut stage = successors(Some(3_u8), |n| n.checked_sub(1));
        let mut seen = Vec::new();
        while let Step::Yielded(v) = stage.resume() {
            seen.push(v);
        }
        assert_eq!(seen, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_successors_without_seed_is_empty() {
        let mut stage = successors(None::<u8>, |n| Some(*n));
        assert!(stage.resume().is_complete());
    }

    #[test]
    fn test_from_iter_yields_elements_in_order() {
        let mut stage = from_iter(vec!['a', 'b']);
        assert_eq!(stage.resume(), Step::Yielded('a'));
        assert_eq!(stage.resume(), Step::Yielded('b'));
        assert!(stage.resume().is_complete());
    }
}
