/// Result of resuming a producer once: either it yielded a value and suspended,
/// or it ran to completion.
///
/// The completion payload defaults to `()`, which is what a
/// [`Generator`](crate::Generator) expects from its producer.
///
/// # Examples
///
/// ```rust
/// use lazyseq::Step;
///
/// let suspended: Step<i32> = Step::Yielded(42);
/// let finished: Step<i32> = Step::Complete(());
///
/// assert_eq!(suspended.map_yielded(|x| x * 2), Step::Yielded(84));
/// assert!(finished.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<Y, D = ()> {
    /// The producer stored a value and suspended.
    Yielded(Y),
    /// The producer terminated and will never yield again.
    Complete(D),
}

impl<Y, D> Step<Y, D> {
    /// Returns `true` if the step is `Yielded`.
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    /// Returns `true` if the step is `Complete`.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }

    /// Converts from `Step<Y, D>` to `Option<Y>`, discarding the completion value.
    ///
    /// ```rust
    /// use lazyseq::Step;
    ///
    /// assert_eq!(Step::<i32>::Yielded(7).yielded_value(), Some(7));
    /// assert_eq!(Step::<i32>::Complete(()).yielded_value(), None);
    /// ```
    #[inline]
    pub fn yielded_value(self) -> Option<Y> {
        match self {
            Step::Yielded(y) => Some(y),
            Step::Complete(_) => None,
        }
    }

    /// Maps the yielded value, leaving a completion untouched.
    #[inline]
    pub fn map_yielded<Y2, F>(self, f: F) -> Step<Y2, D>
    where
        F: FnOnce(Y) -> Y2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(f(y)),
            Step::Complete(d) => Step::Complete(d),
        }
    }

    /// Returns the contained `Yielded` value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the step is `Complete`.
    #[inline]
    pub fn expect_yielded(self, msg: &str) -> Y {
        match self {
            Step::Yielded(y) => y,
            Step::Complete(_) => panic!("{}", msg),
        }
    }

    /// Returns the contained `Yielded` value.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Complete`.
    ///
    /// ```should_panic
    /// use lazyseq::Step;
    ///
    /// Step::<i32>::Complete(()).unwrap_yielded();
    /// ```
    #[inline]
    pub fn unwrap_yielded(self) -> Y {
        match self {
            Step::Yielded(y) => y,
            Step::Complete(_) => panic!("called `Step::unwrap_yielded()` on a `Complete` value"),
        }
    }
}

impl<Y> From<Option<Y>> for Step<Y> {
    /// `Some` yields, `None` completes.
    fn from(value: Option<Y>) -> Self {
        match value {
            Some(y) => Step::Yielded(y),
            None => Step::Complete(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yielded_and_is_complete() {
        let y: Step<i32, &str> = Step::Yielded(42);
        let d: Step<i32, &str> = Step::Complete("complete");

        assert!(y.is_yielded());
        assert!(!y.is_complete());
        assert!(d.is_complete());
        assert!(!d.is_yielded());
    }

    #[test]
    fn test_yielded_value() {
        let y: Step<i32, &str> = Step::Yielded(42);
        let d: Step<i32, &str> = Step::Complete("complete");

        assert_eq!(y.yielded_value(), Some(42));
        assert_eq!(d.yielded_value(), None);
    }

    #[test]
    fn test_map_yielded_leaves_completion_untouched() {
        let y: Step<i32, i32> = Step::Yielded(42);
        let d: Step<i32, i32> = Step::Complete(10);

        assert_eq!(y.map_yielded(|x| x * 2), Step::Yielded(84));
        assert_eq!(d.map_yielded(|x| x * 2), Step::Complete(10));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Step::from(Some(3)), Step::Yielded(3));
        assert_eq!(Step::<i32>::from(None), Step::Complete(()));
    }

    #[test]
    #[should_panic(expected = "should be yielded")]
    fn test_expect_yielded_panics() {
        let d: Step<i32, &str> = Step::Complete("complete");
        d.expect_yielded("should be yielded");
    }

    #[test]
    #[should_panic(expected = "called `Step::unwrap_yielded()` on a `Complete` value")]
    fn test_unwrap_yielded_panics() {
        let d: Step<i32> = Step::Complete(());
        d.unwrap_yielded();
    }
}
