/// Outcome of resuming a cursor: either an element was produced or the pass is over.
///
/// `Step` is what [`Cursor::resume`](crate::Cursor::resume) returns, the same way `Option`
/// is what `Iterator::next` returns, except that completion can carry a value.
///
/// # Examples
///
/// ```rust
/// use costep::Step;
///
/// let produced: Step<i32, ()> = Step::Yielded(42);
/// let finished: Step<i32, ()> = Step::Complete(());
///
/// assert_eq!(produced.map_yielded(|x| x * 2), Step::Yielded(84));
/// assert!(finished.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<Y, D> {
    /// An element was produced; the cursor can be resumed again.
    Yielded(Y),
    /// The pass is over.
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
    /// use costep::Step;
    ///
    /// assert_eq!(Step::<i32, ()>::Yielded(7).yielded_value(), Some(7));
    /// assert_eq!(Step::<i32, ()>::Complete(()).yielded_value(), None);
    /// ```
    #[inline]
    pub fn yielded_value(self) -> Option<Y> {
        match self {
            Step::Yielded(y) => Some(y),
            Step::Complete(_) => None,
        }
    }

    /// Maps a `Step<Y, D>` to `Step<Y2, D>` by applying a function to the yielded value.
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

    /// Returns the contained `Yielded` value, consuming the `self` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Complete`.
    #[inline]
    pub fn unwrap_yielded(self) -> Y {
        match self {
            Step::Yielded(y) => y,
            Step::Complete(_) => panic!("called `Step::unwrap_yielded()` on a `Complete` value"),
        }
    }
}

impl<Y> From<Option<Y>> for Step<Y, ()> {
    #[inline]
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
        let y: Step<i32, ()> = Step::Yielded(42);
        let d: Step<i32, ()> = Step::Complete(());

        assert!(y.is_yielded());
        assert!(!y.is_complete());
        assert!(d.is_complete());
        assert!(!d.is_yielded());
    }

    #[test]
    fn test_map_yielded_leaves_complete_untouched() {
        let y: Step<i32, &str> = Step::Yielded(42);
        let d: Step<i32, &str> = Step::Complete("done");

        assert_eq!(y.map_yielded(|x| x + 1), Step::Yielded(43));
        assert_eq!(d.map_yielded(|x: i32| x + 1), Step::Complete("done"));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Step::from(Some('a')), Step::Yielded('a'));
        assert_eq!(Step::<char, ()>::from(None), Step::Complete(()));
    }

    #[test]
    #[should_panic(expected = "called `Step::unwrap_yielded()` on a `Complete` value")]
    fn test_unwrap_yielded_panics() {
        let d: Step<i32, ()> = Step::Complete(());
        d.unwrap_yielded();
    }
}
