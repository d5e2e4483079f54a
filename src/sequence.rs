//! Restartable sequence sources and transforms written against them.
//!
//! A [`Sequence`] is the durable half of a lazy sequence. It never advances by itself;
//! every call to [`Sequence::cursor`] hands out a brand-new [`Cursor`] positioned at the
//! start. Transforms such as [`TakeFirst`] only rely on this trait, so they work the same
//! over generators, enumerators and each other.

use crate::{Cursor, Step};

/// A source of lazy sequence passes.
///
/// `cursor` takes `&mut self` so that sources yielding mutable access (an enumerator
/// over a `&mut` container) fit the same protocol as read-only ones.
///
/// ```rust
/// use costep::prelude::*;
///
/// fn first_three<S: Sequence>(source: &mut S) -> Vec<<S::Cursor<'_> as Cursor>::Item> {
///     source.cursor().items().take(3).collect()
/// }
///
/// assert_eq!(first_three(&mut iota(7_i64, 100)), vec![7, 8, 9]);
///
/// let mut letters = vec!['x', 'y', 'z', 'w'];
/// let firsts: Vec<char> = first_three(&mut enumerate(&mut letters))
///     .into_iter()
///     .map(|e| *e)
///     .collect();
/// assert_eq!(firsts, vec!['x', 'y', 'z']);
/// ```
pub trait Sequence {
    /// Per-pass state handed out by [`cursor`](Sequence::cursor).
    type Cursor<'a>: Cursor
    where
        Self: 'a;

    /// Start a fresh pass.
    fn cursor(&mut self) -> Self::Cursor<'_>;

    /// Limit every pass to at most `n` elements.
    fn take_first(self, n: usize) -> TakeFirst<Self>
    where
        Self: Sized,
    {
        TakeFirst {
            inner: self,
            limit: n,
        }
    }
}

impl<S> Sequence for &'_ mut S
where
    S: Sequence + ?Sized,
{
    type Cursor<'a>
        = S::Cursor<'a>
    where
        Self: 'a;

    fn cursor(&mut self) -> Self::Cursor<'_> {
        (**self).cursor()
    }
}

/// Sequence transform that stops each pass after `limit` elements.
///
/// Restartable like its source: every pass starts from the source's first element.
#[derive(Debug, Clone)]
pub struct TakeFirst<S> {
    inner: S,
    limit: usize,
}

impl<S> TakeFirst<S> {
    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S> Sequence for TakeFirst<S>
where
    S: Sequence,
{
    type Cursor<'a>
        = TakeFirstCursor<S::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&mut self) -> Self::Cursor<'_> {
        TakeFirstCursor::new(self.inner.cursor(), self.limit)
    }
}

/// Cursor that yields at most `remaining` more elements of the wrapped cursor.
#[derive(Debug, Clone)]
pub struct TakeFirstCursor<C> {
    cursor: C,
    remaining: usize,
}

impl<C> TakeFirstCursor<C> {
    pub(crate) fn new(cursor: C, remaining: usize) -> Self {
        Self { cursor, remaining }
    }
}

impl<C> Cursor for TakeFirstCursor<C>
where
    C: Cursor,
{
    type Item = C::Item;

    fn resume(&mut self) -> Step<Self::Item, ()> {
        if self.remaining == 0 {
            return Step::Complete(());
        }
        match self.cursor.resume() {
            Step::Yielded(item) => {
                self.remaining -= 1;
                Step::Yielded(item)
            }
            Step::Complete(()) => {
                self.remaining = 0;
                Step::Complete(())
            }
        }
    }

    fn is_exhausted(&self) -> bool {
        self.remaining == 0 || self.cursor.is_exhausted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{accumulate, enumerate, iota};

    fn drain<S>(source: &mut S) -> Vec<<S::Cursor<'_> as Cursor>::Item>
    where
        S: Sequence,
    {
        source.cursor().items().collect()
    }

    #[test]
    fn test_take_first_over_bounded_generator() {
        let mut head = iota(10, 50).take_first(20);
        assert_eq!(drain(&mut head), (10..30).collect::<Vec<_>>());
    }

    #[test]
    fn test_take_first_over_infinite_generator() {
        let mut head = accumulate(1, |x| x * 2).take_first(5);
        assert_eq!(drain(&mut head), vec![1, 2, 4, 8, 16]);
        assert_eq!(drain(&mut head), vec![1, 2, 4, 8, 16]);
    }

    #[test]
    fn test_take_first_longer_than_source() {
        let mut head = iota(0, 3).take_first(10);
        let mut cursor = head.cursor();
        assert!(!cursor.is_exhausted());
        assert_eq!((&mut cursor).items().count(), 3);
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_take_zero_is_exhausted_up_front() {
        let mut head = iota(0, 3).take_first(0);
        assert!(head.cursor().is_exhausted());
        assert_eq!(head.limit(), 0);
    }

    #[test]
    fn test_take_first_over_owned_enumerator() {
        let mut head = enumerate(vec!['a', 'b', 'c']).take_first(2);
        let seen: Vec<char> = head.cursor().items().map(|e| *e).collect();
        assert_eq!(seen, vec!['a', 'b']);
        assert_eq!(head.into_inner().into_inner(), Some(vec!['a', 'b', 'c']));
    }

    #[test]
    fn test_nested_take_first() {
        let mut head = iota(0_u32, 100).take_first(10).take_first(3);
        assert_eq!(drain(&mut head), vec![0, 1, 2]);
    }
}
