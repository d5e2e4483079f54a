//! The per-pass iteration protocol.
//!
//! A [`Cursor`] is the disposable half of a lazy sequence: it is created fresh at the
//! start of every pass (see [`Sequence::cursor`](crate::Sequence::cursor)), pulled one
//! element at a time with [`resume`](Cursor::resume), and dropped when the pass ends or
//! is abandoned. Between pulls a cursor holds nothing but its current position.
//!
//! # Examples
//!
//! ```rust
//! use costep::prelude::*;
//!
//! let digits = iota(0, 3);
//! let mut cursor = digits.begin();
//! assert_eq!(cursor.resume(), Step::Yielded(0));
//! assert_eq!(cursor.resume(), Step::Yielded(1));
//! assert_eq!(cursor.resume(), Step::Yielded(2));
//! assert_eq!(cursor.resume(), Step::Complete(()));
//! assert!(cursor.is_exhausted());
//! ```

use crate::{iter::CursorIter, sequence::TakeFirstCursor, step::Step};

/// Per-pass state of a lazy sequence.
///
/// Each call to `resume()` either produces the next element or reports that the pass is
/// over. Resuming an exhausted cursor keeps returning `Complete`.
pub trait Cursor {
    /// Element produced by this cursor.
    type Item;

    /// Advance one element.
    fn resume(&mut self) -> Step<Self::Item, ()>;

    /// Whether the next `resume` would return `Complete`.
    ///
    /// Answers without advancing, so it turns `true` right after the last element is
    /// yielded, and a fresh cursor over an empty sequence is exhausted before the first
    /// `resume`. Loops of the form `while !c.is_exhausted() { c.resume() }` see every
    /// element and never a `Complete`.
    fn is_exhausted(&self) -> bool;

    /// Wrap this cursor as a std [`Iterator`].
    fn items(self) -> CursorIter<Self>
    where
        Self: Sized,
    {
        CursorIter::new(self)
    }

    /// Stop after at most `n` elements.
    fn take_first(self, n: usize) -> TakeFirstCursor<Self>
    where
        Self: Sized,
    {
        TakeFirstCursor::new(self, n)
    }

    /// Erase the cursor type, e.g. to hold cursors of different sources in one `Vec`.
    fn boxed<'a>(self) -> Box<dyn Cursor<Item = Self::Item> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<L, R> Cursor for either::Either<L, R>
where
    L: Cursor,
    R: Cursor<Item = L::Item>,
{
    type Item = L::Item;

    fn resume(&mut self) -> Step<Self::Item, ()> {
        match self {
            either::Either::Left(l) => l.resume(),
            either::Either::Right(r) => r.resume(),
        }
    }

    fn is_exhausted(&self) -> bool {
        match self {
            either::Either::Left(l) => l.is_exhausted(),
            either::Either::Right(r) => r.is_exhausted(),
        }
    }
}

impl<C> Cursor for Option<C>
where
    C: Cursor,
{
    type Item = C::Item;

    fn resume(&mut self) -> Step<Self::Item, ()> {
        match self {
            Some(c) => c.resume(),
            None => Step::Complete(()),
        }
    }

    fn is_exhausted(&self) -> bool {
        self.as_ref().map_or(true, Cursor::is_exhausted)
    }
}

impl<I> Cursor for Box<dyn Cursor<Item = I> + '_> {
    type Item = I;

    fn resume(&mut self) -> Step<Self::Item, ()> {
        (**self).resume()
    }

    fn is_exhausted(&self) -> bool {
        (**self).is_exhausted()
    }
}

impl<C> Cursor for &'_ mut C
where
    C: Cursor + ?Sized,
{
    type Item = C::Item;

    fn resume(&mut self) -> Step<Self::Item, ()> {
        (**self).resume()
    }

    fn is_exhausted(&self) -> bool {
        (**self).is_exhausted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{iota, Generator, Increment};
    use either::Either;

    #[test]
    fn test_either_dispatches_to_active_side() {
        let short = iota(0, 2);
        let long = iota(10, 13);
        let mut cursor: Either<_, _> = Either::Right(long.begin());

        assert_eq!(cursor.resume(), Step::Yielded(10));
        cursor = Either::Left(short.begin());
        assert_eq!(cursor.resume(), Step::Yielded(0));
        assert_eq!(cursor.resume(), Step::Yielded(1));
        assert_eq!(cursor.resume(), Step::Complete(()));
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_none_is_exhausted() {
        let mut cursor: Option<crate::GeneratorCursor<'_, u8, Increment>> = None;
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.resume(), Step::Complete(()));
    }

    #[test]
    fn test_boxed_cursor_erases_type() {
        let seq: Generator<i32, Increment> = iota(5, 7);
        let mut cursors: Vec<Box<dyn Cursor<Item = i32> + '_>> =
            vec![seq.begin().boxed(), seq.begin().take_first(1).boxed()];

        let collected: Vec<Vec<i32>> = cursors.iter_mut().map(|c| c.items().collect()).collect();
        assert_eq!(collected, vec![vec![5, 6], vec![5]]);
    }

    #[test]
    fn test_mut_ref_cursor_resumes_in_place() {
        let seq = iota(0, 4);
        let mut cursor = seq.begin();
        let first_two: Vec<_> = (&mut cursor).items().take(2).collect();
        assert_eq!(first_two, vec![0, 1]);
        assert_eq!(cursor.resume(), Step::Yielded(2));
    }
}
