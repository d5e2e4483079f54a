//! Iterator adapter for cursors.
//!
//! [`CursorIter`] lets any [`Cursor`] take part in std iterator chains, so generators and
//! enumerators work with `for` loops, `Iterator::take`, `zip` and the rest.
//!
//! ```rust
//! use costep::prelude::*;
//!
//! let squares: Vec<u64> = accumulate(2_u64, |x| x * x).begin().items().take(4).collect();
//! assert_eq!(squares, vec![2, 4, 16, 256]);
//! ```

use std::iter::FusedIterator;

use crate::{Cursor, Step};

/// Iterator adapter for a [`Cursor`].
///
/// Resumes the wrapped cursor on every `next()` until it completes, then stays
/// exhausted. `&mut CursorIter` is an iterator too, so a pass can be consumed in
/// pieces.
#[derive(Debug, Clone)]
pub struct CursorIter<C> {
    cursor: C,
    complete: bool,
}

impl<C> CursorIter<C>
where
    C: Cursor,
{
    pub fn new(cursor: C) -> Self {
        let complete = cursor.is_exhausted();
        Self { cursor, complete }
    }

    /// Check if the underlying pass has completed.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Recover the cursor, e.g. to keep resuming it manually.
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C> Iterator for CursorIter<C>
where
    C: Cursor,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.complete {
            return None;
        }
        match self.cursor.resume() {
            Step::Yielded(item) => Some(item),
            Step::Complete(()) => {
                self.complete = true;
                None
            }
        }
    }
}

impl<C> FusedIterator for CursorIter<C> where C: Cursor {}
