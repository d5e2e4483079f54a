//! Restartable lazy generators.
//!
//! A [`Generator`] stores an immutable [`GenerationSpec`] (start value, step rule and an
//! optional exclusive upper bound) and nothing else. Every pass builds a fresh
//! [`GeneratorCursor`] from that spec, so the same generator can be walked any number of
//! times, sequentially or interleaved, always from the start.
//!
//! # Examples
//!
//! ```rust
//! use costep::prelude::*;
//!
//! let letters = Generator::bounded('a', 'e');
//! let first: String = letters.iter().collect();
//! let second: String = letters.iter().collect();
//! assert_eq!(first, "abcd");
//! assert_eq!(first, second);
//! ```

use std::fmt;

use crate::{iter::CursorIter, Cursor, Sequence, Step};

/// Values with a unit successor, used by [`Increment`].
///
/// Returns `None` when there is no successor (overflow), which ends the sequence.
pub trait Successor: Sized {
    fn successor(&self) -> Option<Self>;
}

macro_rules! impl_successor {
    ($($t:ty),* $(,)?) => {
        $(
            impl Successor for $t {
                #[inline]
                fn successor(&self) -> Option<Self> {
                    self.checked_add(1)
                }
            }
        )*
    };
}

impl_successor!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Successor for char {
    #[inline]
    fn successor(&self) -> Option<Self> {
        match *self {
            // skip the surrogate gap
            '\u{D7FF}' => Some('\u{E000}'),
            c => char::from_u32(c as u32 + 1),
        }
    }
}

macro_rules! impl_float_successor {
    ($($t:ty),* $(,)?) => {
        $(
            impl Successor for $t {
                /// `None` once adding one no longer moves the value or leaves the finite range.
                #[inline]
                fn successor(&self) -> Option<Self> {
                    let next = *self + 1.0;
                    (next.is_finite() && next > *self).then_some(next)
                }
            }
        )*
    };
}

impl_float_successor!(f32, f64);

/// How a generator gets from one element to the next.
///
/// `advance` is called with the element just produced and returns the next candidate,
/// or `None` to end the sequence.
pub trait Rule<T> {
    fn advance(&self, current: &T) -> Option<T>;
}

/// Unit step: `current + 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Increment;

impl<T> Rule<T> for Increment
where
    T: Successor,
{
    #[inline]
    fn advance(&self, current: &T) -> Option<T> {
        current.successor()
    }
}

/// Total step function: the next element is always `f(current)`.
#[derive(Clone, Copy)]
pub struct Transform<F>(pub F);

impl<T, F> Rule<T> for Transform<F>
where
    F: Fn(&T) -> T,
{
    #[inline]
    fn advance(&self, current: &T) -> Option<T> {
        Some((self.0)(current))
    }
}

impl<F> fmt::Debug for Transform<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform").finish_non_exhaustive()
    }
}

/// Partial step function: `f(current)` may return `None` to end the sequence.
#[derive(Clone, Copy)]
pub struct Partial<F>(pub F);

impl<T, F> Rule<T> for Partial<F>
where
    F: Fn(&T) -> Option<T>,
{
    #[inline]
    fn advance(&self, current: &T) -> Option<T> {
        (self.0)(current)
    }
}

impl<F> fmt::Debug for Partial<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Partial").finish_non_exhaustive()
    }
}

/// Immutable description of a sequence.
///
/// The first element is `start`; each following element is `rule.advance(&previous)`.
/// With an `end`, only elements strictly below it are produced, and the first element
/// that is not ends the pass (so a rule that jumps past the bound stops there too).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSpec<T, R> {
    start: T,
    rule: R,
    end: Option<T>,
}

impl<T, R> GenerationSpec<T, R> {
    pub fn unbounded(start: T, rule: R) -> Self {
        Self {
            start,
            rule,
            end: None,
        }
    }

    pub fn bounded(start: T, end: T, rule: R) -> Self {
        Self {
            start,
            rule,
            end: Some(end),
        }
    }

    pub fn start(&self) -> &T {
        &self.start
    }

    pub fn end(&self) -> Option<&T> {
        self.end.as_ref()
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    pub fn is_bounded(&self) -> bool {
        self.end.is_some()
    }
}

impl<T, R> GenerationSpec<T, R>
where
    T: PartialOrd,
{
    fn admits(&self, candidate: &T) -> bool {
        self.end.as_ref().map_or(true, |end| candidate < end)
    }
}

/// A restartable lazy sequence.
///
/// Holds only its [`GenerationSpec`]; per-pass state lives in the cursors returned by
/// [`begin`](Generator::begin). Cloning a generator clones the spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generator<T, R = Increment> {
    spec: GenerationSpec<T, R>,
}

impl<T, R> Generator<T, R> {
    pub fn new(spec: GenerationSpec<T, R>) -> Self {
        Self { spec }
    }

    /// Infinite progression: `start`, `rule(start)`, `rule(rule(start))`, ...
    ///
    /// ```rust
    /// use costep::{Generator, Transform};
    ///
    /// let tens = Generator::unbounded(0, Transform(|x: &i32| x + 10));
    /// assert_eq!(tens.iter().take(3).collect::<Vec<_>>(), vec![0, 10, 20]);
    /// ```
    pub fn unbounded(start: T, rule: R) -> Self {
        Self::new(GenerationSpec::unbounded(start, rule))
    }

    /// Progression over `[start, end)` driven by a custom rule.
    pub fn bounded_by(start: T, end: T, rule: R) -> Self {
        Self::new(GenerationSpec::bounded(start, end, rule))
    }

    pub fn spec(&self) -> &GenerationSpec<T, R> {
        &self.spec
    }
}

impl<T> Generator<T, Increment>
where
    T: Successor,
{
    /// Unit-step progression over `[start, end)`.
    pub fn bounded(start: T, end: T) -> Self {
        Self::bounded_by(start, end, Increment)
    }
}

impl<T, R> Generator<T, R>
where
    T: Clone + PartialOrd,
    R: Rule<T>,
{
    /// Start a fresh pass without needing `&mut self`.
    pub fn begin(&self) -> GeneratorCursor<'_, T, R> {
        tracing::trace!(bounded = self.spec.is_bounded(), "generator pass started");
        GeneratorCursor {
            spec: &self.spec,
            state: CursorState::Fresh,
            produced: 0,
        }
    }

    /// Start a fresh pass as a std iterator.
    pub fn iter(&self) -> CursorIter<GeneratorCursor<'_, T, R>> {
        self.begin().items()
    }
}

impl<T, R> Sequence for Generator<T, R>
where
    T: Clone + PartialOrd,
    R: Rule<T>,
{
    type Cursor<'a>
        = GeneratorCursor<'a, T, R>
    where
        Self: 'a;

    fn cursor(&mut self) -> Self::Cursor<'_> {
        self.begin()
    }
}

impl<'g, T, R> IntoIterator for &'g Generator<T, R>
where
    T: Clone + PartialOrd,
    R: Rule<T>,
{
    type Item = T;
    type IntoIter = CursorIter<GeneratorCursor<'g, T, R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
enum CursorState<T> {
    Fresh,
    Active(T),
    Exhausted,
}

/// One pass over a [`Generator`].
///
/// Holds the last produced element and a borrow of the spec. The rule is only called
/// when the next element is requested; `is_exhausted` peeks by calling it on the last
/// element without advancing.
#[derive(Debug, Clone)]
pub struct GeneratorCursor<'g, T, R> {
    spec: &'g GenerationSpec<T, R>,
    state: CursorState<T>,
    produced: usize,
}

impl<T, R> GeneratorCursor<'_, T, R> {
    /// Number of elements produced so far in this pass.
    pub fn produced(&self) -> usize {
        self.produced
    }
}

impl<T, R> Cursor for GeneratorCursor<'_, T, R>
where
    T: Clone + PartialOrd,
    R: Rule<T>,
{
    type Item = T;

    fn resume(&mut self) -> Step<T, ()> {
        let candidate = match std::mem::replace(&mut self.state, CursorState::Exhausted) {
            CursorState::Fresh => Some(self.spec.start.clone()),
            CursorState::Active(previous) => self.spec.rule.advance(&previous),
            CursorState::Exhausted => return Step::Complete(()),
        };

        match candidate.filter(|value| self.spec.admits(value)) {
            Some(value) => {
                self.state = CursorState::Active(value.clone());
                self.produced += 1;
                Step::Yielded(value)
            }
            None => {
                tracing::debug!(produced = self.produced, "generator pass exhausted");
                Step::Complete(())
            }
        }
    }

    fn is_exhausted(&self) -> bool {
        match &self.state {
            CursorState::Fresh => !self.spec.admits(&self.spec.start),
            CursorState::Active(previous) => self
                .spec
                .rule
                .advance(previous)
                .map_or(true, |next| !self.spec.admits(&next)),
            CursorState::Exhausted => true,
        }
    }
}
