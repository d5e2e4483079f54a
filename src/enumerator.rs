//! Lazy enumeration over existing containers.
//!
//! [`enumerate`] remembers *how* it was handed its container and keeps that choice for
//! its whole life:
//!
//! | argument  | [`Mode`]               | elements                 |
//! |-----------|------------------------|--------------------------|
//! | `&mut c`  | [`Mode::MutableRef`]   | writable, write-through  |
//! | `&c`      | [`Mode::ReadOnlyRef`]  | read-only                |
//! | `c`       | [`Mode::Owned`]        | read-only, kept alive    |
//!
//! ```rust
//! use costep::prelude::*;
//!
//! let mut scores = vec![1, 2, 3];
//! for mut score in enumerate(&mut scores).cursor().items() {
//!     if let Some(s) = score.get_mut() {
//!         *s *= 10;
//!     }
//! }
//! assert_eq!(scores, vec![10, 20, 30]);
//! ```
//!
//! Cursors walk the container's storage by position. The container cannot be resized
//! while a pass is live: the pass borrows it.

use std::{fmt, ops::Deref, slice};

use either::Either;

use crate::{error::Error, Cursor, Result, Sequence, Step};

/// Slice-backed containers an [`Enumerator`] can walk.
pub trait Container {
    type Elem;

    fn as_slice(&self) -> &[Self::Elem];
    fn as_mut_slice(&mut self) -> &mut [Self::Elem];
}

impl<T> Container for Vec<T> {
    type Elem = T;

    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T, const N: usize> Container for [T; N] {
    type Elem = T;

    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Container for Box<[T]> {
    type Elem = T;

    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

/// How an enumerator holds its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    MutableRef,
    ReadOnlyRef,
    Owned,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::MutableRef => "mutable-ref",
            Mode::ReadOnlyRef => "read-only-ref",
            Mode::Owned => "owned",
        };
        f.write_str(name)
    }
}

/// The container together with its ownership mode. Exactly one mode is active.
///
/// Not `Clone`: an owned container is moved in once and never duplicated.
#[derive(Debug)]
pub enum Binding<'c, C> {
    MutableRef(&'c mut C),
    ReadOnlyRef(&'c C),
    Owned(C),
}

impl<C> Binding<'_, C>
where
    C: Container,
{
    pub fn mode(&self) -> Mode {
        match self {
            Binding::MutableRef(_) => Mode::MutableRef,
            Binding::ReadOnlyRef(_) => Mode::ReadOnlyRef,
            Binding::Owned(_) => Mode::Owned,
        }
    }

    fn as_slice(&self) -> &[C::Elem] {
        match self {
            Binding::MutableRef(c) => c.as_slice(),
            Binding::ReadOnlyRef(c) => c.as_slice(),
            Binding::Owned(c) => c.as_slice(),
        }
    }
}

/// Conversion of an `enumerate` argument into a [`Binding`].
///
/// The mode is picked from the argument's type: `&mut C`, `&C`, or an owned container.
pub trait IntoBinding<'c> {
    type Container: Container;

    fn into_binding(self) -> Binding<'c, Self::Container>;
}

impl<'c, C> IntoBinding<'c> for &'c mut C
where
    C: Container,
{
    type Container = C;

    fn into_binding(self) -> Binding<'c, C> {
        Binding::MutableRef(self)
    }
}

impl<'c, C> IntoBinding<'c> for &'c C
where
    C: Container,
{
    type Container = C;

    fn into_binding(self) -> Binding<'c, C> {
        Binding::ReadOnlyRef(self)
    }
}

impl<'c, C> IntoBinding<'c> for Binding<'c, C>
where
    C: Container,
{
    type Container = C;

    fn into_binding(self) -> Binding<'c, C> {
        self
    }
}

macro_rules! impl_owned_binding {
    ($([$($generics:tt)*] $container:ty),* $(,)?) => {
        $(
            impl<'c, $($generics)*> IntoBinding<'c> for $container
            where
                $container: 'c,
            {
                type Container = $container;

                fn into_binding(self) -> Binding<'c, $container> {
                    Binding::Owned(self)
                }
            }
        )*
    };
}

impl_owned_binding!(
    [T] Vec<T>,
    [T, const N: usize] [T; N],
    [T] Box<[T]>,
);

/// Build an [`Enumerator`], classifying the argument's ownership mode.
///
/// ```rust
/// use costep::{enumerate, Mode};
///
/// let mut v = vec![1, 2];
/// assert_eq!(enumerate(&mut v).mode(), Mode::MutableRef);
/// assert_eq!(enumerate(&v).mode(), Mode::ReadOnlyRef);
/// assert_eq!(enumerate(v).mode(), Mode::Owned);
/// ```
pub fn enumerate<'c, B>(source: B) -> Enumerator<'c, B::Container>
where
    B: IntoBinding<'c>,
{
    Enumerator::new(source.into_binding())
}

/// A restartable lazy sequence over a container's elements.
#[derive(Debug)]
pub struct Enumerator<'c, C> {
    binding: Binding<'c, C>,
}

impl<'c, C> Enumerator<'c, C>
where
    C: Container,
{
    pub fn new(binding: Binding<'c, C>) -> Self {
        Self { binding }
    }

    pub fn mode(&self) -> Mode {
        self.binding.mode()
    }

    pub fn len(&self) -> usize {
        self.binding.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Start a read-only pass, whatever the mode.
    pub fn begin(&self) -> EnumeratorCursor<'_, C::Elem> {
        tracing::trace!(mode = %self.mode(), len = self.len(), "read-only pass started");
        Either::Right(ReadOnlySlots(self.binding.as_slice().iter()))
    }

    /// Read-only std iterator over the elements, whatever the mode.
    pub fn iter(&self) -> slice::Iter<'_, C::Elem> {
        self.binding.as_slice().iter()
    }

    /// Give back an owned container; borrowed modes return `None`.
    pub fn into_inner(self) -> Option<C> {
        match self.binding {
            Binding::Owned(c) => Some(c),
            Binding::MutableRef(_) | Binding::ReadOnlyRef(_) => None,
        }
    }
}

impl<C> Sequence for Enumerator<'_, C>
where
    C: Container,
{
    type Cursor<'a>
        = EnumeratorCursor<'a, C::Elem>
    where
        Self: 'a;

    /// Start a pass. `MutableRef` passes yield writable elements.
    fn cursor(&mut self) -> Self::Cursor<'_> {
        let mode = self.mode();
        let len = self.len();
        tracing::trace!(%mode, len, "enumeration pass started");
        match &mut self.binding {
            Binding::MutableRef(c) => Either::Left(WritableSlots(c.as_mut_slice().iter_mut())),
            Binding::ReadOnlyRef(c) => Either::Right(ReadOnlySlots(c.as_slice().iter())),
            Binding::Owned(c) => Either::Right(ReadOnlySlots(c.as_slice().iter())),
        }
    }
}

impl<'a, C> IntoIterator for &'a Enumerator<'_, C>
where
    C: Container,
{
    type Item = &'a C::Elem;
    type IntoIter = slice::Iter<'a, C::Elem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One pass over an [`Enumerator`].
pub type EnumeratorCursor<'a, T> = Either<WritableSlots<'a, T>, ReadOnlySlots<'a, T>>;

/// Positional cursor handing out writable elements.
#[derive(Debug)]
pub struct WritableSlots<'a, T>(slice::IterMut<'a, T>);

impl<'a, T> Cursor for WritableSlots<'a, T> {
    type Item = Element<'a, T>;

    fn resume(&mut self) -> Step<Self::Item, ()> {
        self.0.next().map(Element::Writable).into()
    }

    fn is_exhausted(&self) -> bool {
        self.0.len() == 0
    }
}

/// Positional cursor handing out read-only elements.
#[derive(Debug, Clone)]
pub struct ReadOnlySlots<'a, T>(slice::Iter<'a, T>);

impl<'a, T> Cursor for ReadOnlySlots<'a, T> {
    type Item = Element<'a, T>;

    fn resume(&mut self) -> Step<Self::Item, ()> {
        self.0.next().map(Element::ReadOnly).into()
    }

    fn is_exhausted(&self) -> bool {
        self.0.len() == 0
    }
}

/// An element yielded by an enumerator pass.
///
/// Derefs to the element. Write access is only available for elements of a
/// `MutableRef` pass.
#[derive(Debug)]
pub enum Element<'a, T> {
    Writable(&'a mut T),
    ReadOnly(&'a T),
}

impl<'a, T> Element<'a, T> {
    pub fn is_writable(&self) -> bool {
        matches!(self, Element::Writable(_))
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Element::Writable(value) => Some(value),
            Element::ReadOnly(_) => None,
        }
    }

    /// Like [`get_mut`](Element::get_mut), but reports read-only access as an error.
    pub fn try_mut(&mut self) -> Result<&mut T> {
        self.get_mut().ok_or(Error::ReadOnly)
    }

    pub fn into_mut(self) -> Option<&'a mut T> {
        match self {
            Element::Writable(value) => Some(value),
            Element::ReadOnly(_) => None,
        }
    }
}

impl<T> Deref for Element<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self {
            Element::Writable(value) => value,
            Element::ReadOnly(value) => value,
        }
    }
}
