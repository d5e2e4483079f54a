//! Small numeric helpers.

/// Types that can be squared.
pub trait Square {
    fn sqr(self) -> Self;
}

macro_rules! impl_square {
    ($($t:ty),* $(,)?) => {
        $(
            impl Square for $t {
                #[inline]
                fn sqr(self) -> Self {
                    self * self
                }
            }
        )*
    };
}

impl_square!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

/// `x * x`.
///
/// Integer overflow follows the usual arithmetic rules (panics in debug builds).
///
/// ```rust
/// use costep::math::sqr;
///
/// assert_eq!(sqr(3), 9);
/// assert_eq!(sqr(2_631_701_985_u64), 6_925_855_337_852_940_225);
/// assert_eq!(sqr(1.5), 2.25);
/// ```
#[inline]
pub fn sqr<T: Square>(x: T) -> T {
    x.sqr()
}

/// Types with a square root.
pub trait SquareRoot {
    fn sqrt(self) -> Self;
}

impl SquareRoot for f32 {
    #[inline]
    fn sqrt(self) -> Self {
        f32::sqrt(self)
    }
}

impl SquareRoot for f64 {
    #[inline]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }
}

/// Square root; negative input gives NaN.
#[inline]
pub fn sqrt<T: SquareRoot>(x: T) -> T {
    x.sqrt()
}
