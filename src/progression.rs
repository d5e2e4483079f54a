//! Numeric progression helpers.
//!
//! Thin constructors that configure a [`Generator`]. They hold no state of their own.
//!
//! ```rust
//! use costep::prelude::*;
//!
//! assert_eq!(iota(0, 5).iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
//! assert_eq!(iota_with(1, |x| x * 10).iter().take(3).collect::<Vec<_>>(), vec![1, 10, 100]);
//! assert_eq!(accumulate(1, |x| x * 2).iter().take(5).collect::<Vec<_>>(), vec![1, 2, 4, 8, 16]);
//! ```

use crate::generator::{Generator, Increment, Successor, Transform};

/// Unit-step progression over `[start, end)`.
///
/// Works for any [`Successor`]: the integer types, `char`, `f32` and `f64`.
///
/// ```rust
/// use costep::iota;
///
/// assert_eq!(iota(0.5, 3.0).iter().collect::<Vec<_>>(), vec![0.5, 1.5, 2.5]);
/// ```
pub fn iota<T>(start: T, end: T) -> Generator<T, Increment>
where
    T: Successor,
{
    Generator::bounded(start, end)
}

/// Infinite progression where each element is `step(previous)`.
pub fn iota_with<T, F>(start: T, step: F) -> Generator<T, Transform<F>>
where
    F: Fn(&T) -> T,
{
    Generator::unbounded(start, Transform(step))
}

/// Progression over `[start, end)` where each element is `step(previous)`.
///
/// ```rust
/// use costep::iota_by;
///
/// let evens: Vec<u32> = iota_by(0, 10, |x| x + 2).iter().collect();
/// assert_eq!(evens, vec![0, 2, 4, 6, 8]);
/// ```
pub fn iota_by<T, F>(start: T, end: T, step: F) -> Generator<T, Transform<F>>
where
    F: Fn(&T) -> T,
{
    Generator::bounded_by(start, end, Transform(step))
}

/// Infinite accumulation: `seed`, `f(seed)`, `f(f(seed))`, ...
///
/// The seed is produced as the first element, not consumed.
pub fn accumulate<T, F>(seed: T, f: F) -> Generator<T, Transform<F>>
where
    F: Fn(&T) -> T,
{
    Generator::unbounded(seed, Transform(f))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cursor, Sequence};

    #[test]
    fn test_iota_counts_up_to_end() {
        let values: Vec<_> = iota(0, 15).iter().collect();
        assert_eq!(values.len(), 15);
        assert_eq!(values.first(), Some(&0));
        assert_eq!(values.last(), Some(&14));
    }

    #[test]
    fn test_iota_take_first() {
        let mut head = iota(10, 50).take_first(20);
        let values: Vec<_> = head.cursor().items().collect();
        assert_eq!(values, (10..30).collect::<Vec<_>>());
    }

    #[test]
    fn test_iota_over_chars() {
        let alphabet: String = iota('A', char::from(b'Z' + 1)).iter().collect();
        assert_eq!(alphabet, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn test_accumulate_produces_seed_first() {
        let mut head = accumulate(1, |x| x * 2).take_first(5);
        let values: Vec<_> = head.cursor().items().collect();
        assert_eq!(values, vec![1, 2, 4, 8, 16]);
    }

    #[test]
    fn test_accumulate_over_strings() {
        let shouting = accumulate(String::from("hey"), |s| format!("{s}!"));
        let values: Vec<_> = shouting.iter().take(3).collect();
        assert_eq!(values, vec!["hey", "hey!", "hey!!"]);
    }

    #[test]
    fn test_iota_with_is_unbounded() {
        let seq = iota_with(0_u64, |x| x + 7);
        assert!(!seq.spec().is_bounded());
        assert_eq!(seq.iter().nth(1000), Some(7000));
    }

    #[test]
    fn test_iota_over_floats() {
        let values: Vec<f32> = iota(-1.0, 1.5).iter().collect();
        assert_eq!(values, vec![-1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_iota_by_custom_step() {
        let seq = iota_by(1_i64, 1000, |x| x * 10);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![1, 10, 100]);
    }
}
