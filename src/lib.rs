//! # Costep: restartable lazy sequences and cooperative step tasks
//!
//! Produce sequences one element at a time, and drive repeated work one step at a time,
//! with nothing running in the background.
//!
//! ## Core Traits
//!
//! - **[`Sequence`]**: a durable, restartable source; every [`cursor()`](Sequence::cursor)
//!   call starts a fresh pass
//! - **[`Cursor`]**: the disposable state of one pass, advanced with `resume()`
//! - **[`Task`]**: repeated work advanced with `invoke()` and checked with `is_done()`
//!
//! ## Example
//!
//! ```
//! use costep::prelude::*;
//!
//! // Generators restart from their start value on every pass
//! let mut head = accumulate(1, |x| x * 2).take_first(5);
//! let first: Vec<_> = head.cursor().items().collect();
//! let again: Vec<_> = head.cursor().items().collect();
//! assert_eq!(first, vec![1, 2, 4, 8, 16]);
//! assert_eq!(first, again);
//!
//! // Enumerators keep the ownership mode they were given
//! let mut values = vec![1, 2, 3];
//! for mut v in enumerate(&mut values).cursor().items() {
//!     *v.try_mut()? += 40;
//! }
//! assert_eq!(values, vec![41, 42, 43]);
//! # Ok::<(), costep::Error>(())
//! ```
//!
//! ## Common Functions
//!
//! **Sequences:**
//! - [`iota(start, end)`](iota) - unit steps over `[start, end)`
//! - [`iota_with(start, f)`](iota_with) / [`accumulate(seed, f)`](accumulate) - infinite
//!   progressions
//! - [`enumerate(container)`](enumerate) - walk `&mut c`, `&c` or an owned `c`
//!
//! **Tasks:**
//! - [`repeat(f)`](repeat) - act-and-report closure
//! - [`repeat_until(action, done)`](repeat_until) - separate predicate under a [`Timing`]
//! - [`drive(task)`](drive) - invoke until done

mod cursor;
mod enumerator;
mod error;
mod generator;
mod iter;
pub mod math;
pub mod prelude;
pub mod print;
mod progression;
mod sequence;
mod step;
mod task;

pub use cursor::*;
pub use enumerator::*;
pub use error::*;
pub use generator::*;
pub use iter::*;
pub use progression::*;
pub use sequence::*;
pub use step::*;
pub use task::*;
