//! Commonly used imports
//!
//! Use `use costep::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Cursor, Sequence, Step, Task};

// Sequence sources
pub use crate::{accumulate, enumerate, iota, iota_by, iota_with, Generator};

// Tasks and timing
pub use crate::{
    drive, drive_bounded, repeat, repeat_immediate, repeat_later, repeat_until, Immediate, Later,
};
