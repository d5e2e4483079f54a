//! Best-effort formatted output.
//!
//! Used by the demo binary. A failed write is logged and otherwise ignored; callers never
//! see an error.

use std::{fmt, io::Write};

/// Write formatted text to `dest`.
pub fn write_best_effort<W>(dest: &mut W, args: fmt::Arguments<'_>)
where
    W: Write + ?Sized,
{
    if let Err(err) = dest.write_fmt(args) {
        tracing::warn!(%err, "formatted write failed");
    }
}

/// Write formatted text followed by a newline to `dest`.
pub fn writeln_best_effort<W>(dest: &mut W, args: fmt::Arguments<'_>)
where
    W: Write + ?Sized,
{
    write_best_effort(dest, format_args!("{args}\n"));
}

/// `print_to!(dest, "fmt", args...)`: best-effort formatted write.
///
/// ```rust
/// let mut out = Vec::new();
/// costep::print_to!(&mut out, "{}-{}", 1, 2);
/// assert_eq!(out, b"1-2");
/// ```
#[macro_export]
macro_rules! print_to {
    ($dest:expr, $($arg:tt)*) => {
        $crate::print::write_best_effort($dest, ::std::format_args!($($arg)*))
    };
}

/// `println_to!(dest, "fmt", args...)`: best-effort formatted write plus newline.
#[macro_export]
macro_rules! println_to {
    ($dest:expr) => {
        $crate::print::write_best_effort($dest, ::std::format_args!("\n"))
    };
    ($dest:expr, $($arg:tt)*) => {
        $crate::print::writeln_best_effort($dest, ::std::format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_println_appends_newline() {
        let mut out = Vec::new();
        crate::println_to!(&mut out, "{} {}", "hello", 42);
        crate::println_to!(&mut out);
        assert_eq!(String::from_utf8(out).unwrap(), "hello 42\n\n");
    }

    #[test]
    fn test_failed_write_is_swallowed() {
        let mut sink = Broken;
        crate::print_to!(&mut sink, "{}", "lost");
        writeln_best_effort(&mut sink, format_args!("also lost"));
    }
}
