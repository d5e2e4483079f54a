//! Errors reported by the checked entry points.
//!
//! Completion is never an error: cursors report it with [`Step::Complete`](crate::Step)
//! and tasks with [`Task::is_done`](crate::Task::is_done). These variants only come out
//! of APIs that explicitly check for misuse.

/// Misuse detected by a checked API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `try_invoke` on a task that already finished.
    #[error("task already finished after {steps} steps")]
    Finished { steps: usize },

    /// `drive_bounded` gave up before the task finished.
    #[error("task still running after {limit} steps")]
    StepLimit { limit: usize },

    /// Write access requested from an element of a read-only pass.
    #[error("element belongs to a read-only enumeration pass")]
    ReadOnly,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::Finished { steps: 3 }.to_string(),
            "task already finished after 3 steps"
        );
        assert_eq!(
            Error::StepLimit { limit: 10 }.to_string(),
            "task still running after 10 steps"
        );
        assert_eq!(
            Error::ReadOnly.to_string(),
            "element belongs to a read-only enumeration pass"
        );
    }
}
