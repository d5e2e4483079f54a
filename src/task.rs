//! Manually driven step tasks.
//!
//! A [`Task`] is advanced one step per [`invoke`](Task::invoke) and reports completion
//! through [`is_done`](Task::is_done). Nothing runs in the background: the caller decides
//! when the next step happens, either by hand or with [`drive`].
//!
//! Two builders exist:
//!
//! - [`repeat`] takes one closure that acts and returns `true` once the work is finished.
//! - [`repeat_until`] takes a separate action and completion predicate, under a
//!   [`Timing`] policy: [`Immediate`] or [`Later`].
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use costep::prelude::*;
//!
//! let items = [3, 1, 4];
//! let pos = Cell::new(0);
//! let mut sum = 0;
//!
//! let mut task = repeat_later(
//!     || {
//!         sum += items[pos.get()];
//!         pos.set(pos.get() + 1);
//!     },
//!     || pos.get() == items.len(),
//! );
//!
//! assert_eq!(drive(&mut task), 3);
//! assert!(task.is_done());
//! drop(task);
//! assert_eq!(sum, 8);
//! ```

use std::{cell::Cell, marker::PhantomData};

use crate::{error::Error, Result};

/// A unit of repeated work advanced by explicit calls.
///
/// Once `is_done()` has reported `true` it keeps doing so: completion is terminal.
/// Calling `invoke()` on a finished task is a silent no-op; use
/// [`try_invoke`](Task::try_invoke) to have it reported instead.
pub trait Task {
    /// Run one step, unless the task is already done.
    fn invoke(&mut self);

    /// Whether the task has completed. Valid before the first `invoke`.
    fn is_done(&self) -> bool;

    /// Number of steps that actually ran.
    fn steps(&self) -> usize;

    /// Run one step, or fail with [`Error::Finished`] if the task is done.
    fn try_invoke(&mut self) -> Result<()> {
        if self.is_done() {
            return Err(Error::Finished {
                steps: self.steps(),
            });
        }
        self.invoke();
        Ok(())
    }
}

impl<T> Task for &'_ mut T
where
    T: Task + ?Sized,
{
    fn invoke(&mut self) {
        (**self).invoke()
    }

    fn is_done(&self) -> bool {
        (**self).is_done()
    }

    fn steps(&self) -> usize {
        (**self).steps()
    }
}

impl<T> Task for Box<T>
where
    T: Task + ?Sized,
{
    fn invoke(&mut self) {
        (**self).invoke()
    }

    fn is_done(&self) -> bool {
        (**self).is_done()
    }

    fn steps(&self) -> usize {
        (**self).steps()
    }
}

/// Task built from one closure that acts and reports whether the work is finished.
///
/// Immediate timing: `is_done()` reflects the value returned by the most recent call,
/// and is `false` before the first one.
pub struct Repeat<F> {
    f: F,
    done: bool,
    steps: usize,
}

/// Create a task from an act-and-report closure.
///
/// The closure returns `true` when it has finished its work.
///
/// ```rust
/// use costep::{repeat, Task};
///
/// let mut countdown = 3;
/// let mut task = repeat(|| {
///     countdown -= 1;
///     countdown == 0
/// });
/// task.invoke();
/// task.invoke();
/// assert!(!task.is_done());
/// task.invoke();
/// assert!(task.is_done());
/// ```
pub fn repeat<F>(f: F) -> Repeat<F>
where
    F: FnMut() -> bool,
{
    Repeat {
        f,
        done: false,
        steps: 0,
    }
}

impl<F> Task for Repeat<F>
where
    F: FnMut() -> bool,
{
    fn invoke(&mut self) {
        if self.done {
            tracing::trace!(steps = self.steps, "finished task not invoked");
            return;
        }
        self.done = (self.f)();
        self.steps += 1;
        tracing::trace!(steps = self.steps, done = self.done, "task step");
        if self.done {
            tracing::debug!(steps = self.steps, "task finished");
        }
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn steps(&self) -> usize {
        self.steps
    }
}

/// When a task's completion predicate is evaluated relative to its action.
pub trait Timing {
    const NAME: &'static str;

    /// Called right after the action ran.
    fn after_action<P>(predicate: &P, done: &Cell<bool>)
    where
        P: Fn() -> bool;

    /// Called whenever completion is observed.
    fn observe<P>(predicate: &P, done: &Cell<bool>) -> bool
    where
        P: Fn() -> bool;
}

/// The predicate runs as part of each step, right after the action.
///
/// `is_done()` reports the result of the latest step and is `false` before the first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Immediate;

impl Timing for Immediate {
    const NAME: &'static str = "immediate";

    fn after_action<P>(predicate: &P, done: &Cell<bool>)
    where
        P: Fn() -> bool,
    {
        if predicate() {
            done.set(true);
        }
    }

    fn observe<P>(_predicate: &P, done: &Cell<bool>) -> bool
    where
        P: Fn() -> bool,
    {
        done.get()
    }
}

/// The predicate runs when completion is observed, against the state the latest
/// action left behind.
///
/// Before the first step `is_done()` checks the initial state, so a task with nothing
/// to do is done without running its action at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Later;

impl Timing for Later {
    const NAME: &'static str = "later";

    fn after_action<P>(_predicate: &P, _done: &Cell<bool>)
    where
        P: Fn() -> bool,
    {
    }

    fn observe<P>(predicate: &P, done: &Cell<bool>) -> bool
    where
        P: Fn() -> bool,
    {
        if !done.get() && predicate() {
            done.set(true);
        }
        done.get()
    }
}

/// Task built from a separate action and completion predicate under timing `T`.
pub struct RepeatUntil<A, P, T> {
    action: A,
    predicate: P,
    done: Cell<bool>,
    steps: usize,
    timing: PhantomData<T>,
}

/// Create a task from an action and a completion predicate under timing `T`.
///
/// ```rust
/// use std::cell::Cell;
/// use costep::{repeat_until, Immediate, Task};
///
/// let n = Cell::new(0);
/// let mut task = repeat_until::<Immediate, _, _>(|| n.set(n.get() + 1), || n.get() >= 2);
/// assert!(!task.is_done());
/// task.invoke();
/// task.invoke();
/// assert!(task.is_done());
/// ```
pub fn repeat_until<T, A, P>(action: A, predicate: P) -> RepeatUntil<A, P, T>
where
    T: Timing,
    A: FnMut(),
    P: Fn() -> bool,
{
    RepeatUntil {
        action,
        predicate,
        done: Cell::new(false),
        steps: 0,
        timing: PhantomData,
    }
}

/// [`repeat_until`] with [`Immediate`] timing.
pub fn repeat_immediate<A, P>(action: A, predicate: P) -> RepeatUntil<A, P, Immediate>
where
    A: FnMut(),
    P: Fn() -> bool,
{
    repeat_until(action, predicate)
}

/// [`repeat_until`] with [`Later`] timing.
pub fn repeat_later<A, P>(action: A, predicate: P) -> RepeatUntil<A, P, Later>
where
    A: FnMut(),
    P: Fn() -> bool,
{
    repeat_until(action, predicate)
}

impl<A, P, T> Task for RepeatUntil<A, P, T>
where
    A: FnMut(),
    P: Fn() -> bool,
    T: Timing,
{
    fn invoke(&mut self) {
        if self.is_done() {
            tracing::trace!(steps = self.steps, timing = T::NAME, "finished task not invoked");
            return;
        }
        (self.action)();
        self.steps += 1;
        T::after_action(&self.predicate, &self.done);
        tracing::trace!(steps = self.steps, timing = T::NAME, "task step");
        if self.done.get() {
            tracing::debug!(steps = self.steps, timing = T::NAME, "task finished");
        }
    }

    fn is_done(&self) -> bool {
        T::observe(&self.predicate, &self.done)
    }

    fn steps(&self) -> usize {
        self.steps
    }
}

/// Invoke `task` until it is done and return how many steps that took.
///
/// Never returns for a task that never finishes; see [`drive_bounded`].
pub fn drive<T>(task: &mut T) -> usize
where
    T: Task + ?Sized,
{
    let before = task.steps();
    while !task.is_done() {
        task.invoke();
    }
    task.steps() - before
}

/// Like [`drive`], but give up with [`Error::StepLimit`] after `limit` steps.
pub fn drive_bounded<T>(task: &mut T, limit: usize) -> Result<usize>
where
    T: Task + ?Sized,
{
    let mut taken = 0;
    while !task.is_done() {
        if taken == limit {
            tracing::debug!(limit, "task did not finish within step limit");
            return Err(Error::StepLimit { limit });
        }
        task.invoke();
        taken += 1;
    }
    Ok(taken)
}

/// Step every unfinished task once per round, in order, until all are done.
///
/// Returns the number of rounds.
pub fn drive_all(tasks: &mut [&mut dyn Task]) -> usize {
    let mut rounds = 0;
    while tasks.iter().any(|task| !task.is_done()) {
        for task in tasks.iter_mut().filter(|task| !task.is_done()) {
            task.invoke();
        }
        rounds += 1;
    }
    rounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn walker(len: usize) -> (Cell<usize>, usize) {
        (Cell::new(0), len)
    }

    #[test]
    fn test_repeat_walks_vector() {
        let values = vec![0, 1, 2, 4, 5];
        let mut seen = Vec::new();
        let mut pos = 0;
        let mut task = repeat(|| {
            seen.push(values[pos]);
            pos += 1;
            pos == values.len()
        });

        assert!(!task.is_done());
        assert_eq!(drive(&mut task), 5);
        assert_eq!(task.steps(), 5);
        drop(task);
        assert_eq!(seen, values);
    }

    #[test]
    fn test_invoke_after_done_is_noop() {
        let calls = Cell::new(0);
        let mut task = repeat(|| {
            calls.set(calls.get() + 1);
            true
        });
        task.invoke();
        task.invoke();
        task.invoke();
        assert_eq!(calls.get(), 1);
        assert_eq!(task.steps(), 1);
        assert!(task.is_done());
    }

    #[test]
    fn test_try_invoke_reports_finished() {
        let mut task = repeat(|| true);
        assert_eq!(task.try_invoke(), Ok(()));
        assert_eq!(task.try_invoke(), Err(Error::Finished { steps: 1 }));
    }

    #[test]
    fn test_timings_finish_after_same_step_count() {
        let (a_pos, len) = walker(4);
        let mut immediate = repeat_immediate(|| a_pos.set(a_pos.get() + 1), || a_pos.get() == len);
        let (b_pos, len) = walker(4);
        let mut later = repeat_later(|| b_pos.set(b_pos.get() + 1), || b_pos.get() == len);

        for step in 1..=4 {
            assert!(!immediate.is_done());
            assert!(!later.is_done());
            immediate.invoke();
            later.invoke();
            assert_eq!(immediate.is_done(), step == 4);
            assert_eq!(later.is_done(), step == 4);
        }
        assert_eq!(immediate.steps(), later.steps());
    }

    #[test]
    fn test_later_is_done_before_first_step_when_nothing_to_do() {
        let (pos, len) = walker(0);
        let ran = Cell::new(false);
        let mut later = repeat_later(|| ran.set(true), || pos.get() == len);
        assert!(later.is_done());
        assert_eq!(drive(&mut later), 0);
        assert!(!ran.get());
    }

    #[test]
    fn test_immediate_runs_first_step_regardless() {
        let (pos, len) = walker(0);
        let mut immediate = repeat_immediate(|| pos.set(pos.get() + 1), || pos.get() >= len);
        assert!(!immediate.is_done());
        assert_eq!(drive(&mut immediate), 1);
    }

    #[test]
    fn test_later_observes_external_change() {
        let target = Cell::new(10);
        let count = Cell::new(0);
        let mut task = repeat_later(
            || count.set(count.get() + 1),
            || count.get() >= target.get(),
        );
        task.invoke();
        task.invoke();
        assert!(!task.is_done());
        target.set(2);
        assert!(task.is_done());
    }

    #[test]
    fn test_done_is_terminal() {
        let flag = Cell::new(false);
        let task = repeat_later(|| {}, || flag.get());
        flag.set(true);
        assert!(task.is_done());
        flag.set(false);
        assert!(task.is_done());
    }

    #[test]
    fn test_drive_bounded_gives_up() {
        let mut forever = repeat(|| false);
        assert_eq!(
            drive_bounded(&mut forever, 10),
            Err(Error::StepLimit { limit: 10 })
        );
        assert_eq!(forever.steps(), 10);

        let mut short = repeat(|| true);
        assert_eq!(drive_bounded(&mut short, 10), Ok(1));
    }

    #[test]
    fn test_drive_all_interleaves() {
        let log = RefCell::new(Vec::new());
        let mut a_left = 2;
        let mut a = repeat(|| {
            log.borrow_mut().push('a');
            a_left -= 1;
            a_left == 0
        });
        let mut b_left = 3;
        let mut b = repeat(|| {
            log.borrow_mut().push('b');
            b_left -= 1;
            b_left == 0
        });

        let rounds = drive_all(&mut [&mut a, &mut b]);
        assert_eq!(rounds, 3);
        drop((a, b));
        assert_eq!(log.into_inner(), vec!['a', 'b', 'a', 'b', 'b']);
    }

    #[test]
    fn test_boxed_tasks() {
        let mut tasks: Vec<Box<dyn Task>> =
            vec![Box::new(repeat(|| true)), Box::new(repeat(|| true))];
        for task in &mut tasks {
            assert_eq!(drive(task), 1);
        }
    }
}
