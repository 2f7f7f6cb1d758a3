//! Splash phase and its one-shot timer.
//!
//! # Design
//! - [`LoadingPhase`] only ever moves from splash to main.
//! - The timer is acquired through a [`Scheduler`]; the returned handle cancels the pending
//!   callback when dropped, so dropping a [`SplashTimer`] is the teardown contract.

/// Splash duration in milliseconds. The splash bar animation reads the same value.
pub const SPLASH_DURATION_MS: u32 = 2_600;

/// CSS custom property carrying the splash duration to the stylesheet.
pub const SPLASH_DURATION_VAR: &str = "--splash-duration";

/// Which of the two view trees is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadingPhase {
    /// Initial splash presentation.
    #[default]
    Splash,
    /// Main site content.
    Main,
}

impl LoadingPhase {
    /// Whether the splash view is showing.
    #[must_use]
    pub const fn is_splash(self) -> bool {
        matches!(self, Self::Splash)
    }

    /// Phase after the splash timer fires. Main is terminal.
    #[must_use]
    pub const fn advance(self) -> Self {
        Self::Main
    }
}

/// Inline style binding the splash bar animation to [`SPLASH_DURATION_MS`].
#[must_use]
pub fn splash_duration_style() -> String {
    format!("{SPLASH_DURATION_VAR}: {SPLASH_DURATION_MS}ms")
}

/// Something that can run a task once after a delay.
pub trait Scheduler {
    /// Handle for the scheduled task. Dropping it must cancel the task if still pending.
    type Handle;

    /// Run `task` once after `delay_ms` milliseconds.
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Pending splash transition. Dropping it before expiry cancels the transition.
#[must_use = "dropping the timer cancels the splash transition"]
pub struct SplashTimer<H> {
    _handle: H,
}

impl<H> SplashTimer<H> {
    /// Schedule `on_elapsed` to run once after [`SPLASH_DURATION_MS`].
    pub fn arm<S>(scheduler: &S, on_elapsed: impl FnOnce() + 'static) -> Self
    where
        S: Scheduler<Handle = H>,
    {
        Self {
            _handle: scheduler.schedule(SPLASH_DURATION_MS, Box::new(on_elapsed)),
        }
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::Scheduler;

    struct Pending {
        due_ms: u64,
        cancelled: Rc<Cell<bool>>,
        task: Box<dyn FnOnce()>,
    }

    /// Deterministic scheduler driven by [`ManualScheduler::advance`].
    #[derive(Default)]
    pub(crate) struct ManualScheduler {
        now_ms: Cell<u64>,
        pending: RefCell<Vec<Pending>>,
    }

    /// Cancels its task on drop.
    pub(crate) struct ManualHandle {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    impl ManualScheduler {
        /// Move the clock forward and run every task that came due and was not cancelled.
        pub(crate) fn advance(&self, ms: u64) {
            let now = self.now_ms.get() + ms;
            self.now_ms.set(now);
            let due: Vec<Pending> = {
                let mut pending = self.pending.borrow_mut();
                let (due, waiting): (Vec<Pending>, Vec<Pending>) =
                    pending.drain(..).partition(|task| task.due_ms <= now);
                *pending = waiting;
                due
            };
            for task in due {
                if !task.cancelled.get() {
                    (task.task)();
                }
            }
        }

        pub(crate) fn pending(&self) -> usize {
            self.pending.borrow().len()
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.pending.borrow_mut().push(Pending {
                due_ms: self.now_ms.get() + u64::from(delay_ms),
                cancelled: Rc::clone(&cancelled),
                task,
            });
            ManualHandle { cancelled }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::manual::{ManualHandle, ManualScheduler};
    use super::*;

    fn armed(scheduler: &ManualScheduler) -> (Rc<Cell<LoadingPhase>>, SplashTimer<ManualHandle>) {
        let phase = Rc::new(Cell::new(LoadingPhase::default()));
        let target = Rc::clone(&phase);
        let timer = SplashTimer::arm(scheduler, move || target.set(target.get().advance()));
        (phase, timer)
    }

    #[test]
    fn phase_starts_in_splash_and_advance_is_terminal() {
        assert!(LoadingPhase::default().is_splash());
        assert_eq!(LoadingPhase::Splash.advance(), LoadingPhase::Main);
        assert_eq!(LoadingPhase::Main.advance(), LoadingPhase::Main);
    }

    #[test]
    fn timer_fires_at_splash_duration() {
        let scheduler = ManualScheduler::default();
        let (phase, _timer) = armed(&scheduler);
        assert_eq!(phase.get(), LoadingPhase::Splash);

        scheduler.advance(u64::from(SPLASH_DURATION_MS) - 1);
        assert_eq!(phase.get(), LoadingPhase::Splash);

        scheduler.advance(1);
        assert_eq!(phase.get(), LoadingPhase::Main);

        scheduler.advance(60_000);
        assert_eq!(phase.get(), LoadingPhase::Main);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn dropping_timer_before_expiry_cancels_transition() {
        let scheduler = ManualScheduler::default();
        let (phase, timer) = armed(&scheduler);
        scheduler.advance(1_000);
        drop(timer);
        scheduler.advance(u64::from(SPLASH_DURATION_MS) * 4);
        assert_eq!(phase.get(), LoadingPhase::Splash);
    }

    #[test]
    fn duration_style_names_custom_property() {
        assert_eq!(splash_duration_style(), "--splash-duration: 2600ms");
    }
}
