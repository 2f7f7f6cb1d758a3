//! Browser timer backend for the splash [`Scheduler`].

use gloo::timers::callback::Timeout;

use crate::core::splash::Scheduler;

/// Schedules through `setTimeout`. A dropped [`Timeout`] clears its timer.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}
