use gloo_timers::callback::Timeout;

pub type Task = Box<dyn FnOnce()>;

/// Runs a task once after a delay in milliseconds.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Task);
}

/// Browser scheduler backed by `setTimeout`. Tasks are fire-and-forget.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        Timeout::new(delay_ms, task).forget();
    }
}

// Shared handles schedule through the same clock.
impl<S: Scheduler> Scheduler for std::rc::Rc<S> {
    fn schedule(&self, delay_ms: u32, task: Task) {
        (**self).schedule(delay_ms, task)
    }
}

#[cfg(test)]
pub use virtual_time::VirtualScheduler;
