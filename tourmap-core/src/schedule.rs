use time::Duration;

use crate::entities::Timestamp;

/// A cancellable, trailing-edge debounced task.
///
/// `schedule` always replaces a pending deadline instead of stacking a new
/// one, so a burst of requests within the window collapses into a single
/// firing. The owner drives time explicitly through `fire`.
#[derive(Debug)]
pub struct DebouncedTask {
    window: Duration,
    deadline: Option<Timestamp>,
}

impl DebouncedTask {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Schedule-or-replace: any pending deadline is superseded.
    pub fn schedule(&mut self, now: Timestamp) {
        self.deadline = Some(now + self.window);
    }

    /// Reports whether the task is due and clears the deadline if so.
    pub fn fire(&mut self, now: Timestamp) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::milliseconds(100);

    #[test]
    fn fires_once_on_trailing_edge() {
        let mut task = DebouncedTask::new(WINDOW);
        let t0 = Timestamp::from_milliseconds(0);
        task.schedule(t0);
        assert!(!task.fire(t0 + Duration::milliseconds(99)));
        assert!(task.fire(t0 + Duration::milliseconds(100)));
        // Cleared after firing.
        assert!(!task.fire(t0 + Duration::milliseconds(200)));
    }

    #[test]
    fn rescheduling_replaces_the_pending_deadline() {
        let mut task = DebouncedTask::new(WINDOW);
        let t0 = Timestamp::from_milliseconds(0);
        task.schedule(t0);
        task.schedule(t0 + Duration::milliseconds(50));
        // The original deadline must not fire.
        assert!(!task.fire(t0 + Duration::milliseconds(100)));
        assert!(task.fire(t0 + Duration::milliseconds(150)));
    }

    #[test]
    fn cancel_clears_the_deadline() {
        let mut task = DebouncedTask::new(WINDOW);
        task.schedule(Timestamp::from_milliseconds(0));
        assert!(task.is_pending());
        task.cancel();
        assert!(!task.is_pending());
        assert!(!task.fire(Timestamp::from_milliseconds(1_000)));
    }
}
