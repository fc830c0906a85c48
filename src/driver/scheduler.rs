use std::time::Duration;

use tokio::time::{Instant, sleep_until};

/// One-shot tick timer with cancel-and-reschedule semantics.
///
/// At most one deadline is armed. Firing disarms it, so the next tick only
/// happens once the current one has finished and called `schedule` again.
#[derive(Debug)]
pub struct TickScheduler {
    delay: Duration,
    deadline: Option<Instant>,
}

impl TickScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm the timer `delay` from now, replacing any earlier deadline
    pub fn schedule(&mut self) {
        self.deadline = Some(Instant::now() + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Resolve at the armed deadline; never resolves while disarmed.
    ///
    /// Cancel safe: dropping the future before it resolves keeps the deadline.
    pub async fn wait(&mut self) {
        match self.deadline {
            Some(deadline) => {
                sleep_until(deadline).await;
                self.deadline = None;
            }
            None => std::future::pending().await,
        }
    }
}
