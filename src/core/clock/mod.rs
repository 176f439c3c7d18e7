use std::time::{Duration, Instant};

/// Session Clock
///
/// Holds the shared start instant and time budget of a session. The
/// coordinator creates one clock and hands a copy to each loop, so both
/// measure elapsed time against the same deadline.
#[derive(Clone, Copy, Debug)]
pub struct SessionClock {
    start: Instant,
    budget: Duration,
}

impl SessionClock {
    /// Start a new clock expiring after `budget`
    pub fn start(budget: Duration) -> Self {
        Self { start: Instant::now(), budget }
    }

    /// Wall-clock time since the session started
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Whether the session deadline has passed
    pub fn expired(&self) -> bool {
        self.elapsed() >= self.budget
    }

    /// Time left until the deadline; zero once expired
    pub fn remaining(&self) -> Duration {
        self.budget.saturating_sub(self.elapsed())
    }

    /// The total time budget of the session
    pub fn budget(&self) -> Duration {
        self.budget
    }
}
