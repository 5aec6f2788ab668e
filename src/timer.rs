use std::time::Duration;

/// A repeating timer on the simulation clock.
///
/// Timers hold no callback: whoever owns the timer polls `deadline()` and calls
/// `fire()` when the clock reaches it. Arming an armed timer restarts its
/// period from `now`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timer {
    interval: Option<Duration>,
    deadline: Option<Duration>,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the timer. A zero period would fire forever at one instant,
    /// so it is refused and the timer is left disarmed.
    pub fn arm(&mut self, now: Duration, interval: Duration) -> bool {
        if interval.is_zero() {
            tracing::warn!(at_ms = now.as_millis() as u64, "refusing to arm a zero-period timer");
            self.disarm();
            return false;
        }
        self.interval = Some(interval);
        self.deadline = Some(now.saturating_add(interval));
        true
    }

    pub fn disarm(&mut self) {
        self.interval = None;
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Consumes one firing if the timer is due at `now` and schedules the next.
    pub fn fire(&mut self, now: Duration) -> bool {
        match (self.deadline, self.interval) {
            (Some(deadline), Some(interval)) if deadline <= now => {
                self.deadline = Some(deadline.saturating_add(interval));
                true
            }
            _ => false,
        }
    }
}
