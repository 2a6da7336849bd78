//! Deadline-based autoplay timer.
//!
//! The timer owns no thread or task. The event loop polls it with the current
//! instant, which keeps it deterministic under a fake clock.

use std::time::{Duration, Instant};

/// Repeating timer that fires once per elapsed interval while armed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoplayTimer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl AutoplayTimer {
    /// Create a disarmed timer. A zero interval is raised to one millisecond.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            deadline: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start a fresh window ending one interval after `now`.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left until the next fire, if armed.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Number of intervals that have elapsed since the last poll.
    ///
    /// Each fire moves the deadline forward by exactly one interval, so a
    /// late poll catches up without drifting the schedule.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(deadline) = self.deadline else {
            return 0;
        };
        if now < deadline {
            return 0;
        }
        let overdue = now.duration_since(deadline).as_nanos();
        let extra = overdue / self.interval.as_nanos();
        let fired = u32::try_from(extra.saturating_add(1)).unwrap_or(u32::MAX);
        self.deadline = Some(deadline + self.interval * fired);
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_new_timer_is_disarmed() {
        let mut timer = AutoplayTimer::new(ms(1000));
        assert!(!timer.is_armed());
        assert_eq!(timer.poll(Instant::now() + ms(10_000)), 0);
    }

    #[test]
    fn test_fires_exactly_at_deadline() {
        let t0 = Instant::now();
        let mut timer = AutoplayTimer::new(ms(1000));
        timer.arm(t0);
        assert_eq!(timer.poll(t0 + ms(999)), 0);
        assert_eq!(timer.poll(t0 + ms(1000)), 1);
        assert_eq!(timer.deadline(), Some(t0 + ms(2000)));
    }

    #[test]
    fn test_catches_up_whole_intervals() {
        let t0 = Instant::now();
        let mut timer = AutoplayTimer::new(ms(1000));
        timer.arm(t0);
        assert_eq!(timer.poll(t0 + ms(3500)), 3);
        assert_eq!(timer.deadline(), Some(t0 + ms(4000)));
        assert_eq!(timer.poll(t0 + ms(3900)), 0);
        assert_eq!(timer.poll(t0 + ms(4000)), 1);
    }

    #[test]
    fn test_cancel_stops_firing() {
        let t0 = Instant::now();
        let mut timer = AutoplayTimer::new(ms(500));
        timer.arm(t0);
        timer.cancel();
        assert_eq!(timer.poll(t0 + ms(5000)), 0);
        assert!(timer.remaining(t0).is_none());
    }

    #[test]
    fn test_rearm_starts_fresh_window() {
        let t0 = Instant::now();
        let mut timer = AutoplayTimer::new(ms(1000));
        timer.arm(t0);
        timer.arm(t0 + ms(900));
        assert_eq!(timer.poll(t0 + ms(1000)), 0);
        assert_eq!(timer.remaining(t0 + ms(1000)), Some(ms(900)));
        assert_eq!(timer.poll(t0 + ms(1900)), 1);
    }

    #[test]
    fn test_zero_interval_is_raised() {
        let timer = AutoplayTimer::new(Duration::ZERO);
        assert_eq!(timer.interval(), ms(1));
    }
}
