//! Simulated clock and cancellable timers.
//!
//! The controller never sleeps or spawns. Time only moves when the host calls
//! `SlideController::update`, which makes every schedule reproducible in tests.

use std::time::Duration;

use crate::constants::MIN_TIMER_PERIOD;

/// Identifies one scheduled timer. Handles are never reused by a clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    handle: TimerHandle,
    due: Duration,
    period: Option<Duration>,
}

impl Timer {
    pub fn handle(&self) -> TimerHandle {
        self.handle
    }

    pub fn due(&self) -> Duration {
        self.due
    }

    pub fn is_repeating(&self) -> bool {
        self.period.is_some()
    }

    pub fn is_due(&self, now: Duration) -> bool {
        self.due <= now
    }

    /// Ordering key used when several timers are due in the same update.
    pub(crate) fn sort_key(&self) -> (Duration, TimerHandle) {
        (self.due, self.handle)
    }
}

#[derive(Debug, Default)]
pub struct Clock {
    now: Duration,
    next_handle: u64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Moves the clock forward. The clock never runs backwards.
    pub fn set(&mut self, now: Duration) {
        if now > self.now {
            self.now = now;
        }
    }

    pub fn once(&mut self, delay: Duration) -> Timer {
        Timer {
            handle: self.issue(),
            due: self.now + delay,
            period: None,
        }
    }

    pub fn repeating(&mut self, period: Duration) -> Timer {
        let period = period.max(MIN_TIMER_PERIOD);
        Timer {
            handle: self.issue(),
            due: self.now + period,
            period: Some(period),
        }
    }

    /// Moves a repeating timer to its next deadline under a fresh handle, so it
    /// ranks behind anything its own callback scheduled for the same instant.
    /// One-shot timers are spent after firing and return `false`.
    pub fn rearm(&mut self, timer: &mut Timer) -> bool {
        match timer.period {
            Some(period) => {
                timer.due += period;
                timer.handle = self.issue();
                true
            }
            None => false,
        }
    }

    fn issue(&mut self) -> TimerHandle {
        self.next_handle += 1;
        TimerHandle(self.next_handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn once_is_due_after_delay() {
        let mut clock = Clock::new();
        let timer = clock.once(ms(800));
        assert!(!timer.is_due(ms(799)));
        assert!(timer.is_due(ms(800)));
        assert!(!timer.is_repeating());
    }

    #[test]
    fn one_shot_does_not_rearm() {
        let mut clock = Clock::new();
        let mut timer = clock.once(ms(10));
        assert!(!clock.rearm(&mut timer));
        assert_eq!(timer.due(), ms(10));
    }

    #[test]
    fn repeating_rearms_by_period() {
        let mut clock = Clock::new();
        clock.set(ms(300));
        let mut timer = clock.repeating(ms(5000));
        assert_eq!(timer.due(), ms(5300));
        assert!(clock.rearm(&mut timer));
        assert_eq!(timer.due(), ms(10300));
    }

    #[test]
    fn rearmed_timer_ranks_behind_timers_issued_before_it() {
        let mut clock = Clock::new();
        let mut tick = clock.repeating(ms(1000));
        clock.set(ms(1000));
        let settle = clock.once(ms(1000));
        clock.rearm(&mut tick);

        assert_eq!(tick.due(), settle.due());
        assert!(settle.sort_key() < tick.sort_key());
    }

    #[test]
    fn zero_period_is_clamped() {
        let mut clock = Clock::new();
        let mut timer = clock.repeating(Duration::ZERO);
        let first = timer.due();
        clock.rearm(&mut timer);
        assert!(timer.due() > first);
    }

    #[test]
    fn handles_are_unique() {
        let mut clock = Clock::new();
        let a = clock.once(ms(1));
        let b = clock.repeating(ms(1));
        let c = clock.once(ms(1));
        assert_ne!(a.handle(), b.handle());
        assert_ne!(b.handle(), c.handle());
        assert!(a.handle() < c.handle());
    }

    #[test]
    fn clock_never_runs_backwards() {
        let mut clock = Clock::new();
        clock.set(ms(50));
        clock.set(ms(20));
        assert_eq!(clock.now(), ms(50));
    }
}
