//! Single-slot debouncing.
//!
//! A [`Debouncer`] holds at most one pending value. Scheduling always replaces whatever was
//! pending and re-arms the deadline, so only the last value of a burst survives, and it fires
//! once the input has been quiet for the full window. The caller supplies the clock; nothing
//! here sleeps or spawns.

use std::time::{Duration, Instant};

#[derive(Debug)]
struct Pending<T> {
    value: T,
    due: Instant,
}

#[derive(Debug)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }

    /// Cancels anything pending and arms `value` to fire at `now + quiet`.
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            due: now + self.quiet,
        });
    }

    /// Takes the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(p) if now >= p.due => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Takes the pending value regardless of its deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value will fire, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Duration = Duration::from_millis(300);

    #[test]
    fn fires_only_after_quiet_period() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(QUIET);
        d.schedule("rose", t0);

        assert_eq!(d.poll(t0 + Duration::from_millis(299)), None);
        assert_eq!(d.poll(t0 + QUIET), Some("rose"));
        assert!(!d.is_pending());
        assert_eq!(d.poll(t0 + Duration::from_secs(5)), None);
    }

    #[test]
    fn rescheduling_supersedes_and_rearms() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(QUIET);
        d.schedule("r", t0);
        d.schedule("ro", t0 + Duration::from_millis(200));

        // The first deadline passes without firing: it was replaced.
        assert_eq!(d.poll(t0 + Duration::from_millis(350)), None);
        assert_eq!(d.poll(t0 + Duration::from_millis(500)), Some("ro"));
    }

    #[test]
    fn cancel_drops_pending_value() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(QUIET);
        d.schedule(1, t0);
        d.cancel();
        assert_eq!(d.deadline(), None);
        assert_eq!(d.poll(t0 + QUIET), None);
    }

    #[test]
    fn flush_ignores_deadline() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(QUIET);
        d.schedule("now", t0);
        assert_eq!(d.flush(), Some("now"));
        assert_eq!(d.flush(), None);
    }
}
