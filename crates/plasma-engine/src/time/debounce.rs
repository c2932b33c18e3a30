use std::time::{Duration, Instant};

/// Quiescence window applied to resize notifications.
pub const DEFAULT_RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

/// Handle to a scheduled, not yet fired task.
///
/// Each call to [`Debouncer::schedule`] yields a handle with a new id.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ScheduledTask {
    id: u64,
    due: Instant,
}

impl ScheduledTask {
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }
}

/// Cancel-and-reschedule timer.
///
/// At most one task is pending. Scheduling while a task is pending replaces
/// it, so a burst of notifications collapses into one task due `quiet` after
/// the last notification. The debouncer never interrupts work: once `poll`
/// has returned a task it is no longer pending and a later `schedule` starts
/// a fresh one.
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet: Duration,
    pending: Option<ScheduledTask>,
    next_id: u64,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
            next_id: 0,
        }
    }

    /// Schedules a task due at `now + quiet`, cancelling any pending one.
    pub fn schedule(&mut self, now: Instant) -> ScheduledTask {
        let task = ScheduledTask {
            id: self.next_id,
            due: now + self.quiet,
        };
        self.next_id = self.next_id.wrapping_add(1);

        if let Some(prev) = self.pending.replace(task) {
            log::trace!("debounce: task {} superseded by {}", prev.id, task.id);
        }

        task
    }

    /// Cancels whatever is pending.
    pub fn cancel(&mut self) -> Option<ScheduledTask> {
        self.pending.take()
    }

    /// When the event loop should wake up next, if anything is pending.
    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|t| t.due)
    }

    /// Returns the pending task if it is due at `now`, and clears it.
    pub fn poll(&mut self, now: Instant) -> Option<ScheduledTask> {
        match self.pending {
            Some(task) if now >= task.due => self.pending.take(),
            _ => None,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_RESIZE_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    // ── bursts ────────────────────────────────────────────────────────────

    #[test]
    fn burst_collapses_into_one_task_after_last_notification() {
        let t0 = Instant::now();
        let mut d = Debouncer::default();

        // Five notifications, 10ms apart.
        let mut last = t0;
        for i in 0..5 {
            last = t0 + ms(i * 10);
            d.schedule(last);
            assert_eq!(d.poll(last), None);
        }

        let mut fired = 0;
        let mut fired_at = None;
        let mut now = last;
        while now <= last + ms(600) {
            if d.poll(now).is_some() {
                fired += 1;
                fired_at = Some(now);
            }
            now += ms(5);
        }

        assert_eq!(fired, 1);
        let fired_at = fired_at.unwrap();
        assert!(fired_at >= last + ms(250));
        assert!(fired_at < last + ms(260));
    }

    #[test]
    fn deadline_tracks_latest_notification() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(ms(250));

        d.schedule(t0);
        assert_eq!(d.deadline(), Some(t0 + ms(250)));

        d.schedule(t0 + ms(40));
        assert_eq!(d.deadline(), Some(t0 + ms(290)));
    }

    #[test]
    fn not_due_before_quiet_window() {
        let t0 = Instant::now();
        let mut d = Debouncer::default();
        d.schedule(t0);

        assert_eq!(d.poll(t0 + ms(249)), None);
        assert_eq!(d.deadline(), Some(t0 + ms(250)));
        assert!(d.poll(t0 + ms(250)).is_some());
        assert_eq!(d.deadline(), None);
    }

    #[test]
    fn fired_task_does_not_fire_again() {
        let t0 = Instant::now();
        let mut d = Debouncer::default();
        d.schedule(t0);

        assert!(d.poll(t0 + ms(300)).is_some());
        assert_eq!(d.poll(t0 + ms(900)), None);
        assert_eq!(d.deadline(), None);
    }

    // ── cancellation ──────────────────────────────────────────────────────

    #[test]
    fn cancel_clears_pending() {
        let t0 = Instant::now();
        let mut d = Debouncer::default();
        let task = d.schedule(t0);

        assert_eq!(d.cancel(), Some(task));
        assert_eq!(d.poll(t0 + ms(1000)), None);
    }

    #[test]
    fn superseding_task_is_the_one_that_fires() {
        let t0 = Instant::now();
        let mut d = Debouncer::default();
        let first = d.schedule(t0);
        let second = d.schedule(t0 + ms(10));

        assert_ne!(first.id(), second.id());
        assert_eq!(d.poll(t0 + ms(255)), None);
        assert_eq!(d.poll(t0 + ms(260)), Some(second));
    }

    #[test]
    fn zero_quiet_fires_immediately() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(Duration::ZERO);
        d.schedule(t0);
        assert!(d.poll(t0).is_some());
    }
}
