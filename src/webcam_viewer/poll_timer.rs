use std::time::{Duration, Instant};

/// Fixed-interval timer driven by the UI loop. A late check fires once and
/// reschedules from that moment; missed deadlines are not replayed.
#[derive(Debug, Clone)]
pub struct PollTimer {
    interval: Duration,
    next_due: Option<Instant>,
}

impl PollTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                let next = due + self.interval;
                self.next_due = Some(if next <= now { now + self.interval } else { next });
                true
            }
            _ => false,
        }
    }

    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due
            .map(|due| due.saturating_duration_since(now))
    }
}
