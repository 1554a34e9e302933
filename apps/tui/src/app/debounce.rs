use std::time::{Duration, Instant};

/// Collapses a burst of triggers into one firing, `delay` after the last.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    pending_since: Option<Instant>,
}

impl Debouncer {
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending_since: None,
        }
    }

    /// Restarts the quiet period.
    pub fn trigger(&mut self, now: Instant) {
        self.pending_since = Some(now);
    }

    /// True exactly once per burst, when the quiet period has elapsed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.pending_since {
            Some(since) if now.saturating_duration_since(since) >= self.delay => {
                self.pending_since = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(250);

    #[test]
    fn burst_fires_once_after_the_last_trigger() {
        let start = Instant::now();
        let at = |millis| start + Duration::from_millis(millis);
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.trigger(at(0));
        debouncer.trigger(at(100));
        debouncer.trigger(at(200));

        assert!(!debouncer.fire(at(300)));
        assert!(!debouncer.fire(at(449)));
        assert!(debouncer.fire(at(450)));
        assert!(!debouncer.fire(at(900)));
    }

    #[test]
    fn idle_debouncer_never_fires() {
        let mut debouncer = Debouncer::new(DELAY);
        assert!(!debouncer.fire(Instant::now() + DELAY * 4));
    }
}
