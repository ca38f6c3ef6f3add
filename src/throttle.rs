//! Coalescing rate limiter
//!
//! Resize events arrive in storms while a window is dragged, and handling
//! one rebuilds every derived constant. `Throttle` admits the first event
//! immediately, keeps only the latest event that arrives inside the
//! cool-down window, and hands that one back once the window elapses.
//! Timestamps are passed in, so the type stays deterministic under test.

#[derive(Debug)]
pub struct Throttle<T> {
    window_ms: f64,
    last_fired: Option<f64>,
    pending: Option<T>,
}

impl<T> Throttle<T> {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            last_fired: None,
            pending: None,
        }
    }

    /// Offer an event at `now_ms`. Returns it when the cool-down has
    /// elapsed (or on the first event ever); otherwise stores it, replacing
    /// any earlier deferred event.
    pub fn submit(&mut self, now_ms: f64, value: T) -> Option<T> {
        if self.ready(now_ms) {
            self.last_fired = Some(now_ms);
            self.pending = None;
            Some(value)
        } else {
            self.pending = Some(value);
            None
        }
    }

    /// Release the deferred event once the window has elapsed. Polled from
    /// the tick so a trailing resize is applied rather than lost.
    pub fn drain(&mut self, now_ms: f64) -> Option<T> {
        if self.pending.is_some() && self.ready(now_ms) {
            self.last_fired = Some(now_ms);
            self.pending.take()
        } else {
            None
        }
    }

    fn ready(&self, now_ms: f64) -> bool {
        match self.last_fired {
            None => true,
            Some(t) => now_ms - t >= self.window_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_event_fires_immediately() {
        let mut throttle = Throttle::new(1000.0);
        assert_eq!(throttle.submit(0.0, 1), Some(1));
    }

    #[test]
    fn test_events_inside_window_are_deferred() {
        let mut throttle = Throttle::new(1000.0);
        assert_eq!(throttle.submit(0.0, 1), Some(1));
        assert_eq!(throttle.submit(400.0, 2), None);
        assert_eq!(throttle.drain(900.0), None);
        assert_eq!(throttle.drain(1000.0), Some(2));
        // Nothing left once drained
        assert_eq!(throttle.drain(2500.0), None);
    }

    #[test]
    fn test_deferred_event_keeps_latest() {
        let mut throttle = Throttle::new(1000.0);
        throttle.submit(0.0, 1);
        assert_eq!(throttle.submit(100.0, 2), None);
        assert_eq!(throttle.submit(200.0, 3), None);
        assert_eq!(throttle.drain(1100.0), Some(3));
    }

    #[test]
    fn test_window_reopens_after_fire() {
        let mut throttle = Throttle::new(1000.0);
        throttle.submit(0.0, 1);
        assert_eq!(throttle.submit(1000.0, 2), Some(2));
        // Draining resets the window too
        assert_eq!(throttle.submit(1500.0, 3), None);
        assert_eq!(throttle.drain(2000.0), Some(3));
        assert_eq!(throttle.submit(2500.0, 4), None);
    }
}
