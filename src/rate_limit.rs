use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Per-client-IP sliding-window rate limiter.
///
/// Keeps an ordered list of request timestamps per IP and admits a request
/// only while fewer than `limit` timestamps fall inside the trailing
/// `window`. State is process-local; each running instance enforces its
/// own budget. IP keys are never evicted, even once their timestamp lists
/// drain, so memory grows with the number of distinct clients seen.
pub struct SlidingWindowLimiter {
    limit: usize,
    window: Duration,
    requests: Mutex<HashMap<String, Vec<Instant>>>,
}

impl SlidingWindowLimiter {
    pub fn new(limit: usize, window: Duration) -> Self {
        Self {
            limit,
            window,
            requests: Mutex::new(HashMap::new()),
        }
    }

    /// Returns true and records the request if `ip` is under its budget.
    /// The timestamp is recorded before the caller runs any further
    /// validation, so rejected submissions still consume budget.
    pub fn check(&self, ip: &str) -> bool {
        let now = Instant::now();
        let mut requests = self.requests.lock().unwrap();
        let timestamps = requests.entry(ip.to_string()).or_default();

        timestamps.retain(|t| now.duration_since(*t) < self.window);

        if timestamps.len() >= self.limit {
            return false;
        }

        timestamps.push(now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_up_to_limit_then_denies() {
        let limiter = SlidingWindowLimiter::new(5, Duration::from_secs(600));

        for _ in 0..5 {
            assert!(limiter.check("203.0.113.7"));
        }
        assert!(!limiter.check("203.0.113.7"));
        assert!(!limiter.check("203.0.113.7"));
    }

    #[test]
    fn budgets_are_independent_per_ip() {
        let limiter = SlidingWindowLimiter::new(1, Duration::from_secs(600));

        assert!(limiter.check("203.0.113.7"));
        assert!(!limiter.check("203.0.113.7"));
        assert!(limiter.check("203.0.113.8"));
    }

    #[test]
    fn budget_frees_up_once_window_passes() {
        let limiter = SlidingWindowLimiter::new(2, Duration::from_millis(40));

        assert!(limiter.check("203.0.113.7"));
        assert!(limiter.check("203.0.113.7"));
        assert!(!limiter.check("203.0.113.7"));

        std::thread::sleep(Duration::from_millis(60));

        assert!(limiter.check("203.0.113.7"));
    }

    #[test]
    fn denied_requests_do_not_extend_the_window() {
        let limiter = SlidingWindowLimiter::new(1, Duration::from_millis(40));

        assert!(limiter.check("203.0.113.7"));
        assert!(!limiter.check("203.0.113.7"));

        std::thread::sleep(Duration::from_millis(60));

        // the denied call above must not have recorded a timestamp
        assert!(limiter.check("203.0.113.7"));
    }
}
