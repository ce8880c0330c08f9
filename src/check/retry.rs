use std::fmt::Display;

/// Bounded-retry policy: an operation runs up to `max_retries + 1` times,
/// with no delay between attempts. Zero retries means a single attempt.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    max_retries: u32,
}

impl RetryPolicy {
    pub fn new(max_retries: u32) -> Self {
        Self { max_retries }
    }

    /// Runs `op` until it succeeds or the attempt budget is spent. Each
    /// failed attempt is logged; the terminal failure is returned to the
    /// caller rather than swallowed.
    pub fn run<T, E, F>(&self, mut op: F) -> Result<T, E>
    where
        F: FnMut() -> Result<T, E>,
        E: Display,
    {
        let attempts = self.max_retries.saturating_add(1);
        for attempt in 1..attempts {
            match op() {
                Ok(value) => return Ok(value),
                Err(e) => {
                    log::warn!("Attempt {} of {} failed: {}. Retrying", attempt, attempts, e);
                }
            }
        }

        op()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting_op(fail_first: u32) -> impl FnMut() -> Result<u32, String> {
        let mut calls = 0;
        move || {
            calls += 1;
            if calls <= fail_first {
                Err(format!("failure {}", calls))
            } else {
                Ok(calls)
            }
        }
    }

    #[test]
    fn success_is_returned_without_retrying() {
        assert_eq!(RetryPolicy::new(3).run(counting_op(0)).unwrap(), 1);
    }

    #[test]
    fn zero_retries_means_one_attempt() {
        let mut calls = 0;
        let result: Result<(), _> = RetryPolicy::new(0).run(|| {
            calls += 1;
            Err::<(), _>("down")
        });
        assert!(result.is_err());
        assert_eq!(calls, 1);
    }

    #[test]
    fn retries_until_success() {
        assert_eq!(RetryPolicy::new(2).run(counting_op(2)).unwrap(), 3);
    }

    #[test]
    fn terminal_failure_is_surfaced_after_budget() {
        let mut calls = 0;
        let result: Result<(), _> = RetryPolicy::new(2).run(|| {
            calls += 1;
            Err::<(), _>(format!("failure {}", calls))
        });
        assert_eq!(calls, 3);
        assert_eq!(result.unwrap_err(), "failure 3");
    }
}
