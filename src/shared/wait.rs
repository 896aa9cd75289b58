// src/shared/wait.rs

use std::time::Duration;

/// Polls `predicate` until it holds, sleeping `interval` between checks.
///
/// Checks at most `max_attempts` times (at least once) and returns the number
/// of checks it took, or `None` when the condition never held.
pub async fn wait_for<F>(mut predicate: F, interval: Duration, max_attempts: u32) -> Option<u32>
where
    F: FnMut() -> bool,
{
    let max_attempts = max_attempts.max(1);

    for attempt in 1..=max_attempts {
        if predicate() {
            return Some(attempt);
        }
        if attempt < max_attempts {
            tokio::time::sleep(interval).await;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn returns_on_first_satisfied_check() {
        let mut checks = 0;
        let result = wait_for(
            || {
                checks += 1;
                checks == 4
            },
            Duration::from_millis(100),
            30,
        )
        .await;

        assert_eq!(result, Some(4));
    }

    #[tokio::test(start_paused = true)]
    async fn gives_up_after_max_attempts() {
        let started = Instant::now();
        let mut checks = 0;

        let result = wait_for(
            || {
                checks += 1;
                false
            },
            Duration::from_millis(100),
            3,
        )
        .await;

        assert_eq!(result, None);
        assert_eq!(checks, 3);
        // Two sleeps between three checks; no trailing sleep.
        assert_eq!(started.elapsed(), Duration::from_millis(200));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_attempts_still_checks_once() {
        let mut checks = 0;
        let result = wait_for(
            || {
                checks += 1;
                true
            },
            Duration::from_millis(100),
            0,
        )
        .await;

        assert_eq!(result, Some(1));
        assert_eq!(checks, 1);
    }
}
