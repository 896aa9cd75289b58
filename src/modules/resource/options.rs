// src/modules/resource/options.rs

use std::time::Duration;

/// Revalidation policy for one cache key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceOptions {
    /// Background poll cadence; `None` disables polling.
    pub refresh_interval: Option<Duration>,
    /// Non-forced revalidations this soon after the last request start are skipped.
    pub deduping_window: Duration,
    pub revalidate_on_focus: bool,
    /// Retries after the first failure. 404-class errors are never retried.
    pub retry_count: u32,
    pub retry_delay: Duration,
}

impl Default for ResourceOptions {
    fn default() -> Self {
        Self {
            refresh_interval: None,
            deduping_window: Duration::from_secs(2),
            revalidate_on_focus: true,
            retry_count: 3,
            retry_delay: Duration::from_secs(5),
        }
    }
}

impl ResourceOptions {
    /// Long-lived singleton records (settings, per-route SEO).
    pub fn slow_changing(refresh_interval: Duration) -> Self {
        Self {
            refresh_interval: Some(refresh_interval),
            deduping_window: Duration::from_secs(60),
            revalidate_on_focus: false,
            ..Self::default()
        }
    }

    pub fn with_refresh_interval(mut self, every: Duration) -> Self {
        self.refresh_interval = Some(every);
        self
    }

    pub fn with_deduping_window(mut self, window: Duration) -> Self {
        self.deduping_window = window;
        self
    }

    pub fn with_retry(mut self, count: u32, delay: Duration) -> Self {
        self.retry_count = count;
        self.retry_delay = delay;
        self
    }

    pub fn with_revalidate_on_focus(mut self, enabled: bool) -> Self {
        self.revalidate_on_focus = enabled;
        self
    }
}
