// src/modules/navigation/scroll_service.rs

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use super::scroll_surface::{ScrollBehavior, ScrollSurface};
use crate::shared::wait::wait_for;

/// Clears the fixed header.
pub const DEFAULT_OFFSET_PX: f64 = -80.0;
pub const DEFAULT_MAX_RETRIES: u32 = 30;
pub const LOOKUP_INTERVAL: Duration = Duration::from_millis(100);

/// Pseudo-target that scrolls to the document start.
pub const TOP: &str = "top";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollOutcome {
    Scrolled { top: f64, lookups: u32 },
    /// The section never rendered within the retry budget.
    TargetMissing { lookups: u32 },
}

#[derive(Clone)]
pub struct ScrollService {
    surface: Arc<dyn ScrollSurface>,
    lookup_interval: Duration,
}

impl ScrollService {
    pub fn new(surface: Arc<dyn ScrollSurface>) -> Self {
        Self {
            surface,
            lookup_interval: LOOKUP_INTERVAL,
        }
    }

    pub fn with_lookup_interval(mut self, interval: Duration) -> Self {
        self.lookup_interval = interval;
        self
    }

    /// Scrolls to the section whose element id is `target` (a leading `#` is
    /// accepted). Sections mounted lazily are polled for until `max_retries`
    /// lookups have failed, after which the request is dropped.
    pub async fn scroll_to_section(
        &self,
        target: &str,
        offset_px: f64,
        max_retries: u32,
    ) -> ScrollOutcome {
        let id = target.trim().trim_start_matches('#');
        if id.is_empty() || id == TOP {
            self.scroll(0.0);
            return ScrollOutcome::Scrolled { top: 0.0, lookups: 0 };
        }

        let mut element_top = None;
        let found = wait_for(
            || {
                element_top = self.surface.element_top(id);
                element_top.is_some()
            },
            self.lookup_interval,
            max_retries,
        )
        .await;

        match (found, element_top) {
            (Some(lookups), Some(element_top)) => {
                let top = element_top + self.surface.scroll_y() + offset_px;
                self.scroll(top);
                ScrollOutcome::Scrolled { top, lookups }
            }
            _ => {
                debug!(section = id, max_retries, "Scroll target never appeared");
                ScrollOutcome::TargetMissing {
                    lookups: max_retries.max(1),
                }
            }
        }
    }

    fn scroll(&self, top: f64) {
        let behavior = if self.surface.supports_smooth_scroll() {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Instant
        };
        self.surface.scroll_to(top, behavior);
    }
}
