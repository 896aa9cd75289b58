// src/modules/navigation/scroll_surface.rs

/// How a scroll request should animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// The scrollable document, as seen by the navigation layer.
pub trait ScrollSurface: Send + Sync {
    /// Top edge of the element with `id`, relative to the viewport.
    fn element_top(&self, id: &str) -> Option<f64>;

    /// Current vertical scroll position of the document.
    fn scroll_y(&self) -> f64;

    /// Whether a smooth-scrolling backend is installed.
    fn supports_smooth_scroll(&self) -> bool;

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior);
}
