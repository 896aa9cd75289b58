// src/modules/navigation/controller.rs

use super::scroll_service::{ScrollOutcome, ScrollService, DEFAULT_MAX_RETRIES, DEFAULT_OFFSET_PX};

/// Navbar state: the mobile menu toggle and the highlighted section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationController {
    menu_open: bool,
    active: Option<String>,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Highlights `section` without scrolling, e.g. from a scroll spy.
    pub fn set_active(&mut self, section: impl Into<String>) {
        self.active = Some(section.into());
    }

    /// Link click: highlight, close the menu, then scroll with the default
    /// header offset.
    pub async fn navigate(&mut self, scroll: &ScrollService, section: &str) -> ScrollOutcome {
        let section = section.trim_start_matches('#');
        self.active = if section.is_empty() {
            None
        } else {
            Some(section.to_string())
        };
        self.close_menu();

        scroll
            .scroll_to_section(section, DEFAULT_OFFSET_PX, DEFAULT_MAX_RETRIES)
            .await
    }
}
