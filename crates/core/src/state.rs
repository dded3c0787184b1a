//! Mutable page state.

use folio_protocol::{SectionId, ThemeMode, Viewport};
use serde::{Deserialize, Serialize};

use crate::layout::SectionBox;
use crate::scan::{SCAN_LINE_OFFSET, active_section};

/// Everything about the page that can change after startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub theme: ThemeMode,
    pub active: SectionId,
    /// Latched to `true` once the first frame has been shown. Never
    /// returns to `false`.
    pub mounted: bool,
}

impl PageState {
    pub const fn new() -> Self {
        Self { theme: ThemeMode::Dark, active: SectionId::Home, mounted: false }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn mark_mounted(&mut self) {
        self.mounted = true;
    }

    /// Re-derive the active section from the current scroll position.
    /// Keeps the previous section when the scan line misses every box.
    pub fn observe_scroll(&mut self, boxes: &[SectionBox], viewport: &Viewport) {
        if let Some(id) = active_section(boxes, viewport.y + SCAN_LINE_OFFSET) {
            self.active = id;
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use folio_protocol::Rect;

    use super::*;

    fn boxes() -> Vec<SectionBox> {
        vec![
            SectionBox { id: SectionId::Home, rect: Rect::new(0.0, 0.0, 100.0, 500.0) },
            SectionBox { id: SectionId::About, rect: Rect::new(0.0, 500.0, 100.0, 500.0) },
        ]
    }

    #[test]
    fn starts_dark_on_home_and_unmounted() {
        let state = PageState::new();
        assert_eq!(state.theme, ThemeMode::Dark);
        assert_eq!(state.active, SectionId::Home);
        assert!(!state.mounted);
    }

    #[test]
    fn theme_toggle_touches_nothing_else() {
        let mut state = PageState::new();
        state.active = SectionId::Projects;
        state.mark_mounted();
        state.toggle_theme();
        assert_eq!(state.theme, ThemeMode::Light);
        assert_eq!(state.active, SectionId::Projects);
        assert!(state.mounted);
        state.toggle_theme();
        assert_eq!(state.theme, ThemeMode::Dark);
    }

    #[test]
    fn mount_is_one_way() {
        let mut state = PageState::new();
        state.mark_mounted();
        state.mark_mounted();
        assert!(state.mounted);
    }

    #[test]
    fn scroll_updates_active_section() {
        let mut state = PageState::new();
        let boxes = boxes();
        state.observe_scroll(&boxes, &Viewport::new(450.0, 100.0, 400.0));
        assert_eq!(state.active, SectionId::About);
        state.observe_scroll(&boxes, &Viewport::new(0.0, 100.0, 400.0));
        assert_eq!(state.active, SectionId::Home);
    }

    #[test]
    fn missed_scan_keeps_previous_section() {
        let mut state = PageState::new();
        let boxes = boxes();
        state.observe_scroll(&boxes, &Viewport::new(450.0, 100.0, 400.0));
        assert_eq!(state.active, SectionId::About);
        // Scan line at 5100 is far past every box.
        state.observe_scroll(&boxes, &Viewport::new(5000.0, 100.0, 400.0));
        assert_eq!(state.active, SectionId::About);
    }
}
