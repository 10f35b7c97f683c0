//! Page-wide UI state shared by the visibility tracker and the navbar

use crate::core::sections::NavTheme;

/// Section that is active before the first observer batch arrives
pub const DEFAULT_SECTION_ID: &str = "home";

/// Active section, navbar theme and mobile menu state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    active_section_id: String,
    nav_theme: NavTheme,
    is_mobile_nav_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_section_id: DEFAULT_SECTION_ID.to_string(),
            nav_theme: NavTheme::Dark,
            is_mobile_nav_open: false,
        }
    }
}

impl UiState {
    pub fn active_section_id(&self) -> &str {
        &self.active_section_id
    }

    pub fn nav_theme(&self) -> NavTheme {
        self.nav_theme
    }

    pub fn is_mobile_nav_open(&self) -> bool {
        self.is_mobile_nav_open
    }

    pub fn set_active_section(&mut self, id: impl Into<String>) {
        self.active_section_id = id.into();
    }

    pub fn set_nav_theme(&mut self, theme: NavTheme) {
        self.nav_theme = theme;
    }

    /// Switch section and theme in a single update
    pub fn activate(&mut self, id: impl Into<String>, theme: NavTheme) {
        self.active_section_id = id.into();
        self.nav_theme = theme;
    }

    pub fn toggle_mobile_nav(&mut self) {
        self.is_mobile_nav_open = !self.is_mobile_nav_open;
    }

    /// Always leaves the menu closed
    pub fn close_mobile_nav(&mut self) {
        self.is_mobile_nav_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = UiState::default();

        assert_eq!(state.active_section_id(), "home");
        assert_eq!(state.nav_theme(), NavTheme::Dark);
        assert!(!state.is_mobile_nav_open());
    }

    #[test]
    fn test_toggle_twice_returns_to_closed() {
        let mut state = UiState::default();

        state.toggle_mobile_nav();
        assert!(state.is_mobile_nav_open());

        state.toggle_mobile_nav();
        assert!(!state.is_mobile_nav_open());
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut state = UiState::default();
        let before = state.clone();

        state.close_mobile_nav();

        assert_eq!(state, before);
    }

    #[test]
    fn test_close_when_open() {
        let mut state = UiState::default();
        state.toggle_mobile_nav();

        state.close_mobile_nav();
        assert!(!state.is_mobile_nav_open());

        state.close_mobile_nav();
        assert!(!state.is_mobile_nav_open());
    }

    #[test]
    fn test_activate_sets_both_fields() {
        let mut state = UiState::default();

        state.activate("about", NavTheme::Light);

        assert_eq!(state.active_section_id(), "about");
        assert_eq!(state.nav_theme(), NavTheme::Light);
    }

    #[test]
    fn test_setters_do_not_validate() {
        let mut state = UiState::default();

        state.set_active_section("not-a-section");
        state.set_nav_theme(NavTheme::Light);

        assert_eq!(state.active_section_id(), "not-a-section");
        assert_eq!(state.nav_theme(), NavTheme::Light);
    }

    #[test]
    fn test_menu_state_untouched_by_activate() {
        let mut state = UiState::default();
        state.toggle_mobile_nav();

        state.activate("skills", NavTheme::Dark);

        assert!(state.is_mobile_nav_open());
    }
}
