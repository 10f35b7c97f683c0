//! UI state context
//!
//! Wraps [`UiState`] in a signal and provides it to the component tree, so
//! the visibility tracker can write it and the navbar can react to it.

use leptos::prelude::*;

use crate::core::{NavTheme, SectionRegistry, UiState, VisibilityEntry, apply_visibility_batch};

/// Reactive handle on the page's UI state
#[derive(Clone, Copy)]
pub struct UiStateContext {
    state: RwSignal<UiState>,
    /// Currently active section id
    pub active_section: Memo<String>,
    /// Navbar theme of the active section
    pub nav_theme: Memo<NavTheme>,
    /// Whether the mobile menu is open
    pub is_mobile_nav_open: Memo<bool>,
}

impl UiStateContext {
    pub fn new(initial: UiState) -> Self {
        let state = RwSignal::new(initial);

        Self {
            state,
            active_section: Memo::new(move |_| state.with(|s| s.active_section_id().to_string())),
            nav_theme: Memo::new(move |_| state.with(|s| s.nav_theme())),
            is_mobile_nav_open: Memo::new(move |_| state.with(|s| s.is_mobile_nav_open())),
        }
    }

    /// Snapshot of the current state without subscribing
    pub fn snapshot(&self) -> UiState {
        self.state.get_untracked()
    }

    pub fn set_active_section(&self, id: impl Into<String>) {
        let id = id.into();
        self.state.update(|s| s.set_active_section(id));
    }

    pub fn set_nav_theme(&self, theme: NavTheme) {
        self.state.update(|s| s.set_nav_theme(theme));
    }

    pub fn toggle_mobile_nav(&self) {
        self.state.update(|s| s.toggle_mobile_nav());
    }

    pub fn close_mobile_nav(&self) {
        // Skip the write so subscribers are not notified for a no-op
        if self.state.with_untracked(|s| s.is_mobile_nav_open()) {
            self.state.update(|s| s.close_mobile_nav());
        }
    }

    /// Apply one observer batch as a single state update
    pub fn apply_visibility(&self, entries: &[VisibilityEntry], registry: &SectionRegistry) {
        let current = self.state.get_untracked();
        let next = apply_visibility_batch(entries, registry, &current);
        if next != current {
            self.state.set(next);
        }
    }
}

/// Provide the UI state context with the default state
pub fn provide_ui_state_context() -> UiStateContext {
    let ctx = UiStateContext::new(UiState::default());
    provide_context(ctx);
    ctx
}

/// Get the UI state context from the component tree
pub fn use_ui_state_context() -> UiStateContext {
    expect_context::<UiStateContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_mutators() {
        let owner = Owner::new();
        owner.set();

        let ctx = UiStateContext::new(UiState::default());

        ctx.toggle_mobile_nav();
        assert!(ctx.snapshot().is_mobile_nav_open());

        ctx.close_mobile_nav();
        ctx.close_mobile_nav();
        assert!(!ctx.snapshot().is_mobile_nav_open());

        ctx.set_active_section("skills");
        ctx.set_nav_theme(NavTheme::Light);
        assert_eq!(ctx.snapshot().active_section_id(), "skills");
        assert_eq!(ctx.snapshot().nav_theme(), NavTheme::Light);
    }

    #[test]
    fn test_apply_visibility_updates_memos() {
        let owner = Owner::new();
        owner.set();

        let ctx = UiStateContext::new(UiState::default());
        let registry = SectionRegistry::default();

        ctx.apply_visibility(&[VisibilityEntry::entering("about", 0.3)], &registry);

        assert_eq!(ctx.active_section.get_untracked(), "about");
        assert_eq!(ctx.nav_theme.get_untracked(), NavTheme::Dark);
    }
}
