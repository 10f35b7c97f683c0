//! Entrance animation state for page sections
//!
//! Every section flips between hidden and revealed as it scrolls in and out
//! of view. Whether it hides again after the first reveal is decided per
//! section by its [`RevealPolicy`].

/// Visible fraction at which a section plays its entrance animation
pub const REVEAL_THRESHOLD: f64 = 0.2;

/// Class set on `<html>` after hydration. Reveal targets are only hidden
/// under it, so server-rendered content stays visible without the wasm bundle.
pub const REVEAL_READY_CLASS: &str = "reveal-ready";

/// Whether a section replays its animation on every reveal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPolicy {
    /// Reveal the first time the section enters view, then stay revealed
    Once,
    /// Hide again when the section leaves view and replay on re-entry
    EveryReveal,
}

/// Two-state (hidden/revealed) animation flag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealState {
    policy: RevealPolicy,
    visible: bool,
    revealed_once: bool,
}

impl RevealState {
    pub fn new(policy: RevealPolicy) -> Self {
        Self {
            policy,
            visible: false,
            revealed_once: false,
        }
    }

    pub fn policy(&self) -> RevealPolicy {
        self.policy
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed one observation; returns true when the visible flag changed
    pub fn observe(&mut self, in_view: bool) -> bool {
        let next = match self.policy {
            RevealPolicy::Once => self.revealed_once || in_view,
            RevealPolicy::EveryReveal => in_view,
        };
        self.revealed_once |= next;

        let changed = next != self.visible;
        self.visible = next;
        changed
    }

    /// A `Once` section that has already played no longer needs observing
    pub fn is_settled(&self) -> bool {
        self.policy == RevealPolicy::Once && self.revealed_once
    }
}

/// Reveal configuration of a page section
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    pub policy: RevealPolicy,
    pub threshold: f64,
}

impl RevealConfig {
    pub const fn every_reveal() -> Self {
        Self {
            policy: RevealPolicy::EveryReveal,
            threshold: REVEAL_THRESHOLD,
        }
    }

    pub const fn once() -> Self {
        Self {
            policy: RevealPolicy::Once,
            threshold: REVEAL_THRESHOLD,
        }
    }
}

/// Split text into animatable characters.
///
/// Spaces become non-breaking so an empty inline-block keeps its width.
pub fn split_letters(text: &str) -> Vec<String> {
    text.chars()
        .map(|c| {
            if c == ' ' {
                '\u{00A0}'.to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

/// `transition-delay` value for the `index`-th staggered child
pub fn stagger_delay(index: usize, step_ms: u32, base_ms: u32) -> String {
    let delay = base_ms as u64 + index as u64 * step_ms as u64;
    format!("transition-delay: {}ms", delay)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        assert!(!RevealState::new(RevealPolicy::Once).is_visible());
        assert!(!RevealState::new(RevealPolicy::EveryReveal).is_visible());
    }

    #[test]
    fn test_every_reveal_replays() {
        let mut state = RevealState::new(RevealPolicy::EveryReveal);

        assert!(state.observe(true));
        assert!(state.is_visible());

        assert!(state.observe(false));
        assert!(!state.is_visible());

        assert!(state.observe(true));
        assert!(state.is_visible());
        assert!(!state.is_settled());
    }

    #[test]
    fn test_once_stays_revealed() {
        let mut state = RevealState::new(RevealPolicy::Once);

        assert!(!state.observe(false));
        assert!(!state.is_settled());

        assert!(state.observe(true));
        assert!(state.is_settled());

        assert!(!state.observe(false));
        assert!(state.is_visible());
    }

    #[test]
    fn test_repeated_observation_reports_no_change() {
        let mut state = RevealState::new(RevealPolicy::EveryReveal);
        state.observe(true);

        assert!(!state.observe(true));
    }

    #[test]
    fn test_split_letters() {
        assert_eq!(
            split_letters("About Me"),
            vec!["A", "b", "o", "u", "t", "\u{00A0}", "M", "e"]
        );
        assert!(split_letters("").is_empty());
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0, 100, 0), "transition-delay: 0ms");
        assert_eq!(stagger_delay(3, 100, 0), "transition-delay: 300ms");
        assert_eq!(stagger_delay(2, 50, 400), "transition-delay: 500ms");
        // mobile menu links: 300ms after the panel, 50ms apart
        assert_eq!(stagger_delay(3, 50, 300), "transition-delay: 450ms");
    }

    #[test]
    fn test_hidden_reveal_styles_wait_for_hydration() {
        let css = include_str!("../../style/tailwind.css");
        let gate = format!(".{} ", REVEAL_READY_CLASS);

        let hidden: Vec<&str> = css
            .split('}')
            .filter_map(|rule| rule.rsplit_once('{'))
            .filter(|(_, body)| body.contains("opacity: 0;"))
            .filter_map(|(head, _)| head.rsplit('{').next())
            .filter(|selector| selector.contains("reveal-") || selector.contains("about-image"))
            .collect();

        assert!(!hidden.is_empty());
        for selector in hidden {
            assert!(
                selector.trim().starts_with(&gate),
                "{} hides content before hydration",
                selector.trim()
            );
        }
    }

    #[test]
    fn test_configs() {
        assert_eq!(RevealConfig::once().policy, RevealPolicy::Once);
        assert_eq!(RevealConfig::every_reveal().threshold, REVEAL_THRESHOLD);
    }
}
