//! Section registry: the ordered list of page sections and the navbar theme
//! each of them asks for.
//!
//! The registry is built once at startup and never mutated afterwards.

use std::collections::HashSet;

/// Navbar color scheme.
///
/// `Dark` means the section background is dark, so navbar text is white.
/// `Light` means the background is light, so navbar text is black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub enum NavTheme {
    #[default]
    Dark,
    Light,
}

impl NavTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavTheme::Dark => "dark",
            NavTheme::Light => "light",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(NavTheme::Dark),
            "light" => Some(NavTheme::Light),
            _ => None,
        }
    }

    /// Tailwind text color class for navbar links
    pub fn text_class(&self) -> &'static str {
        match self {
            NavTheme::Dark => "text-white",
            NavTheme::Light => "text-black",
        }
    }

    /// Tailwind background class for the hover underline
    pub fn underline_class(&self) -> &'static str {
        match self {
            NavTheme::Dark => "bg-white",
            NavTheme::Light => "bg-black",
        }
    }

    /// Logo variant that stays readable on this background
    pub fn logo_src(&self) -> &'static str {
        match self {
            NavTheme::Dark => "/logo-light.png",
            NavTheme::Light => "/logo-dark.png",
        }
    }
}

impl std::fmt::Display for NavTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One registry entry: a section element id and its navbar theme
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionTheme {
    pub id: &'static str,
    pub theme: NavTheme,
}

impl SectionTheme {
    pub const fn new(id: &'static str, theme: NavTheme) -> Self {
        Self { id, theme }
    }
}

/// Sections of the page, top to bottom
pub const SECTION_THEMES: [SectionTheme; 5] = [
    SectionTheme::new("home", NavTheme::Light),
    SectionTheme::new("about", NavTheme::Dark),
    SectionTheme::new("projects", NavTheme::Light),
    SectionTheme::new("skills", NavTheme::Dark),
    SectionTheme::new("contact", NavTheme::Light),
];

/// Registry construction errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Section registry must contain at least one section")]
    Empty,

    #[error("Duplicate section id: {0}")]
    DuplicateId(&'static str),
}

/// Immutable, ordered section registry with unique ids
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionRegistry {
    entries: Vec<SectionTheme>,
}

impl SectionRegistry {
    /// Build a registry, rejecting empty lists and duplicate ids
    pub fn new(entries: Vec<SectionTheme>) -> Result<Self, RegistryError> {
        if entries.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id) {
                return Err(RegistryError::DuplicateId(entry.id));
            }
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[SectionTheme] {
        &self.entries
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Theme for a section id, if it is registered
    pub fn theme_for(&self, id: &str) -> Option<NavTheme> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.theme)
    }

    /// Position of a section in page order
    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self {
            entries: SECTION_THEMES.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_is_valid() {
        let registry = SectionRegistry::default();
        let rebuilt = SectionRegistry::new(SECTION_THEMES.to_vec());

        assert_eq!(rebuilt, Ok(registry));
    }

    #[test]
    fn test_default_registry_ids_are_distinct() {
        let registry = SectionRegistry::default();
        let ids: HashSet<_> = registry.ids().collect();

        assert_eq!(ids.len(), registry.len());
    }

    #[test]
    fn test_default_registry_themes_are_dark_or_light() {
        for entry in SectionRegistry::default().entries() {
            assert!(matches!(entry.theme, NavTheme::Dark | NavTheme::Light));
            assert_eq!(NavTheme::parse(entry.theme.as_str()), Some(entry.theme));
        }
    }

    #[test]
    fn test_default_registry_order() {
        let registry = SectionRegistry::default();
        let ids: Vec<_> = registry.ids().collect();

        assert_eq!(ids, vec!["home", "about", "projects", "skills", "contact"]);
    }

    #[test]
    fn test_theme_lookup() {
        let registry = SectionRegistry::default();

        assert_eq!(registry.theme_for("home"), Some(NavTheme::Light));
        assert_eq!(registry.theme_for("about"), Some(NavTheme::Dark));
        assert_eq!(registry.theme_for("skills"), Some(NavTheme::Dark));
        assert_eq!(registry.theme_for("footer"), None);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = SectionRegistry::new(vec![
            SectionTheme::new("home", NavTheme::Light),
            SectionTheme::new("about", NavTheme::Dark),
            SectionTheme::new("home", NavTheme::Dark),
        ]);

        assert_eq!(result, Err(RegistryError::DuplicateId("home")));
    }

    #[test]
    fn test_empty_registry_rejected() {
        assert_eq!(SectionRegistry::new(Vec::new()), Err(RegistryError::Empty));
    }

    #[test]
    fn test_position() {
        let registry = SectionRegistry::default();

        assert_eq!(registry.position("home"), Some(0));
        assert_eq!(registry.position("contact"), Some(4));
        assert!(!registry.contains("blog"));
    }

    #[test]
    fn test_theme_classes() {
        assert_eq!(NavTheme::Dark.text_class(), "text-white");
        assert_eq!(NavTheme::Light.text_class(), "text-black");
        assert_eq!(NavTheme::Dark.logo_src(), "/logo-light.png");
        assert_eq!(NavTheme::Light.logo_src(), "/logo-dark.png");
        assert_eq!(NavTheme::Light.to_string(), "light");
        assert_eq!(NavTheme::parse("sepia"), None);
    }
}
