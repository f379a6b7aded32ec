//! Registry type definitions for framework profiles.

/// A documentation framework whose prose components should be linted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameworkProfile {
    /// Profile identifier, matched case-insensitively by overrides (e.g. "starlight").
    pub id: &'static str,
    /// Import specifier prefix whose presence in a document selects this profile.
    pub pattern: &'static str,
    /// Component names whose children are rendered as prose.
    pub components: &'static [&'static str],
}

impl FrameworkProfile {
    /// Check whether the document mentions this framework's packages.
    pub fn matches(&self, document: &str) -> bool {
        document.contains(self.pattern)
    }

    /// Check whether a component's children should be rendered as prose.
    pub fn is_prose_component(&self, name: &str) -> bool {
        self.components.contains(&name)
    }
}
