//! Built-in framework profiles for common documentation platforms.
//!
//! The order of [`FRAMEWORKS`] is the auto-detection priority: when a
//! document imports from several frameworks, the earliest profile wins.

use super::types::FrameworkProfile;

/// Astro Starlight (`@astrojs/...` imports).
pub const STARLIGHT: FrameworkProfile = FrameworkProfile {
    id: "starlight",
    pattern: "@astrojs/",
    components: &[
        "Aside", "Card", "CardGrid", "LinkCard", "Steps", "Tabs", "TabItem", "FileTree",
    ],
};

/// Fern (`@fern-ui/...` imports).
pub const FERN: FrameworkProfile = FrameworkProfile {
    id: "fern",
    pattern: "@fern-ui/",
    components: &[
        "Info",
        "Warning",
        "Success",
        "Error",
        "Note",
        "Launch",
        "Tip",
        "Check",
        "Accordion",
        "AccordionGroup",
        "Aside",
        "Card",
        "Frame",
        "Steps",
        "Step",
        "Tabs",
        "Tab",
        "Tooltip",
        "Indent",
        "ParamField",
    ],
};

/// Mintlify (`@mintlify/...` imports).
pub const MINTLIFY: FrameworkProfile = FrameworkProfile {
    id: "mintlify",
    pattern: "@mintlify/",
    components: &[
        "Note",
        "Warning",
        "Info",
        "Tip",
        "Check",
        "Callout",
        "Card",
        "CardGroup",
        "Accordion",
        "AccordionGroup",
        "Expandable",
        "Columns",
        "Column",
        "Frame",
        "Steps",
        "Step",
        "Tabs",
        "Tab",
        "Tooltip",
        "ParamField",
        "ResponseField",
        "Param",
        "Update",
        "Aside",
        "Definition",
    ],
};

/// All profiles in detection priority order: Starlight > Fern > Mintlify.
pub const FRAMEWORKS: &[FrameworkProfile] = &[STARLIGHT, FERN, MINTLIFY];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = FRAMEWORKS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), FRAMEWORKS.len());
    }

    #[test]
    fn priority_order() {
        let ids: Vec<_> = FRAMEWORKS.iter().map(|p| p.id).collect();
        assert_eq!(ids, ["starlight", "fern", "mintlify"]);
    }

    #[test]
    fn shared_components_are_per_framework() {
        assert!(STARLIGHT.is_prose_component("Card"));
        assert!(FERN.is_prose_component("Card"));
        assert!(MINTLIFY.is_prose_component("Card"));

        assert!(STARLIGHT.is_prose_component("FileTree"));
        assert!(!FERN.is_prose_component("FileTree"));
        assert!(!STARLIGHT.is_prose_component("CardGroup"));
        assert!(MINTLIFY.is_prose_component("CardGroup"));
    }

    #[test]
    fn component_names_are_case_sensitive() {
        assert!(!MINTLIFY.is_prose_component("note"));
    }
}
