//! Resolve the framework profile that governs a document.

use super::defaults::FRAMEWORKS;
use super::types::FrameworkProfile;

/// Look up a profile by id, ignoring ASCII case.
pub fn find_profile(id: &str) -> Option<&'static FrameworkProfile> {
    FRAMEWORKS
        .iter()
        .find(|profile| profile.id.eq_ignore_ascii_case(id))
}

/// Resolves the single framework profile for a document.
///
/// A recognized `override_id` wins outright. An unknown override is ignored
/// and detection falls back to scanning the document for each profile's
/// pattern in priority order. `None` means no component is prose-bearing.
///
/// # Example
///
/// ```
/// use mdx2vast_vale::registry::resolve;
///
/// let doc = "import { Note } from '@mintlify/components';\n\n<Note>Hi</Note>";
/// assert_eq!(resolve(doc, None).map(|p| p.id), Some("mintlify"));
/// assert_eq!(resolve(doc, Some("Fern")).map(|p| p.id), Some("fern"));
/// assert_eq!(resolve("<Note>Hi</Note>", Some("bogus")), None);
/// ```
pub fn resolve(document: &str, override_id: Option<&str>) -> Option<&'static FrameworkProfile> {
    if let Some(id) = override_id {
        match find_profile(id) {
            Some(profile) => return Some(profile),
            None => log::debug!("Unknown framework override {id:?}; using auto-detection"),
        }
    }

    FRAMEWORKS.iter().find(|profile| profile.matches(document))
}
