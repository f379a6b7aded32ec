//! MDX to Vale HTML rendering.

/// Parallel conversion of many documents.
pub mod batch;
/// Escaping of non-prose nodes as inline or block code.
pub mod escape;
/// Handlers for comments, ESM, expressions and JSX elements.
pub mod handlers;
/// Render tree to HTML.
pub mod serialize;
/// Tree builder state and the handler seam.
pub mod state;
/// The render tree.
pub mod tree;

pub use batch::{BatchInput, BatchOutput, convert_batch};
pub use handlers::{JsxHandler, NonProseHandler};
pub use state::{Handlers, MdxHandler, State};
pub use tree::{Element, RenderNode};

use crate::registry::resolve;
use mdx2vast_core::{ParseOptions, VastError, parse_mdast};
use serde::{Deserialize, Serialize};

/// Environment variable that forces a framework profile by id.
pub const FRAMEWORK_ENV_VAR: &str = "MDX2VAST_FRAMEWORK";

/// Conversion options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Framework id that overrides auto-detection (case-insensitive).
    /// Unknown ids are ignored.
    #[serde(default)]
    pub framework: Option<String>,
    /// Whether to parse `$inline$` and `$$block$$` math.
    #[serde(default = "default_enable_math")]
    pub enable_math: bool,
}

fn default_enable_math() -> bool {
    true
}

impl Default for Options {
    fn default() -> Self {
        Self {
            framework: None,
            enable_math: default_enable_math(),
        }
    }
}

impl Options {
    /// Default options with the framework override read from
    /// [`FRAMEWORK_ENV_VAR`].
    pub fn from_env() -> Self {
        Self::with_framework(std::env::var(FRAMEWORK_ENV_VAR).ok())
    }

    /// Default options with `framework` as the override. A blank id counts
    /// as unset.
    pub fn with_framework(framework: Option<String>) -> Self {
        Self {
            framework: framework.filter(|id| !id.trim().is_empty()),
            ..Self::default()
        }
    }

    /// Parser options for these conversion options.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            math: self.enable_math,
            ..ParseOptions::mdx()
        }
    }
}

/// Converts MDX to a render tree ready for serialization.
///
/// The framework profile is resolved once for the whole document and bound
/// into the JSX handler, so every element sees the same profile.
///
/// # Examples
///
/// ```
/// use mdx2vast_vale::{Options, to_render_tree};
///
/// let tree = to_render_tree("# Hello", &Options::default()).unwrap();
/// assert!(tree[0].is_element("h1"));
/// ```
pub fn to_render_tree(input: &str, options: &Options) -> Result<Vec<RenderNode>, VastError> {
    let profile = resolve(input, options.framework.as_deref());
    log::debug!(
        "Resolved framework profile: {}",
        profile.map_or("none", |profile| profile.id)
    );

    let tree = parse_mdast(input, &options.parse_options())?;
    let handlers = Handlers::for_profile(profile);
    let state = State::new(input, &tree, &handlers);
    state.render_root(&tree)
}

/// Converts MDX to HTML for Vale.
///
/// ESM, expressions, and non-prose JSX come out as `<code>`/`<pre><code>`
/// so Vale ignores them; `{/* ... */}` comments become HTML comments;
/// prose components of the detected framework become
/// `<div data-component="...">` containers whose content is linted.
///
/// # Examples
///
/// ```
/// use mdx2vast_vale::{Options, to_vale_html};
///
/// let html = to_vale_html("# Hello World\n\nThis is a test.", &Options::default()).unwrap();
/// assert_eq!(html, "<h1>Hello World</h1>\n<p>This is a test.</p>");
/// ```
pub fn to_vale_html(input: &str, options: &Options) -> Result<String, VastError> {
    let tree = to_render_tree(input, options)?;
    Ok(serialize::to_html(&tree))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_deserialize_camel_case_with_defaults() {
        let options: Options = serde_json::from_str(r#"{"framework":"fern"}"#).unwrap();
        assert_eq!(options.framework.as_deref(), Some("fern"));
        assert!(options.enable_math);

        let options: Options = serde_json::from_str(r#"{"enableMath":false}"#).unwrap();
        assert_eq!(options, Options { framework: None, enable_math: false });
    }

    #[test]
    fn blank_framework_override_is_unset() {
        assert_eq!(Options::with_framework(Some("  ".to_string())), Options::default());
        assert_eq!(Options::with_framework(None), Options::default());
        assert_eq!(
            Options::with_framework(Some("Fern".to_string())).framework.as_deref(),
            Some("Fern")
        );
    }

    #[test]
    fn math_can_be_turned_off() {
        let options = Options {
            enable_math: false,
            ..Options::default()
        };
        assert_eq!(to_vale_html("Costs $5", &options).unwrap(), "<p>Costs $5</p>");
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(to_vale_html("", &Options::default()).unwrap(), "");
    }

    #[test]
    fn parse_errors_propagate() {
        let err = to_vale_html("<Card>\n\nNever closed", &Options::default()).unwrap_err();
        assert!(matches!(err, VastError::Parse { .. }));
    }

    #[test]
    fn invalid_esm_is_a_parse_error() {
        let err = to_vale_html("import this module into your project.\n\nText", &Options::default())
            .unwrap_err();
        assert!(matches!(err, VastError::Parse { .. }));
    }

    #[test]
    fn invalid_expression_is_a_parse_error() {
        let err = to_vale_html("{a b c}", &Options::default()).unwrap_err();
        assert!(matches!(err, VastError::Parse { .. }));
    }
}
