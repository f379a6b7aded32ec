#![deny(missing_docs)]
//! mdx2vast Vale engine: framework detection, MDX node handling, and HTML output.
//!
//! Ordinary markdown becomes real HTML so Vale can lint it. ESM statements,
//! expressions, and component markup become escaped `<code>` (or comments),
//! except for the prose-bearing components of the detected documentation
//! framework, whose children are rendered as HTML too.

/// Documentation-framework registry and detection.
pub mod registry;
/// Render tree, tree builder, MDX handlers, and serializer.
pub mod renderer;

pub use registry::{FRAMEWORKS, FrameworkProfile, find_profile, resolve};
pub use renderer::{
    BatchInput, BatchOutput, FRAMEWORK_ENV_VAR, Options, RenderNode, convert_batch,
    to_render_tree, to_vale_html,
};
