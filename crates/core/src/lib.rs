#![deny(missing_docs)]
//! mdx2vast core: MDX parsing, special node kinds, and exact source spans.

/// Core error types.
pub mod error;
/// Classification of the MDX-specific (non-prose) node kinds.
pub mod kind;
/// Markdown/MDX parsing through markdown-rs.
pub mod parse;
/// Source-slice extraction from node positions.
pub mod source;

pub use error::{SourceLocation, VastError};
pub use kind::{MDX_NODE_CLASS, MdxKind};
pub use parse::{ParseOptions, parse_mdast};
pub use source::source_slice;
