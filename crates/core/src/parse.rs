//! Markdown/MDX parsing through markdown-rs, with ESM and expressions
//! checked by mdxjs-rs' SWC parsers.

use crate::{SourceLocation, VastError};
use markdown::mdast::Node;
use markdown::message::{Message, Place};
use mdxjs::{MdxConstructs, MdxParseOptions};

/// Parser options for building mdxjs-rs parse options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Enable YAML/TOML frontmatter parsing.
    pub frontmatter: bool,
    /// Enable math constructs (`$inline$` and `$$block$$`).
    pub math: bool,
}

impl ParseOptions {
    /// MDX defaults: JSX, ESM, expressions, frontmatter, and math.
    pub const fn mdx() -> Self {
        Self {
            frontmatter: true,
            math: true,
        }
    }

    /// Convert to mdxjs-rs `MdxParseOptions`.
    ///
    /// mdxjs-rs always turns off autolinks, raw HTML, and indented code,
    /// and turns on ESM, expressions, and JSX.
    pub fn to_mdx(self) -> MdxParseOptions {
        MdxParseOptions {
            constructs: MdxConstructs {
                frontmatter: self.frontmatter,
                math_flow: self.math,
                math_text: self.math,
                ..MdxConstructs::default()
            },
            math_text_single_dollar: self.math,
            ..MdxParseOptions::default()
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::mdx()
    }
}

/// Parse MDX into an MDAST tree.
///
/// ESM blocks and expressions must be valid JavaScript; a syntax error in
/// either fails the whole document.
pub fn parse_mdast(input: &str, options: &ParseOptions) -> Result<Node, VastError> {
    let options = mdxjs::Options {
        parse: options.to_mdx(),
        ..mdxjs::Options::default()
    };

    mdxjs::mdast_util_from_mdx(input, &options).map_err(|err| VastError::Parse {
        message: err.reason.clone(),
        location: message_location(&err),
    })
}

fn message_location(message: &Message) -> SourceLocation {
    match &message.place {
        Some(place) => match place.as_ref() {
            Place::Point(point) => SourceLocation::new(point.line, point.column),
            Place::Position(position) => {
                SourceLocation::new(position.start.line, position.start.column)
            }
        },
        None => SourceLocation::new(1, 1),
    }
}
