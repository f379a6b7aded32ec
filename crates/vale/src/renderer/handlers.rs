//! Handlers for the MDX node kinds.
//!
//! ESM and expressions are never prose: comments become HTML comments and
//! everything else is escaped as code. JSX elements are unwrapped into a
//! prose container only when the resolved framework marks the component as
//! prose-bearing.

use super::escape::escape_as_code;
use super::state::{Handlers, MdxHandler, State};
use super::tree::{Element, RenderNode};
use crate::registry::FrameworkProfile;
use markdown::mdast::Node;
use mdx2vast_core::{MdxKind, VastError};

/// Handles ESM statements and flow/text expressions.
#[derive(Debug, Default, Clone, Copy)]
pub struct NonProseHandler;

impl MdxHandler for NonProseHandler {
    fn handle(
        &self,
        kind: MdxKind,
        node: &Node,
        state: &State<'_>,
    ) -> Result<RenderNode, VastError> {
        let source = state.slice(node)?;

        if kind == MdxKind::FlowExpression && is_comment(source) {
            return Ok(RenderNode::comment(comment_body(source)));
        }
        Ok(escape_as_code(source, kind))
    }
}

fn is_comment(source: &str) -> bool {
    source.starts_with("{/*") && source.ends_with("*/}")
}

/// `{/* body */}` -> ` body `. Overlapping markers (`{/*/}`) give an empty body.
fn comment_body(source: &str) -> &str {
    let end = source.len().saturating_sub(3);
    source.get(3..end).unwrap_or("")
}

/// Handles JSX flow and text elements against one resolved profile.
#[derive(Debug, Clone, Copy)]
pub struct JsxHandler {
    profile: Option<&'static FrameworkProfile>,
}

impl JsxHandler {
    /// Creates a handler bound to the document's resolved profile.
    pub fn new(profile: Option<&'static FrameworkProfile>) -> Self {
        Self { profile }
    }

    /// Returns the component name when `node` should be unwrapped as prose.
    fn prose_component<'n>(&self, node: &'n Node) -> Option<&'n str> {
        let profile = self.profile?;
        let (name, has_children) = match node {
            Node::MdxJsxFlowElement(element) => {
                (element.name.as_deref(), !element.children.is_empty())
            }
            Node::MdxJsxTextElement(element) => {
                (element.name.as_deref(), !element.children.is_empty())
            }
            _ => return None,
        };

        let name = name?;
        (has_children && profile.is_prose_component(name)).then_some(name)
    }
}

impl MdxHandler for JsxHandler {
    fn handle(
        &self,
        kind: MdxKind,
        node: &Node,
        state: &State<'_>,
    ) -> Result<RenderNode, VastError> {
        let source = state.slice(node)?;

        match self.prose_component(node) {
            Some(name) => Ok(Element::new("div")
                .with_attribute("class", kind.class_name())
                .with_attribute("data-component", name)
                .with_children(state.render_children(node)?)
                .into()),
            None => Ok(escape_as_code(source, kind)),
        }
    }
}

impl Handlers<'static> {
    /// The handler set used for Vale output, bound to `profile`.
    pub fn for_profile(profile: Option<&'static FrameworkProfile>) -> Self {
        let jsx = JsxHandler::new(profile);
        MdxKind::ALL.iter().fold(Handlers::new(), |handlers, &kind| {
            if kind.is_jsx() {
                handlers.with(kind, jsx)
            } else {
                handlers.with(kind, NonProseHandler)
            }
        })
    }
}
