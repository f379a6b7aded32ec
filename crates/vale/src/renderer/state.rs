//! Tree builder: converts an mdast into a render tree.
//!
//! Ordinary markdown follows the defaults of `mdast-util-to-hast`, so the
//! HTML matches what remark-based tooling produces. The five MDX node kinds
//! are dispatched to the [`Handlers`] registered for them.

use super::tree::{Element, RenderNode};
use markdown::mdast::{self, Node};
use mdx2vast_core::{MdxKind, VastError, source_slice};
use std::collections::HashMap;

/// Renders one MDX node into exactly one render node.
///
/// Handlers that need the node's children rendered call
/// [`State::render_children`], which re-enters the full pipeline.
pub trait MdxHandler {
    /// Render `node`, whose kind is `kind`.
    fn handle(&self, kind: MdxKind, node: &Node, state: &State<'_>)
    -> Result<RenderNode, VastError>;
}

impl<F> MdxHandler for F
where
    F: Fn(MdxKind, &Node, &State<'_>) -> Result<RenderNode, VastError>,
{
    fn handle(
        &self,
        kind: MdxKind,
        node: &Node,
        state: &State<'_>,
    ) -> Result<RenderNode, VastError> {
        (self)(kind, node, state)
    }
}

/// Per-kind handler overrides for the MDX node kinds.
///
/// Kinds without a handler fall back to the builder's default: expressions
/// and ESM become their value as text, elements become a `<div>` of their
/// rendered children.
#[derive(Default)]
pub struct Handlers<'h> {
    by_kind: HashMap<MdxKind, Box<dyn MdxHandler + 'h>>,
}

impl<'h> Handlers<'h> {
    /// Creates an empty handler map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `kind`, replacing any previous handler.
    pub fn insert(&mut self, kind: MdxKind, handler: impl MdxHandler + 'h) {
        self.by_kind.insert(kind, Box::new(handler));
    }

    /// Builder form of [`Handlers::insert`].
    pub fn with(mut self, kind: MdxKind, handler: impl MdxHandler + 'h) -> Self {
        self.insert(kind, handler);
        self
    }

    /// Returns the handler registered for `kind`.
    pub fn get(&self, kind: MdxKind) -> Option<&(dyn MdxHandler + 'h)> {
        self.by_kind.get(&kind).map(|handler| &**handler)
    }
}

/// Builder state for one document.
pub struct State<'a> {
    source: &'a str,
    handlers: &'a Handlers<'a>,
    definitions: HashMap<&'a str, &'a mdast::Definition>,
}

impl<'a> State<'a> {
    /// Creates the builder for `root`, parsed from `source`.
    pub fn new(source: &'a str, root: &'a Node, handlers: &'a Handlers<'a>) -> Self {
        let mut definitions = HashMap::new();
        collect_definitions(root, &mut definitions);
        Self {
            source,
            handlers,
            definitions,
        }
    }

    /// The exact source text spanned by `node`.
    pub fn slice(&self, node: &Node) -> Result<&'a str, VastError> {
        source_slice(self.source, node)
    }

    /// Renders the document root: top-level blocks separated by newlines.
    pub fn render_root(&self, root: &Node) -> Result<Vec<RenderNode>, VastError> {
        Ok(wrap(self.render_children(root)?, false))
    }

    /// Renders the children of `parent` through the full pipeline,
    /// including the registered MDX handlers.
    pub fn render_children(&self, parent: &Node) -> Result<Vec<RenderNode>, VastError> {
        let Some(children) = parent.children() else {
            return Ok(Vec::new());
        };

        let mut values = Vec::with_capacity(children.len());
        for (index, child) in children.iter().enumerate() {
            let mut rendered = self.render_node(child, Some(parent))?;
            // Whitespace after a hard break is not content.
            if index > 0
                && matches!(children[index - 1], Node::Break(_))
                && let Some(first) = rendered.first_mut()
            {
                trim_leading_space(first);
            }
            values.extend(rendered);
        }
        Ok(values)
    }

    fn render_node(
        &self,
        node: &Node,
        parent: Option<&Node>,
    ) -> Result<Vec<RenderNode>, VastError> {
        if let Some(kind) = MdxKind::of(node) {
            let rendered = match self.handlers.get(kind) {
                Some(handler) => handler.handle(kind, node, self)?,
                None => self.render_unknown(node)?,
            };
            return Ok(vec![rendered]);
        }

        let rendered = match node {
            Node::Root(_) => self.render_root(node)?,
            Node::Blockquote(_) => one(
                Element::new("blockquote").with_children(wrap(self.render_children(node)?, true)),
            ),
            Node::Break(_) => vec![Element::new("br").into(), RenderNode::text("\n")],
            Node::Code(code) => one(render_code(code)),
            Node::Emphasis(_) => self.element_of("em", node)?,
            Node::Strong(_) => self.element_of("strong", node)?,
            Node::Delete(_) => self.element_of("del", node)?,
            Node::Paragraph(_) => self.element_of("p", node)?,
            Node::Heading(heading) => self.element_of(&format!("h{}", heading.depth), node)?,
            Node::Html(html) => vec![RenderNode::raw(&html.value)],
            Node::Image(image) => one(image_element(
                &image.url,
                &image.alt,
                image.title.as_deref(),
            )),
            Node::ImageReference(reference) => {
                match self.definitions.get(reference.identifier.as_str()) {
                    Some(definition) => one(image_element(
                        &definition.url,
                        &reference.alt,
                        definition.title.as_deref(),
                    )),
                    None => vec![RenderNode::text(self.slice(node)?)],
                }
            }
            Node::InlineCode(code) => one(
                Element::new("code")
                    .with_child(RenderNode::text(collapse_line_endings(&code.value))),
            ),
            Node::InlineMath(math) => one(math_code("math-inline", &math.value)),
            Node::Math(math) => one(
                Element::new("pre").with_child(math_code("math-display", &math.value)),
            ),
            Node::Link(link) => one(
                link_element(&link.url, link.title.as_deref())
                    .with_children(self.render_children(node)?),
            ),
            Node::LinkReference(reference) => {
                match self.definitions.get(reference.identifier.as_str()) {
                    Some(definition) => one(
                        link_element(&definition.url, definition.title.as_deref())
                            .with_children(self.render_children(node)?),
                    ),
                    None => vec![RenderNode::text(self.slice(node)?)],
                }
            }
            Node::List(list) => self.render_list(list, node)?,
            Node::ListItem(item) => self.render_list_item(item, node, parent)?,
            Node::Text(text) => vec![RenderNode::text(trim_lines(&text.value))],
            Node::ThematicBreak(_) => one(Element::new("hr")),
            Node::Definition(_) | Node::Yaml(_) | Node::Toml(_) => Vec::new(),
            _ => {
                log::warn!("Unhandled markdown node type: {:?}", node);
                vec![self.render_unknown(node)?]
            }
        };
        Ok(rendered)
    }

    fn element_of(&self, tag: &str, node: &Node) -> Result<Vec<RenderNode>, VastError> {
        Ok(one(Element::new(tag).with_children(self.render_children(node)?)))
    }

    /// Fallback for nodes without a dedicated rendering.
    fn render_unknown(&self, node: &Node) -> Result<RenderNode, VastError> {
        let value = match node {
            Node::MdxjsEsm(esm) => Some(&esm.value),
            Node::MdxFlowExpression(expression) => Some(&expression.value),
            Node::MdxTextExpression(expression) => Some(&expression.value),
            _ => None,
        };
        match value {
            Some(value) => Ok(RenderNode::text(value)),
            None => Ok(Element::new("div")
                .with_children(self.render_children(node)?)
                .into()),
        }
    }

    fn render_list(&self, list: &mdast::List, node: &Node) -> Result<Vec<RenderNode>, VastError> {
        let mut element = Element::new(if list.ordered { "ol" } else { "ul" });
        if let Some(start) = list.start.filter(|start| list.ordered && *start != 1) {
            element.set_attribute("start", start.to_string());
        }
        Ok(one(element.with_children(wrap(self.render_children(node)?, true))))
    }

    /// Tight items lose their `<p>` wrappers, loose items keep them.
    fn render_list_item(
        &self,
        item: &mdast::ListItem,
        node: &Node,
        parent: Option<&Node>,
    ) -> Result<Vec<RenderNode>, VastError> {
        let loose = match parent {
            Some(Node::List(list)) => list_loose(list),
            _ => item.spread,
        };
        let rendered = self.render_children(node)?;
        let tail_is_paragraph = rendered.last().map(|last| last.is_element("p"));

        let mut children = Vec::with_capacity(rendered.len() * 2 + 1);
        for (index, child) in rendered.into_iter().enumerate() {
            let is_paragraph = child.is_element("p");
            if loose || index != 0 || !is_paragraph {
                children.push(RenderNode::text("\n"));
            }
            match child {
                RenderNode::Element(paragraph) if is_paragraph && !loose => {
                    children.extend(paragraph.children)
                }
                other => children.push(other),
            }
        }
        if let Some(tail_is_paragraph) = tail_is_paragraph
            && (loose || !tail_is_paragraph)
        {
            children.push(RenderNode::text("\n"));
        }

        Ok(one(Element::new("li").with_children(children)))
    }
}

fn collect_definitions<'a>(
    node: &'a Node,
    definitions: &mut HashMap<&'a str, &'a mdast::Definition>,
) {
    if let Node::Definition(definition) = node {
        definitions
            .entry(definition.identifier.as_str())
            .or_insert(definition);
    }
    if let Some(children) = node.children() {
        for child in children {
            collect_definitions(child, definitions);
        }
    }
}

fn list_loose(list: &mdast::List) -> bool {
    list.spread
        || list
            .children
            .iter()
            .any(|child| matches!(child, Node::ListItem(item) if item.spread))
}

fn one(element: Element) -> Vec<RenderNode> {
    vec![element.into()]
}

/// Interleaves newline text nodes between `nodes`; `loose` also pads both ends.
fn wrap(nodes: Vec<RenderNode>, loose: bool) -> Vec<RenderNode> {
    let has_nodes = !nodes.is_empty();
    let mut result = Vec::with_capacity(nodes.len() * 2 + 1);
    if loose {
        result.push(RenderNode::text("\n"));
    }
    for (index, node) in nodes.into_iter().enumerate() {
        if index > 0 {
            result.push(RenderNode::text("\n"));
        }
        result.push(node);
    }
    if loose && has_nodes {
        result.push(RenderNode::text("\n"));
    }
    result
}

fn render_code(code: &mdast::Code) -> Element {
    let value = if code.value.is_empty() {
        String::new()
    } else {
        format!("{}\n", code.value)
    };
    let mut element = Element::new("code");
    if let Some(lang) = code.lang.as_deref() {
        element.set_attribute("class", format!("language-{lang}"));
    }
    Element::new("pre").with_child(element.with_child(RenderNode::text(value)))
}

fn math_code(display: &str, value: &str) -> Element {
    Element::new("code")
        .with_attribute("class", format!("language-math {display}"))
        .with_child(RenderNode::text(value))
}

fn link_element(url: &str, title: Option<&str>) -> Element {
    let mut element = Element::new("a").with_attribute("href", normalize_uri(url));
    if let Some(title) = title {
        element.set_attribute("title", title);
    }
    element
}

fn image_element(url: &str, alt: &str, title: Option<&str>) -> Element {
    let mut element = Element::new("img")
        .with_attribute("src", normalize_uri(url))
        .with_attribute("alt", alt);
    if let Some(title) = title {
        element.set_attribute("title", title);
    }
    element
}

/// Percent-encodes characters not allowed in URLs, keeping valid escapes.
///
/// markdown-rs' `sanitize` also writes `&` as `&amp;`; that is undone here
/// because the serializer escapes attribute values itself.
fn normalize_uri(url: &str) -> String {
    html_escape::decode_html_entities(&markdown::sanitize(url)).into_owned()
}

fn trim_leading_space(node: &mut RenderNode) {
    let target = match node {
        RenderNode::Element(element) => element.children.first_mut(),
        other => Some(other),
    };
    if let Some(RenderNode::Text { value }) = target {
        *value = value.trim_start_matches([' ', '\t']).to_string();
    }
}

/// Strips spaces and tabs around line endings, keeping the endings themselves.
fn trim_lines(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut rest = value;
    let mut first = true;

    while let Some(pos) = rest.find(['\r', '\n']) {
        let line = &rest[..pos];
        let line = if first {
            line
        } else {
            line.trim_start_matches([' ', '\t'])
        };
        result.push_str(line.trim_end_matches([' ', '\t']));

        let eol_len = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        result.push_str(&rest[pos..pos + eol_len]);
        rest = &rest[pos + eol_len..];
        first = false;
    }

    if first {
        result.push_str(rest);
    } else {
        result.push_str(rest.trim_start_matches([' ', '\t']));
    }
    result
}

fn collapse_line_endings(value: &str) -> String {
    value.replace("\r\n", " ").replace(['\r', '\n'], " ")
}
