use markdown::mdast::Node;

/// Fixed class token carried by every element produced for an MDX node.
pub const MDX_NODE_CLASS: &str = "mdxNode";

/// The five MDX node kinds that are not ordinary prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MdxKind {
    /// `import` / `export` statement.
    Esm,
    /// Block-level `{expression}`.
    FlowExpression,
    /// Inline `{expression}`.
    TextExpression,
    /// Block-level `<Component>` element.
    JsxFlowElement,
    /// Inline `<Component>` element.
    JsxTextElement,
}

impl MdxKind {
    /// All kinds, in declaration order.
    pub const ALL: [MdxKind; 5] = [
        MdxKind::Esm,
        MdxKind::FlowExpression,
        MdxKind::TextExpression,
        MdxKind::JsxFlowElement,
        MdxKind::JsxTextElement,
    ];

    /// Classifies an mdast node, returning `None` for ordinary markdown.
    pub fn of(node: &Node) -> Option<Self> {
        match node {
            Node::MdxjsEsm(_) => Some(Self::Esm),
            Node::MdxFlowExpression(_) => Some(Self::FlowExpression),
            Node::MdxTextExpression(_) => Some(Self::TextExpression),
            Node::MdxJsxFlowElement(_) => Some(Self::JsxFlowElement),
            Node::MdxJsxTextElement(_) => Some(Self::JsxTextElement),
            _ => None,
        }
    }

    /// The mdast type name (`mdxjsEsm`, `mdxJsxFlowElement`, ...).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Esm => "mdxjsEsm",
            Self::FlowExpression => "mdxFlowExpression",
            Self::TextExpression => "mdxTextExpression",
            Self::JsxFlowElement => "mdxJsxFlowElement",
            Self::JsxTextElement => "mdxJsxTextElement",
        }
    }

    /// Whether this kind is a JSX element rather than ESM or an expression.
    pub const fn is_jsx(self) -> bool {
        matches!(self, Self::JsxFlowElement | Self::JsxTextElement)
    }

    /// Class attribute value marking output produced for this kind,
    /// e.g. `mdxNode mdxJsxFlowElement`.
    pub fn class_name(self) -> String {
        format!("{} {}", MDX_NODE_CLASS, self.as_str())
    }
}

impl std::fmt::Display for MdxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
