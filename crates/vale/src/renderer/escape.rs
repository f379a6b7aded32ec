//! Renders MDX syntax as literal code so the linter skips it.

use super::tree::{Element, RenderNode};
use mdx2vast_core::MdxKind;

/// Wraps `source` in a code element carrying the `mdxNode <kind>` class.
///
/// Multi-line slices become `<pre><code>`, single-line ones a bare `<code>`.
/// The slice is stored as text, so the serializer escapes any markup in it.
pub fn escape_as_code(source: &str, kind: MdxKind) -> RenderNode {
    let code = Element::new("code")
        .with_attribute("class", kind.class_name())
        .with_child(RenderNode::text(source));

    if source.contains(['\n', '\r']) {
        Element::new("pre").with_child(code).into()
    } else {
        code.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::serialize::to_html;

    #[test]
    fn single_line_is_inline_code() {
        let node = escape_as_code("<Icon name=\"star\" />", MdxKind::JsxFlowElement);
        assert_eq!(
            to_html(&[node]),
            "<code class=\"mdxNode mdxJsxFlowElement\">&lt;Icon name=\"star\" /&gt;</code>"
        );
    }

    #[test]
    fn multi_line_is_preformatted() {
        let node = escape_as_code("export const a = {\n  b: 1\n}", MdxKind::Esm);
        let pre = node.as_element().unwrap();

        assert_eq!(pre.tag, "pre");
        assert!(pre.attributes.is_empty());
        let code = pre.children[0].as_element().unwrap();
        assert_eq!(code.attribute("class"), Some("mdxNode mdxjsEsm"));
    }

    #[test]
    fn carriage_return_counts_as_line_break() {
        let node = escape_as_code("{a\rb}", MdxKind::FlowExpression);
        assert!(node.is_element("pre"));
    }
}
