use crate::{MdxKind, VastError};
use markdown::mdast::Node;

/// Returns the exact substring of `source` spanned by `node`'s position.
///
/// markdown-rs reports byte offsets into the original input, so the slice
/// is the literal syntax as written, untouched by parsing.
pub fn source_slice<'a>(source: &'a str, node: &Node) -> Result<&'a str, VastError> {
    let position = node.position().ok_or(VastError::MissingPosition {
        kind: node_type(node),
    })?;
    let (start, end) = (position.start.offset, position.end.offset);

    source.get(start..end).ok_or(VastError::InvalidSpan {
        start,
        end,
        len: source.len(),
    })
}

fn node_type(node: &Node) -> &'static str {
    MdxKind::of(node).map_or("markdown", MdxKind::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ParseOptions, parse_mdast};
    use markdown::mdast::MdxjsEsm;
    use markdown::unist::{Point, Position};

    fn esm(position: Option<Position>) -> Node {
        Node::MdxjsEsm(MdxjsEsm {
            value: String::new(),
            position,
            stops: Vec::new(),
        })
    }

    #[test]
    fn slices_exact_source() {
        let source = "Before {value} after";
        let root = parse_mdast(source, &ParseOptions::mdx()).unwrap();
        let paragraph = &root.children().unwrap()[0];
        let expression = &paragraph.children().unwrap()[1];

        assert_eq!(source_slice(source, expression).unwrap(), "{value}");
    }

    #[test]
    fn slice_keeps_line_breaks_and_indentation() {
        let source = "<Card>\n  body\n</Card>";
        let root = parse_mdast(source, &ParseOptions::mdx()).unwrap();
        let element = &root.children().unwrap()[0];

        assert_eq!(source_slice(source, element).unwrap(), source);
    }

    #[test]
    fn missing_position_is_an_error() {
        let err = source_slice("import a from 'a'", &esm(None)).unwrap_err();
        assert!(matches!(err, VastError::MissingPosition { kind: "mdxjsEsm" }));
    }

    #[test]
    fn out_of_bounds_span_is_an_error() {
        let position = Position {
            start: Point::new(1, 1, 0),
            end: Point::new(1, 40, 39),
        };
        let err = source_slice("short", &esm(Some(position))).unwrap_err();
        assert!(matches!(
            err,
            VastError::InvalidSpan {
                start: 0,
                end: 39,
                len: 5
            }
        ));
    }
}
