use thiserror::Error;

/// Source location information for error reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Optional file path
    pub file: Option<String>,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            file: None,
            line,
            column,
        }
    }

    /// Attach a file path to this location
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(file) = &self.file {
            write!(f, "{}:{}:{}", file, self.line, self.column)
        } else {
            write!(f, "{}:{}", self.line, self.column)
        }
    }
}

/// Errors that can occur while converting MDX for linting.
///
/// All of these are fatal: a conversion either produces the whole document
/// or nothing.
#[derive(Debug, Error)]
pub enum VastError {
    /// markdown-rs rejected the document.
    #[error("Parse error at {location}: {message}")]
    Parse {
        /// Error message
        message: String,
        /// Source location
        location: SourceLocation,
    },
    /// A special MDX node reached a handler without a position span.
    #[error("Missing position for `{kind}` node")]
    MissingPosition {
        /// mdast type name of the offending node
        kind: &'static str,
    },
    /// A node position does not address a valid slice of the document.
    #[error("Invalid source span {start}..{end} for document of {len} bytes")]
    InvalidSpan {
        /// Start byte offset
        start: usize,
        /// End byte offset
        end: usize,
        /// Document length in bytes
        len: usize,
    },
}

impl VastError {
    /// Create a parse error with location
    pub fn parse_error(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::Parse {
            message: message.into(),
            location: SourceLocation::new(line, column),
        }
    }

    /// Attach a file path to the location of a parse error.
    ///
    /// Other variants carry no location and are returned unchanged.
    pub fn in_file(self, file: impl Into<String>) -> Self {
        match self {
            Self::Parse { message, location } => Self::Parse {
                message,
                location: location.with_file(file),
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_display_without_file() {
        assert_eq!(SourceLocation::new(3, 7).to_string(), "3:7");
    }

    #[test]
    fn location_display_with_file() {
        let location = SourceLocation::new(1, 2).with_file("docs/index.mdx");
        assert_eq!(location.to_string(), "docs/index.mdx:1:2");
    }

    #[test]
    fn in_file_only_touches_parse_errors() {
        let err = VastError::parse_error("Unexpected end of file", 4, 1).in_file("a.mdx");
        assert_eq!(
            err.to_string(),
            "Parse error at a.mdx:4:1: Unexpected end of file"
        );

        let err = VastError::MissingPosition { kind: "mdxjsEsm" }.in_file("a.mdx");
        assert!(matches!(err, VastError::MissingPosition { kind: "mdxjsEsm" }));
    }
}
