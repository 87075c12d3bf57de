use std::path::PathBuf;

use thiserror::Error;

/// Failure to resolve a directory into a Go package.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("directory '{}' does not exist", dir.display())]
    NotFound { dir: PathBuf },

    #[error("'{}' is not a directory", dir.display())]
    NotADirectory { dir: PathBuf },

    #[error("no buildable Go source files in '{}'", dir.display())]
    NoGoFiles { dir: PathBuf },

    #[error(
        "found packages {first} ({}) and {second} ({}) in '{}'",
        first_file.display(),
        second_file.display(),
        dir.display()
    )]
    MultiplePackages {
        dir: PathBuf,
        first: String,
        first_file: PathBuf,
        second: String,
        second_file: PathBuf,
    },

    #[error("'{}' has no package clause", path.display())]
    MissingPackageClause { path: PathBuf },

    #[error("failed to read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' has an invalid build constraint", path.display())]
    Constraint {
        path: PathBuf,
        #[source]
        source: ConstraintError,
    },

    #[error(transparent)]
    Parser(ParseError),
}

/// A malformed `//go:build` expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid //go:build expression '{expr}': {message}")]
pub struct ConstraintError {
    pub expr: String,
    pub message: String,
}

/// Source text that is not valid Go.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to load the Go grammar")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("parser produced no syntax tree")]
    NoTree,

    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
}

/// A field type that could not be turned back into source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("unsupported type syntax '{kind}' at line {line}")]
    Unsupported { kind: String, line: usize },

    #[error("type at line {line} is not valid UTF-8")]
    Utf8 { line: usize },

    #[error("{message}")]
    Other { message: String },
}

/// Any failure while collecting materials from a package directory.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error("failed to read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{}'", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("failed to extract structs from '{}'", path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: RenderError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_error_shows_underlying_cause() {
        let err = DiscoveryError::Parser(ParseError::NoTree);
        assert_eq!(err.to_string(), "parser produced no syntax tree");
    }

    #[test]
    fn test_constraint_error_message() {
        let err = DiscoveryError::Constraint {
            path: PathBuf::from("a.go"),
            source: ConstraintError {
                expr: "linux &&".to_string(),
                message: "unexpected end of expression".to_string(),
            },
        };
        assert_eq!(err.to_string(), "'a.go' has an invalid build constraint");
    }
}
