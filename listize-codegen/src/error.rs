use listize_extract::ParseError;
use thiserror::Error;

/// Precondition violations on generator input, or a failed formatting pass.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("no structs")]
    NoStructs,

    #[error("no struct name")]
    NoStructName,

    #[error("struct '{name}' has no fields")]
    NoStructFields { name: String },

    #[error("field #{index} of struct '{strukt}' has no name")]
    NoFieldName { strukt: String, index: usize },

    #[error("field '{field}' of struct '{strukt}' has no type")]
    NoFieldType { strukt: String, field: String },

    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Generated text that didn't survive the formatting pass.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("generated source is not valid Go at {line}:{column}: {message}\n  | {snippet}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
        snippet: String,
    },

    #[error("generated source has no package clause")]
    MissingPackage,

    #[error("failed to parse generated source")]
    Parser(#[source] ParseError),
}

impl FormatError {
    pub(crate) fn from_parse(err: ParseError, src: &str) -> Self {
        match err {
            ParseError::Syntax {
                line,
                column,
                message,
            } => Self::Syntax {
                snippet: src
                    .lines()
                    .nth(line.saturating_sub(1))
                    .unwrap_or_default()
                    .trim_end()
                    .to_string(),
                line,
                column,
                message,
            },
            other => Self::Parser(other),
        }
    }
}
