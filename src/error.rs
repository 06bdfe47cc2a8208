use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
    #[error("line {line}: unterminated string literal")]
    UnterminatedString { line: usize },
    #[error("line {line}: unsupported escape `\\{escape}`")]
    InvalidEscape { line: usize, escape: char },
    #[error("line {line}: `{name}` is already defined")]
    DuplicateDefinition { name: &'static str, line: usize },
    #[error("`{name}` is not defined; copy config.example.h to config.h and fill it in")]
    MissingDefinition { name: String },
    #[error("unknown configuration key `{name}`")]
    UnknownKey { name: String },
    #[error("unknown units `{name}`; expected standard, metric or imperial")]
    UnknownUnits { name: String },
    #[error("template {} does not exist", path.display())]
    TemplateMissing { path: PathBuf },
    #[error("invalid weather endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
