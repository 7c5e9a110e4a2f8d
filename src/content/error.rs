//! Document-level error taxonomy

use thiserror::Error;

/// Reasons a content file is rejected by the loader
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("front-matter block is not terminated")]
    UnterminatedFrontMatter,

    #[error("invalid front-matter: {0}")]
    FrontMatter(#[from] serde_yaml::Error),

    #[error("invalid date `{0}`")]
    InvalidDate(String),

    #[error("unknown template `{0}` (expected \"post\" or \"page\")")]
    UnknownTemplate(String),

    #[error("template `{found}` does not match document kind (expected `{expected}`)")]
    TemplateMismatch {
        expected: &'static str,
        found: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
