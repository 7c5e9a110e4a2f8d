//! Content module - documents, front-matter, and filesystem loading

mod document;
mod error;
mod frontmatter;
pub mod loader;

pub use document::{DocumentKind, Page, Post};
pub use error::ContentError;
pub use frontmatter::{parse_date_string, FrontMatter};
