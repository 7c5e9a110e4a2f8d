//! Post and Page models

use chrono::{DateTime, Local};
use indexmap::IndexSet;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// The two document kinds, selected by the `template` front-matter field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Post,
    Page,
}

impl DocumentKind {
    /// The `template` value selecting this kind
    pub fn template(&self) -> &'static str {
        match self {
            DocumentKind::Post => "post",
            DocumentKind::Page => "page",
        }
    }

    /// Resolve a `template` front-matter value
    pub fn from_template(value: &str) -> Option<Self> {
        match value {
            "post" => Some(DocumentKind::Post),
            "page" => Some(DocumentKind::Page),
            _ => None,
        }
    }
}

/// A blog post
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Publication date
    pub date: DateTime<Local>,

    /// Draft flag; drafts are excluded from published listings
    pub draft: bool,

    /// URL path identity, unique across all documents
    pub slug: String,

    /// Summary used for listings and SEO
    pub description: Option<String>,

    /// Single category classification
    pub category: Option<String>,

    /// Tags in written order; duplicates collapse
    pub tags: IndexSet<String>,

    /// Raw markdown body, untouched
    pub body: String,

    /// Source file path (relative to the content directory)
    pub source: String,

    /// Full source file path
    pub full_source: PathBuf,

    /// Custom front-matter fields
    pub extra: HashMap<String, serde_yaml::Value>,
}

/// A standalone page
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    /// Page title
    pub title: String,

    /// Optional creation date
    pub date: Option<DateTime<Local>>,

    /// URL path identity, unique across all documents
    pub slug: String,

    /// Relative path to a social preview image
    pub social_image: Option<String>,

    /// Raw markdown body, untouched
    pub body: String,

    /// Source file path (relative to the content directory)
    pub source: String,

    /// Full source file path
    pub full_source: PathBuf,

    /// Custom front-matter fields
    pub extra: HashMap<String, serde_yaml::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_template() {
        assert_eq!(DocumentKind::from_template("post"), Some(DocumentKind::Post));
        assert_eq!(DocumentKind::from_template("page"), Some(DocumentKind::Page));
        assert_eq!(DocumentKind::from_template("Post"), None);
        assert_eq!(DocumentKind::from_template("article"), None);
    }

    #[test]
    fn test_kind_template_round_trip() {
        assert_eq!(DocumentKind::Post.template(), "post");
        assert_eq!(DocumentKind::Page.template(), "page");
    }
}
