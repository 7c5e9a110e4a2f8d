//! inkpress: a Markdown blog content toolkit
//!
//! This crate loads a tree of Markdown documents with front-matter into
//! typed post and page records, and checks the content set against its
//! integrity rules (unique slugs, required fields, valid dates, resolvable
//! asset references). Bodies stay raw Markdown; rendering is someone
//! else's job.

pub mod check;
pub mod commands;
pub mod config;
pub mod content;

use anyhow::Result;
use std::path::Path;

/// A content workspace: configuration plus resolved directories
#[derive(Clone)]
pub struct Workspace {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content directory
    pub content_dir: std::path::PathBuf,
    /// Posts directory
    pub posts_dir: std::path::PathBuf,
    /// Pages directory
    pub pages_dir: std::path::PathBuf,
    /// Media asset directory
    pub media_dir: std::path::PathBuf,
}

impl Workspace {
    /// Open a workspace rooted at a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let posts_dir = content_dir.join(&config.posts_dir);
        let pages_dir = content_dir.join(&config.pages_dir);
        let media_dir = base_dir.join(&config.media_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            posts_dir,
            pages_dir,
            media_dir,
        })
    }

    /// Initialize the workspace on disk
    pub fn init(&self) -> Result<()> {
        commands::init::run(self)
    }

    /// Check content integrity
    pub fn check(&self) -> Result<check::Report> {
        check::run(self)
    }

    /// Create a new document
    pub fn new_document(&self, title: &str, template: Option<&str>) -> Result<()> {
        commands::new::run(self, title, template, false, None)
    }
}
