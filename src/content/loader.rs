//! Content loader - loads posts and pages from the content directory

use anyhow::Result;
use indexmap::IndexSet;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{parse_date_string, ContentError, DocumentKind, FrontMatter, Page, Post};
use crate::Workspace;

/// Loads content from the content directory
pub struct ContentLoader<'a> {
    workspace: &'a Workspace,
    exclude: Vec<glob::Pattern>,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(workspace: &'a Workspace) -> Self {
        let exclude = workspace
            .config
            .exclude
            .iter()
            .filter_map(|p| match glob::Pattern::new(p) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    tracing::warn!("Ignoring invalid exclude pattern {:?}: {}", p, e);
                    None
                }
            })
            .collect();
        Self { workspace, exclude }
    }

    /// All markdown files under the posts directory
    pub fn post_files(&self) -> Vec<PathBuf> {
        self.collect_files(&self.workspace.posts_dir)
    }

    /// All markdown files under the pages directory
    pub fn page_files(&self) -> Vec<PathBuf> {
        self.collect_files(&self.workspace.pages_dir)
    }

    /// Load published posts, sorted by date descending (newest first).
    /// Drafts are excluded unless `include_drafts` is configured.
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let mut posts = self.load_all_posts()?;
        if !self.workspace.config.include_drafts {
            posts.retain(|p| !p.draft);
        }
        Ok(posts)
    }

    /// Load every post including drafts, sorted by date descending
    pub fn load_all_posts(&self) -> Result<Vec<Post>> {
        // Documents are mutually independent, so loading is parallel
        // per file.
        let mut posts: Vec<Post> = self
            .post_files()
            .par_iter()
            .filter_map(|path| match self.load_post(path) {
                Ok(post) => Some(post),
                Err(e) => {
                    tracing::warn!("Skipping post {:?}: {}", path, e);
                    None
                }
            })
            .collect();

        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(posts)
    }

    /// Load all pages
    pub fn load_pages(&self) -> Result<Vec<Page>> {
        let mut pages: Vec<Page> = self
            .page_files()
            .par_iter()
            .filter_map(|path| match self.load_page(path) {
                Ok(page) => Some(page),
                Err(e) => {
                    tracing::warn!("Skipping page {:?}: {}", path, e);
                    None
                }
            })
            .collect();

        pages.sort_by(|a, b| a.source.cmp(&b.source));
        Ok(pages)
    }

    /// Load a single post from a file
    pub fn load_post(&self, path: &Path) -> Result<Post, ContentError> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)?;
        self.post_from_parts(path, fm, body)
    }

    /// Build a post from already-parsed front-matter and body
    pub fn post_from_parts(
        &self,
        path: &Path,
        fm: FrontMatter,
        body: &str,
    ) -> Result<Post, ContentError> {
        let title = fm.title.ok_or(ContentError::MissingField("title"))?;

        let template = fm.template.ok_or(ContentError::MissingField("template"))?;
        match DocumentKind::from_template(&template) {
            Some(DocumentKind::Post) => {}
            Some(DocumentKind::Page) => {
                return Err(ContentError::TemplateMismatch {
                    expected: DocumentKind::Post.template(),
                    found: template,
                })
            }
            None => return Err(ContentError::UnknownTemplate(template)),
        }

        let date_raw = fm.date.ok_or(ContentError::MissingField("date"))?;
        let date =
            parse_date_string(&date_raw).ok_or_else(|| ContentError::InvalidDate(date_raw))?;

        let slug = fm.slug.unwrap_or_else(|| derive_slug(path));
        let tags: IndexSet<String> = fm.tags.into_iter().collect();

        Ok(Post {
            title,
            date,
            draft: fm.draft,
            slug,
            description: fm.description,
            category: fm.category,
            tags,
            body: body.to_string(),
            source: self.relative_source(path),
            full_source: path.to_path_buf(),
            extra: fm.extra,
        })
    }

    /// Load a single page from a file
    pub fn load_page(&self, path: &Path) -> Result<Page, ContentError> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)?;
        self.page_from_parts(path, fm, body)
    }

    /// Build a page from already-parsed front-matter and body
    pub fn page_from_parts(
        &self,
        path: &Path,
        fm: FrontMatter,
        body: &str,
    ) -> Result<Page, ContentError> {
        let title = fm.title.ok_or(ContentError::MissingField("title"))?;

        let template = fm.template.ok_or(ContentError::MissingField("template"))?;
        match DocumentKind::from_template(&template) {
            Some(DocumentKind::Page) => {}
            Some(DocumentKind::Post) => {
                return Err(ContentError::TemplateMismatch {
                    expected: DocumentKind::Page.template(),
                    found: template,
                })
            }
            None => return Err(ContentError::UnknownTemplate(template)),
        }

        // Pages have no required date, but a present one must parse
        let date = match fm.date {
            Some(raw) => {
                Some(parse_date_string(&raw).ok_or_else(|| ContentError::InvalidDate(raw))?)
            }
            None => None,
        };

        let slug = fm.slug.unwrap_or_else(|| derive_slug(path));

        Ok(Page {
            title,
            date,
            slug,
            social_image: fm.social_image,
            body: body.to_string(),
            source: self.relative_source(path),
            full_source: path.to_path_buf(),
            extra: fm.extra,
        })
    }

    /// Collect markdown files under a directory, honoring exclude globs
    fn collect_files(&self, dir: &Path) -> Vec<PathBuf> {
        if !dir.exists() {
            return Vec::new();
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }
            let relative = path.strip_prefix(&self.workspace.content_dir).unwrap_or(path);
            if self.exclude.iter().any(|p| p.matches_path(relative)) {
                tracing::debug!("Excluded by pattern: {:?}", relative);
                continue;
            }
            files.push(path.to_path_buf());
        }

        files.sort();
        files
    }

    /// Source path relative to the content directory
    fn relative_source(&self, path: &Path) -> String {
        path.strip_prefix(&self.workspace.content_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string()
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

/// Derive a slug from the file path when front-matter omits one.
/// `index.md` takes its parent directory name.
pub fn derive_slug(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled");

    let name = if stem == "index" {
        path.parent()
            .and_then(|p| p.file_name())
            .and_then(|s| s.to_str())
            .unwrap_or(stem)
    } else {
        stem
    };

    slug::slugify(name)
}
