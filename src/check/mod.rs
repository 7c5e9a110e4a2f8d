//! Content-integrity checks
//!
//! Loads every document, capturing per-document defects as issues instead
//! of aborting, then applies cross-document checks (slug uniqueness) and
//! body asset checks.

pub mod assets;
mod report;

pub use report::{Issue, Report, Severity};

use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::content::loader::{derive_slug, ContentLoader};
use crate::content::{DocumentKind, FrontMatter};
use crate::Workspace;

lazy_static! {
    /// Slash-separated URL path segments, optionally anchored and trailed
    static ref SLUG_RE: Regex =
        Regex::new(r"^/?[A-Za-z0-9._~-]+(?:/[A-Za-z0-9._~-]+)*/?$").unwrap();
}

/// Run all checks over the content set
pub fn run(workspace: &Workspace) -> Result<Report> {
    let loader = ContentLoader::new(workspace);
    let mut report = Report::default();

    // slug -> source of first use, for duplicate detection
    let mut slugs: HashMap<String, String> = HashMap::new();

    for path in loader.post_files() {
        report.posts += 1;
        check_document(
            workspace,
            &loader,
            &path,
            DocumentKind::Post,
            &mut report,
            &mut slugs,
        );
    }

    for path in loader.page_files() {
        report.pages += 1;
        check_document(
            workspace,
            &loader,
            &path,
            DocumentKind::Page,
            &mut report,
            &mut slugs,
        );
    }

    Ok(report)
}

fn check_document(
    workspace: &Workspace,
    loader: &ContentLoader,
    path: &Path,
    kind: DocumentKind,
    report: &mut Report,
    slugs: &mut HashMap<String, String>,
) {
    let source = path
        .strip_prefix(&workspace.content_dir)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string();

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            report.push(Issue::error(&source, format!("unreadable: {}", e)));
            return;
        }
    };

    let (fm, body) = match FrontMatter::parse(&content) {
        Ok(parsed) => parsed,
        Err(e) => {
            report.push(Issue::error(&source, e.to_string()));
            return;
        }
    };

    check_front_matter(&fm, kind, path, &source, report);

    let (slug, body) = match kind {
        DocumentKind::Post => match loader.post_from_parts(path, fm, body) {
            Ok(post) => (post.slug, post.body),
            Err(e) => {
                report.push(Issue::error(&source, e.to_string()));
                return;
            }
        },
        DocumentKind::Page => match loader.page_from_parts(path, fm, body) {
            Ok(page) => (page.slug, page.body),
            Err(e) => {
                report.push(Issue::error(&source, e.to_string()));
                return;
            }
        },
    };

    check_slug(&slug, &source, report, slugs);
    check_assets(workspace, &body, &source, report);
}

/// Warnings derivable from front-matter alone
fn check_front_matter(
    fm: &FrontMatter,
    kind: DocumentKind,
    path: &Path,
    source: &str,
    report: &mut Report,
) {
    if fm.slug.is_none() && fm.title.is_some() {
        report.push(Issue::warning(
            source,
            format!("slug absent, derived `{}` from file path", derive_slug(path)),
        ));
    }

    let mut seen = indexmap::IndexSet::new();
    for tag in &fm.tags {
        if !seen.insert(tag) {
            report.push(Issue::warning(source, format!("duplicate tag `{}`", tag)));
        }
    }

    // The draft flag governs post visibility only
    if kind == DocumentKind::Page && fm.draft {
        report.push(Issue::warning(source, "`draft` has no effect on pages"));
    }
}

fn check_slug(
    slug: &str,
    source: &str,
    report: &mut Report,
    slugs: &mut HashMap<String, String>,
) {
    if !SLUG_RE.is_match(slug) {
        report.push(Issue::warning(
            source,
            format!("slug `{}` is not a clean URL path", slug),
        ));
    }

    if let Some(first) = slugs.insert(slug.to_string(), source.to_string()) {
        report.push(Issue::error(
            source,
            format!("duplicate slug `{}` (also used by {})", slug, first),
        ));
    }
}

/// Local image references must resolve under the workspace or media directory
fn check_assets(workspace: &Workspace, body: &str, source: &str, report: &mut Report) {
    for url in assets::image_refs(body) {
        if !assets::is_local_ref(&url) {
            continue;
        }
        if assets::resolve_ref(&url, &workspace.base_dir, &workspace.media_dir).is_none() {
            report.push(Issue::warning(
                source,
                format!("image `{}` not found under the media directory", url),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn workspace_with_content(files: &[(&str, &str)]) -> (tempfile::TempDir, Workspace) {
        let dir = tempfile::tempdir().unwrap();
        for (rel, content) in files {
            let path = dir.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        let workspace = Workspace::new(dir.path()).unwrap();
        (dir, workspace)
    }

    const GOOD_POST: &str = "---\n\
title: Good\n\
date: 2024-01-01\n\
template: post\n\
slug: /posts/good/\n\
---\n\
Fine.\n";

    #[test]
    fn test_clean_content() {
        let (_dir, ws) = workspace_with_content(&[("content/posts/good.md", GOOD_POST)]);
        let report = run(&ws).unwrap();
        assert!(report.is_clean(), "{:?}", report.issues);
        assert_eq!(report.posts, 1);
    }

    #[test]
    fn test_duplicate_slug_is_error() {
        let other = GOOD_POST.replace("title: Good", "title: Other");
        let (_dir, ws) = workspace_with_content(&[
            ("content/posts/good.md", GOOD_POST),
            ("content/posts/other.md", other.as_str()),
        ]);
        let report = run(&ws).unwrap();
        assert_eq!(report.error_count(), 1);
        assert!(report.issues[0].message.contains("duplicate slug"));
    }

    #[test]
    fn test_missing_title_is_error() {
        let (_dir, ws) = workspace_with_content(&[(
            "content/posts/x.md",
            "---\ndate: 2024-01-01\ntemplate: post\nslug: /x/\n---\n",
        )]);
        let report = run(&ws).unwrap();
        assert_eq!(report.error_count(), 1);
        assert!(report.issues[0].message.contains("`title`"));
    }

    #[test]
    fn test_invalid_date_is_error() {
        let (_dir, ws) = workspace_with_content(&[(
            "content/posts/x.md",
            "---\ntitle: X\ndate: someday\ntemplate: post\nslug: /x/\n---\n",
        )]);
        let report = run(&ws).unwrap();
        assert_eq!(report.error_count(), 1);
        assert!(report.issues[0].message.contains("invalid date"));
    }

    #[test]
    fn test_derived_slug_is_warning() {
        let (_dir, ws) = workspace_with_content(&[(
            "content/pages/about/index.md",
            "---\ntitle: About me\ntemplate: page\n---\nHi.\n",
        )]);
        let report = run(&ws).unwrap();
        assert_eq!(report.error_count(), 0);
        assert_eq!(report.warning_count(), 1);
        assert!(report.issues[0].message.contains("derived `about`"));
    }

    #[test]
    fn test_draft_on_page_is_warning() {
        let (_dir, ws) = workspace_with_content(&[(
            "content/pages/about.md",
            "---\ntitle: About\ntemplate: page\nslug: /about/\ndraft: true\n---\n",
        )]);
        let report = run(&ws).unwrap();
        assert_eq!(report.warning_count(), 1);
        assert!(report.issues[0].message.contains("no effect on pages"));
    }

    #[test]
    fn test_duplicate_tags_warning() {
        let post = "---\ntitle: T\ndate: 2024-01-01\ntemplate: post\nslug: /t/\ntags:\n  - rust\n  - rust\n---\n";
        let (_dir, ws) = workspace_with_content(&[("content/posts/t.md", post)]);
        let report = run(&ws).unwrap();
        assert_eq!(report.warning_count(), 1);
        assert!(report.issues[0].message.contains("duplicate tag"));
    }

    #[test]
    fn test_missing_image_is_warning() {
        let post = "---\ntitle: T\ndate: 2024-01-01\ntemplate: post\nslug: /t/\n---\n\
![gone](/media/gone.png)\n";
        let (_dir, ws) = workspace_with_content(&[("content/posts/t.md", post)]);
        let report = run(&ws).unwrap();
        assert_eq!(report.warning_count(), 1);
        assert!(report.issues[0].message.contains("gone.png"));
    }

    #[test]
    fn test_present_image_is_clean() {
        let post = "---\ntitle: T\ndate: 2024-01-01\ntemplate: post\nslug: /t/\n---\n\
![here](/media/here.png)\n";
        let (_dir, ws) = workspace_with_content(&[
            ("content/posts/t.md", post),
            ("media/here.png", "png"),
        ]);
        let report = run(&ws).unwrap();
        assert!(report.is_clean(), "{:?}", report.issues);
    }

    #[test]
    fn test_malformed_front_matter_is_error() {
        let (_dir, ws) = workspace_with_content(&[(
            "content/posts/x.md",
            "---\ntitle: X\ndraft: maybe\n---\n",
        )]);
        let report = run(&ws).unwrap();
        assert_eq!(report.error_count(), 1);
    }
}
