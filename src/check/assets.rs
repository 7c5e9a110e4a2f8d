//! Body image reference extraction
//!
//! Walks Markdown events to collect image destinations. The body is only
//! inspected, never rewritten.

use pulldown_cmark::{Event, Options, Parser, Tag};
use std::path::{Path, PathBuf};

/// Collect image destinations referenced by a Markdown body
pub fn image_refs(body: &str) -> Vec<String> {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_GFM;

    let mut refs = Vec::new();
    for event in Parser::new_ext(body, options) {
        if let Event::Start(Tag::Image { dest_url, .. }) = event {
            refs.push(dest_url.to_string());
        }
    }
    refs
}

/// Whether a reference points at a local asset this tool can resolve
pub fn is_local_ref(url: &str) -> bool {
    !(url.starts_with("http://")
        || url.starts_with("https://")
        || url.starts_with("//")
        || url.starts_with("data:")
        || url.starts_with("mailto:"))
}

/// Resolve a local reference against the workspace root and the media
/// directory. Site-absolute and `./`-relative forms both normalize to a
/// path under the root.
pub fn resolve_ref(url: &str, base_dir: &Path, media_dir: &Path) -> Option<PathBuf> {
    let normalized = url
        .trim_start_matches("./")
        .trim_start_matches('/')
        .split('?')
        .next()
        .unwrap_or_default();

    if normalized.is_empty() {
        return None;
    }

    let from_base = base_dir.join(normalized);
    if from_base.exists() {
        return Some(from_base);
    }

    let from_media = media_dir.join(normalized);
    if from_media.exists() {
        return Some(from_media);
    }

    None
}
