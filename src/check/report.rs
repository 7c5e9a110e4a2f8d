//! Check report types

use serde::Serialize;
use std::fmt;

/// Issue severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single finding against a content file
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    pub severity: Severity,
    /// Source file path relative to the content directory
    pub source: String,
    pub message: String,
}

impl Issue {
    pub fn error(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            source: source.into(),
            message: message.into(),
        }
    }

    pub fn warning(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            source: source.into(),
            message: message.into(),
        }
    }
}

/// The outcome of a full content check
#[derive(Debug, Default, Serialize)]
pub struct Report {
    /// Post files checked
    pub posts: usize,
    /// Page files checked
    pub pages: usize,
    pub issues: Vec<Issue>,
}

impl Report {
    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Human-readable rendering, one line per issue plus a summary
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for issue in &self.issues {
            out.push_str(&format!(
                "{:7} {}: {}\n",
                issue.severity, issue.source, issue.message
            ));
        }
        out.push_str(&format!(
            "{} posts, {} pages checked: {} error(s), {} warning(s)\n",
            self.posts,
            self.pages,
            self.error_count(),
            self.warning_count()
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let mut report = Report::default();
        report.push(Issue::error("a.md", "boom"));
        report.push(Issue::warning("b.md", "hmm"));
        report.push(Issue::warning("c.md", "hmm"));
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 2);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_render_text() {
        let mut report = Report::default();
        report.posts = 2;
        report.push(Issue::error("posts/x.md", "missing required field `title`"));
        let text = report.render_text();
        assert!(text.contains("error"));
        assert!(text.contains("posts/x.md"));
        assert!(text.contains("1 error(s)"));
    }

    #[test]
    fn test_json_shape() {
        let mut report = Report::default();
        report.push(Issue::warning("a.md", "w"));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["issues"][0]["severity"], "warning");
    }
}
