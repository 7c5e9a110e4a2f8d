//! Front-matter parsing
//!
//! The metadata block at the top of a content file, delimited by `---`
//! lines. Keys are case-sensitive; unrecognized keys are preserved in
//! `extra` but never interpreted. The body after the closing delimiter is
//! returned untouched.

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

use super::ContentError;

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_seq<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrSeq;

    impl<'de> Visitor<'de> for StringOrSeq {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrSeq)
}

/// Front-matter data from a post or page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub template: Option<String>,
    /// Documents are published unless marked as drafts
    pub draft: bool,
    pub slug: Option<String>,
    pub category: Option<String>,
    #[serde(deserialize_with = "string_or_seq", default)]
    pub tags: Vec<String>,
    pub description: Option<String>,
    #[serde(rename = "socialImage")]
    pub social_image: Option<String>,

    /// Additional custom fields, kept for forward compatibility
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_body)
    pub fn parse(content: &str) -> Result<(Self, &str), ContentError> {
        let trimmed = content.trim_start();

        // A file without an opening delimiter has no front-matter;
        // every field takes its default.
        if !trimmed.starts_with("---") {
            return Ok((FrontMatter::default(), content));
        }

        let rest = trimmed[3..].trim_start_matches(['\n', '\r']);

        // Empty block: `---` immediately followed by the closing delimiter
        if let Some(body) = rest.strip_prefix("---") {
            return Ok((
                FrontMatter::default(),
                body.trim_start_matches(['\n', '\r']),
            ));
        }

        let Some(end_pos) = rest.find("\n---") else {
            return Err(ContentError::UnterminatedFrontMatter);
        };

        let yaml_content = &rest[..end_pos];
        let body = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), body));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(yaml_content)?;
        Ok((fm, body))
    }

    /// Parse the date string into a DateTime
    pub fn parse_date(&self) -> Option<DateTime<Local>> {
        self.date.as_ref().and_then(|s| parse_date_string(s))
    }
}

/// Parse a date string in various formats
pub fn parse_date_string(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];

    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(DateTime::from_naive_utc_and_offset(
                dt,
                *Local::now().offset(),
            ));
        }
        // Try parsing date only
        if let Ok(d) = chrono::NaiveDate::parse_from_str(s, fmt) {
            let dt = d.and_hms_opt(0, 0, 0)?;
            return Some(DateTime::from_naive_utc_and_offset(
                dt,
                *Local::now().offset(),
            ));
        }
    }

    // RFC 3339 / ISO 8601 with offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_front_matter() {
        let content = r#"---
title: Build a CRUD API
date: 2024-01-15 10:30:00
template: post
draft: false
slug: /posts/build-a-crud-api/
category: Tutorials
tags:
  - rust
  - web
description: Step by step guide.
---

This is the content.
"#;

        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, Some("Build a CRUD API".to_string()));
        assert_eq!(fm.template, Some("post".to_string()));
        assert!(!fm.draft);
        assert_eq!(fm.slug, Some("/posts/build-a-crud-api/".to_string()));
        assert_eq!(fm.category, Some("Tutorials".to_string()));
        assert_eq!(fm.tags, vec!["rust", "web"]);
        assert_eq!(fm.description, Some("Step by step guide.".to_string()));
        assert!(body.contains("This is the content."));
    }

    #[test]
    fn test_defaults() {
        let content = "---\ntitle: Minimal\n---\nBody.\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert!(!fm.draft);
        assert!(fm.tags.is_empty());
        assert_eq!(fm.slug, None);
        assert_eq!(fm.category, None);
    }

    #[test]
    fn test_no_front_matter() {
        let content = "Just some markdown.\n";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, None);
        assert_eq!(body, content);
    }

    #[test]
    fn test_single_string_tags() {
        let content = "---\ntitle: One Tag\ntags: golang\n---\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.tags, vec!["golang"]);
    }

    #[test]
    fn test_unknown_keys_preserved() {
        let content = "---\ntitle: X\ncustomField: hello\n---\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(
            fm.extra.get("customField"),
            Some(&serde_yaml::Value::String("hello".to_string()))
        );
    }

    #[test]
    fn test_social_image_key() {
        let content = "---\ntitle: About me\ntemplate: page\nsocialImage: ./media/me.jpg\n---\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.social_image, Some("./media/me.jpg".to_string()));
    }

    #[test]
    fn test_unterminated_block() {
        let content = "---\ntitle: Broken\n\nNo closing delimiter here.\n";
        let err = FrontMatter::parse(content).unwrap_err();
        assert!(matches!(err, ContentError::UnterminatedFrontMatter));
    }

    #[test]
    fn test_non_boolean_draft_rejected() {
        let content = "---\ntitle: X\ndraft: maybe\n---\n";
        assert!(FrontMatter::parse(content).is_err());
    }

    #[test]
    fn test_parse_date() {
        let fm = FrontMatter {
            date: Some("2024-01-15 10:30:00".to_string()),
            ..Default::default()
        };
        let dt = fm.parse_date().unwrap();
        assert_eq!(dt.format("%Y-%m-%d").to_string(), "2024-01-15");
    }

    #[test]
    fn test_parse_date_rfc3339() {
        assert!(parse_date_string("2022-08-26T09:15:00+02:00").is_some());
        assert!(parse_date_string("not a date").is_none());
    }
}
