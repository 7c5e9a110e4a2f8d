//! Create a new post or page

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::DocumentKind;
use crate::Workspace;

/// Create a new document and return its path
pub fn create_document(
    workspace: &Workspace,
    title: &str,
    template: &str,
    draft: bool,
    path: Option<&str>,
) -> Result<PathBuf> {
    let now = chrono::Local::now();
    let slug = slug::slugify(title);

    let kind = DocumentKind::from_template(template)
        .ok_or_else(|| anyhow::anyhow!("Unknown template: {} (expected post or page)", template))?;

    let file_path = match kind {
        // Pages live in their own directory as index.md
        DocumentKind::Page => workspace.pages_dir.join(&slug).join("index.md"),
        DocumentKind::Post => {
            let filename = if let Some(p) = path {
                format!("{}.md", p)
            } else {
                workspace
                    .config
                    .new_post_name
                    .replace(":title", &slug)
                    .replace(":year", &now.format("%Y").to_string())
                    .replace(":month", &now.format("%m").to_string())
                    .replace(":day", &now.format("%d").to_string())
            };
            workspace.posts_dir.join(filename)
        }
    };

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    // Load scaffold template if the workspace provides one
    let scaffold_path = workspace
        .base_dir
        .join("scaffolds")
        .join(format!("{}.md", template));
    let scaffold_content = if scaffold_path.exists() {
        fs::read_to_string(&scaffold_path)?
    } else {
        default_scaffold(kind)
    };

    let content = scaffold_content
        .replace("{{ title }}", title)
        .replace("{{ date }}", &now.format("%Y-%m-%d %H:%M:%S").to_string())
        .replace("{{ slug }}", &format!("/{}/", slug))
        .replace("{{ draft }}", if draft { "true" } else { "false" });

    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;

    Ok(file_path)
}

fn default_scaffold(kind: DocumentKind) -> String {
    match kind {
        DocumentKind::Post => "---\n\
title: {{ title }}\n\
date: {{ date }}\n\
template: post\n\
draft: {{ draft }}\n\
slug: {{ slug }}\n\
category: \"\"\n\
tags: []\n\
description: \"\"\n\
---\n\n"
            .to_string(),
        DocumentKind::Page => "---\n\
title: {{ title }}\n\
template: page\n\
slug: {{ slug }}\n\
---\n\n"
            .to_string(),
    }
}

/// Run the new command
pub fn run(
    workspace: &Workspace,
    title: &str,
    template: Option<&str>,
    draft: bool,
    path: Option<&str>,
) -> Result<()> {
    let template = template.unwrap_or(&workspace.config.default_template);
    let file_path = create_document(workspace, title, template, draft, path)?;
    println!("Created: {:?}", file_path);
    Ok(())
}
