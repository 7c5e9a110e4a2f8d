//! Initialize a new content workspace

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::Workspace;

/// Initialize a content workspace in the given directory
pub fn init_workspace(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("content/posts"))?;
    fs::create_dir_all(target_dir.join("content/pages"))?;
    fs::create_dir_all(target_dir.join("media"))?;
    fs::create_dir_all(target_dir.join("scaffolds"))?;

    let config_content = r#"# Site
title: My Blog
description: ''
author: ''

# URL
url: http://example.com
root: /

# Directory
content_dir: content
posts_dir: posts
pages_dir: pages
media_dir: media
exclude: []

# Writing
include_drafts: false
new_post_name: :title.md
default_template: post

# Date format for listings
date_format: '%Y-%m-%d'
"#;

    fs::write(target_dir.join("_config.yml"), config_content)?;

    let post_scaffold = r#"---
title: {{ title }}
date: {{ date }}
template: post
draft: {{ draft }}
slug: {{ slug }}
category: ""
tags: []
description: ""
---

"#;

    let page_scaffold = r#"---
title: {{ title }}
template: page
slug: {{ slug }}
---

"#;

    fs::write(target_dir.join("scaffolds/post.md"), post_scaffold)?;
    fs::write(target_dir.join("scaffolds/page.md"), page_scaffold)?;

    // Starter content
    let now = chrono::Local::now();
    let hello_post = format!(
        r#"---
title: Hello World
date: {}
template: post
draft: false
slug: /posts/hello-world/
category: General
tags:
  - meta
description: The first post.
---

Welcome to your new blog. Create a post with:

```bash
$ inkpress new "My New Post"
```

Check your content before publishing:

```bash
$ inkpress check
```
"#,
        now.format("%Y-%m-%d %H:%M:%S")
    );

    fs::write(target_dir.join("content/posts/hello-world.md"), hello_post)?;

    let about_page = r#"---
title: About me
template: page
slug: /about/
---

A few words about the author.
"#;

    fs::create_dir_all(target_dir.join("content/pages/about"))?;
    fs::write(target_dir.join("content/pages/about/index.md"), about_page)?;

    Ok(())
}

/// Run the init command for an existing workspace
pub fn run(workspace: &Workspace) -> Result<()> {
    init_workspace(&workspace.base_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check;

    #[test]
    fn test_init_produces_clean_content() {
        let dir = tempfile::tempdir().unwrap();
        init_workspace(dir.path()).unwrap();

        assert!(dir.path().join("_config.yml").exists());
        assert!(dir.path().join("content/posts/hello-world.md").exists());
        assert!(dir.path().join("content/pages/about/index.md").exists());

        let ws = Workspace::new(dir.path()).unwrap();
        let report = check::run(&ws).unwrap();
        assert!(report.is_clean(), "{:?}", report.issues);
        assert_eq!(report.posts, 1);
        assert_eq!(report.pages, 1);
    }
}
