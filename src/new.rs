use std::fs;
use std::io::Write;
use std::path;

use anyhow::Context as _;

use crate::error::*;

const TINKR_YML: &str = "\
# Name of the blog
project: My blog

# Short subtitle shown under the title
tagline: Add intelligent tagline here

# Used in page metadata and the feed description
description: ''

# Your name; also the copyright line unless `copyright` is set
author: Winston Smith

# Blog root URL, required for absolute links in the feed
website: http://127.0.0.1/blog/html/

# Favicon, relative to the blog root
html_favicon: _static/tinkerer.ico

# Theme and its options, see the theme's documentation
html_theme: flat
html_theme_options:
  accent_color: '#dd0000'

# Feed relay such as FeedBurner; leave unset to link the feed directly
# rss_service: https://feeds.feedburner.com/myblog

# Put whole posts in the feed even when they use \"read more\"
rss_generate_full_posts: false

posts_per_page: 10

# Replaces runs of non-alphanumeric characters when deriving slugs
slug_word_separator: '-'

# Page under pages/ to use as the site root, e.g. `about` for pages/about.rst
# landing_page: about

# Label of the first page, `Home` when unset
# first_page_title: Home

extensions:
  - tinkerer.ext.blog
  - sphinx.ext.mathjax

# `@bundled` is the renderer's own directory of that kind
templates_path:
  - _templates
html_static_path:
  - _static
  - '@bundled'
html_theme_path:
  - _themes
  - '@bundled'

exclude_patterns:
  - drafts/*
  - _templates/*

html_sidebars:
  '**':
    - recent.html
    - searchbox.html

html_use_index: false
";

const PROJECT_DIRS: &[&str] = &["_static", "_templates", "_themes", "drafts", "pages"];

pub fn create_new_project<P: AsRef<path::Path>>(dest: P) -> Result<()> {
    create_new_project_for_path(dest.as_ref())
}

pub fn create_new_project_for_path(dest: &path::Path) -> Result<()> {
    fs::create_dir_all(dest)
        .with_context(|| format!("Could not create directory {}", dest.display()))?;

    create_file(&dest.join(tinkr_config::CONFIG_FILE_NAME), TINKR_YML)?;

    for dir in PROJECT_DIRS {
        fs::create_dir_all(dest.join(dir))?;
    }

    Ok(())
}

fn create_file<P: AsRef<path::Path>>(path: P, content: &str) -> Result<()> {
    create_file_for_path(path.as_ref(), content)
}

fn create_file_for_path(path: &path::Path, content: &str) -> Result<()> {
    log::trace!("Creating file {}", path.display());

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .with_context(|| format!("Failed to create file {}", path.display()))?;

    file.write_all(content.as_bytes())?;

    Ok(())
}
