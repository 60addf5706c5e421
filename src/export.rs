use liquid::model::Value;
use tinkr_config::{SearchPath, Sidebars, SiteConfig, ThemeOptions};

use crate::error::*;

const CONF_PY: &str = r#"# -*- coding: utf-8 -*-
# Generated by tinkr from {{ source }}. Edit that file and export again.

# flake8: noqa

import tinkerer
import tinkerer.paths

project = {{ project }}
tagline = {{ tagline }}
description = {{ description }}
author = {{ author }}
copyright = {{ copyright }}
website = {{ website }}

html_favicon = {{ html_favicon }}
html_theme = {{ html_theme }}
html_theme_options = {{ html_theme_options }}

rss_service = {{ rss_service }}
rss_generate_full_posts = {{ rss_generate_full_posts }}

posts_per_page = {{ posts_per_page }}
slug_word_separator = {{ slug_word_separator }}
landing_page = {{ landing_page }}
first_page_title = {{ first_page_title }}

extensions = {{ extensions }}
templates_path = {{ templates_path }}
html_static_path = {{ html_static_path }}
html_theme_path = {{ html_theme_path }}
exclude_patterns = {{ exclude_patterns }}
html_sidebars = {{ html_sidebars }}
html_use_index = {{ html_use_index }}

# Required by the renderer; not settings.
source_suffix = {{ source_suffix }}
master_doc = {{ master_doc }}
version = tinkerer.__version__
release = tinkerer.__version__
html_title = {{ html_title }}
html_show_sourcelink = {{ html_show_sourcelink }}
html_add_permalinks = {{ html_add_permalinks }}
"#;

/// Render `config` as the `conf.py` the renderer loads.
pub fn render_conf_py(config: &SiteConfig) -> Result<String> {
    let parser = liquid::ParserBuilder::with_stdlib().build()?;
    let template = parser.parse(CONF_PY)?;
    let globals = conf_py_globals(config);
    let rendered = template.render(&globals)?;
    Ok(rendered)
}

fn conf_py_globals(config: &SiteConfig) -> liquid::Object {
    let settings = config.renderer_settings();
    let source = config.root.join(tinkr_config::CONFIG_FILE_NAME);
    let entries = [
        ("source", source.display().to_string()),
        ("project", py_str(&config.project)),
        ("tagline", py_str(&config.tagline)),
        ("description", py_str(&config.description)),
        ("author", py_str(&config.author)),
        ("copyright", py_str(config.copyright())),
        ("website", py_opt_str(config.website.as_deref())),
        (
            "html_favicon",
            py_opt_str(config.html_favicon.as_ref().map(|p| p.as_str())),
        ),
        ("html_theme", py_str(&config.html_theme)),
        (
            "html_theme_options",
            py_theme_options(&config.html_theme_options),
        ),
        ("rss_service", py_opt_str(config.feed_relay())),
        (
            "rss_generate_full_posts",
            py_bool(config.rss_generate_full_posts),
        ),
        ("posts_per_page", config.posts_per_page.get().to_string()),
        (
            "slug_word_separator",
            py_str(&config.slug_word_separator.to_string()),
        ),
        ("landing_page", py_opt_str(config.landing_page())),
        (
            "first_page_title",
            py_opt_str(config.first_page_title.as_deref()),
        ),
        (
            "extensions",
            py_list(config.extensions.iter().map(|e| py_str(e))),
        ),
        (
            "templates_path",
            py_search_paths(&config.templates_path, "templates"),
        ),
        (
            "html_static_path",
            py_search_paths(&config.html_static_path, "static"),
        ),
        (
            "html_theme_path",
            py_search_paths(&config.html_theme_path, "themes"),
        ),
        (
            "exclude_patterns",
            py_list(config.exclude_patterns.iter().map(|p| py_str(p))),
        ),
        ("html_sidebars", py_sidebars(&config.html_sidebars)),
        ("html_use_index", py_bool(config.html_use_index)),
        ("source_suffix", py_str(settings.source_suffix)),
        ("master_doc", py_str(settings.master_doc)),
        ("html_title", py_str(&settings.html_title)),
        ("html_show_sourcelink", py_bool(settings.html_show_sourcelink)),
        ("html_add_permalinks", py_str(settings.html_add_permalinks)),
    ];

    let mut globals = liquid::Object::new();
    for (key, literal) in entries {
        globals.insert(key.into(), Value::scalar(literal));
    }
    globals
}

/// Single-quoted string literal.
fn py_str(s: &str) -> String {
    let mut literal = String::with_capacity(s.len() + 2);
    literal.push('\'');
    for c in s.chars() {
        match c {
            '\\' => literal.push_str("\\\\"),
            '\'' => literal.push_str("\\'"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            c if c.is_control() => literal.push_str(&format!("\\x{:02x}", u32::from(c))),
            c => literal.push(c),
        }
    }
    literal.push('\'');
    literal
}

fn py_opt_str(s: Option<&str>) -> String {
    s.map(py_str).unwrap_or_else(|| "None".to_owned())
}

fn py_bool(b: bool) -> String {
    let literal = if b { "True" } else { "False" };
    literal.to_owned()
}

fn py_list(items: impl Iterator<Item = String>) -> String {
    let items: Vec<String> = items.collect();
    format!("[{}]", items.join(", "))
}

fn py_search_paths(paths: &[SearchPath], kind: &str) -> String {
    py_list(paths.iter().map(|path| match path {
        SearchPath::Local(rel) => py_str(rel.as_str()),
        SearchPath::Bundled => format!("tinkerer.paths.{kind}"),
    }))
}

fn py_sidebars(sidebars: &Sidebars) -> String {
    let entries: Vec<String> = sidebars
        .iter()
        .map(|(pattern, widgets)| {
            format!(
                "{}: {}",
                py_str(pattern),
                py_list(widgets.iter().map(|w| py_str(w)))
            )
        })
        .collect();
    format!("{{{}}}", entries.join(", "))
}

fn py_theme_options(options: &ThemeOptions) -> String {
    let entries: Vec<String> = options
        .iter()
        .map(|(name, value)| format!("{}: {}", py_yaml(name), py_yaml(value)))
        .collect();
    format!("{{{}}}", entries.join(", "))
}

fn py_yaml(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::Null => "None".to_owned(),
        serde_yaml::Value::Bool(b) => py_bool(*b),
        serde_yaml::Value::Number(n) => py_number(n),
        serde_yaml::Value::String(s) => py_str(s),
        serde_yaml::Value::Sequence(items) => py_list(items.iter().map(py_yaml)),
        serde_yaml::Value::Mapping(mapping) => {
            let entries: Vec<String> = mapping
                .iter()
                .map(|(k, v)| format!("{}: {}", py_yaml(k), py_yaml(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        serde_yaml::Value::Tagged(tagged) => py_yaml(&tagged.value),
    }
}

fn py_number(n: &serde_yaml::Number) -> String {
    if n.is_nan() {
        "float('nan')".to_owned()
    } else if n.is_infinite() {
        let sign = if n.as_f64().is_some_and(|f| f < 0.0) { "-" } else { "" };
        format!("float('{sign}inf')")
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn line<'r>(rendered: &'r str, key: &str) -> &'r str {
        let prefix = format!("{key} = ");
        rendered
            .lines()
            .find_map(|l| l.strip_prefix(prefix.as_str()))
            .unwrap_or_else(|| panic!("no `{key}` in:\n{rendered}"))
    }

    #[test]
    fn renders_defaults() {
        let rendered = render_conf_py(&SiteConfig::default()).unwrap();
        assert_eq!(line(&rendered, "project"), "'My blog'");
        assert_eq!(line(&rendered, "website"), "None");
        assert_eq!(line(&rendered, "rss_service"), "None");
        assert_eq!(line(&rendered, "rss_generate_full_posts"), "False");
        assert_eq!(line(&rendered, "html_use_index"), "True");
        assert_eq!(line(&rendered, "posts_per_page"), "10");
        assert_eq!(line(&rendered, "slug_word_separator"), "'_'");
        assert_eq!(line(&rendered, "extensions"), "['tinkerer.ext.blog']");
        assert_eq!(
            line(&rendered, "html_static_path"),
            "['_static', tinkerer.paths.static]"
        );
        assert_eq!(
            line(&rendered, "html_theme_path"),
            "['_themes', tinkerer.paths.themes]"
        );
        assert_eq!(line(&rendered, "html_sidebars"), "{}");
        assert_eq!(line(&rendered, "html_title"), "'My blog'");
        assert_eq!(line(&rendered, "master_doc"), "'master'");
        assert_eq!(line(&rendered, "html_add_permalinks"), "''");
    }

    #[test]
    fn renders_document_values() {
        let config = SiteConfig::from_document(
            r#"
description: "Vlad's Tech Blog"
author: Vlad
html_theme_options:
  accent_color: '#dd0000'
extensions: [tinkerer.ext.blog, sphinx.ext.mathjax]
html_sidebars:
  '**': []
"#,
        )
        .unwrap();
        let rendered = render_conf_py(&config).unwrap();
        assert_eq!(line(&rendered, "description"), r"'Vlad\'s Tech Blog'");
        assert_eq!(line(&rendered, "copyright"), "'Vlad'");
        assert_eq!(
            line(&rendered, "html_theme_options"),
            "{'accent_color': '#dd0000'}"
        );
        assert_eq!(
            line(&rendered, "extensions"),
            "['tinkerer.ext.blog', 'sphinx.ext.mathjax']"
        );
        assert_eq!(line(&rendered, "html_sidebars"), "{'**': []}");
    }

    #[test]
    fn string_escapes() {
        assert_eq!(py_str(r"a\b"), r"'a\\b'");
        assert_eq!(py_str("one\ntwo"), r"'one\ntwo'");
        assert_eq!(py_str("Rișcuția"), "'Rișcuția'");
        assert_eq!(py_str("nul\0bell\u{7}"), r"'nul\x00bell\x07'");
        assert_eq!(py_str("\u{85}"), r"'\x85'");
    }

    #[test]
    fn yaml_values() {
        let value: serde_yaml::Value = serde_yaml::from_str("[1, true, ~, {a: b}]").unwrap();
        assert_eq!(py_yaml(&value), "[1, True, None, {'a': 'b'}]");
    }

    #[test]
    fn non_finite_floats() {
        let value: serde_yaml::Value = serde_yaml::from_str("[.inf, -.inf, .nan, 1.5]").unwrap();
        assert_eq!(
            py_yaml(&value),
            "[float('inf'), float('-inf'), float('nan'), 1.5]"
        );
    }
}
