use std::fmt;

use itertools::Itertools;
use tinkr_config::{BLOG_EXTENSION, SearchPath, SiteConfig};

/// Extensions the renderer ships with.  Anything else has to be installed separately.
pub const KNOWN_EXTENSIONS: &[&str] = &[
    BLOG_EXTENSION,
    "sphinx.ext.autodoc",
    "sphinx.ext.autosectionlabel",
    "sphinx.ext.autosummary",
    "sphinx.ext.coverage",
    "sphinx.ext.doctest",
    "sphinx.ext.duration",
    "sphinx.ext.extlinks",
    "sphinx.ext.githubpages",
    "sphinx.ext.graphviz",
    "sphinx.ext.ifconfig",
    "sphinx.ext.imgconverter",
    "sphinx.ext.imgmath",
    "sphinx.ext.inheritance_diagram",
    "sphinx.ext.intersphinx",
    "sphinx.ext.linkcode",
    "sphinx.ext.mathjax",
    "sphinx.ext.napoleon",
    "sphinx.ext.todo",
    "sphinx.ext.viewcode",
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// A problem with one setting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub key: &'static str,
    pub message: String,
}

impl Diagnostic {
    fn error(key: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            key,
            message: message.into(),
        }
    }

    fn warning(key: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            key,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.key, self.message)
    }
}

/// Report settings the renderer would reject or trip over, relative to `config.root`.
pub fn check(config: &SiteConfig) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    check_website(config, &mut diagnostics);
    check_rss_service(config, &mut diagnostics);
    check_extensions(config, &mut diagnostics);
    check_theme(config, &mut diagnostics);
    check_search_paths("templates_path", &config.templates_path, config, &mut diagnostics);
    check_search_paths("html_static_path", &config.html_static_path, config, &mut diagnostics);
    check_search_paths("html_theme_path", &config.html_theme_path, config, &mut diagnostics);
    check_favicon(config, &mut diagnostics);
    check_landing_page(config, &mut diagnostics);
    check_exclude_patterns(config, &mut diagnostics);
    for diagnostic in &diagnostics {
        log::debug!("{diagnostic}");
    }
    diagnostics
}

fn check_website(config: &SiteConfig, diagnostics: &mut Vec<Diagnostic>) {
    let Some(website) = config.website.as_deref() else {
        diagnostics.push(Diagnostic::error(
            "website",
            "not set; feed entries need an absolute base URL",
        ));
        return;
    };
    match url::Url::parse(website) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            if !website.ends_with('/') {
                diagnostics.push(Diagnostic::warning(
                    "website",
                    format!("`{website}` should end with `/` so page links join onto it"),
                ));
            }
        }
        Ok(url) => diagnostics.push(Diagnostic::error(
            "website",
            format!("`{website}` uses unsupported scheme `{}`", url.scheme()),
        )),
        Err(err) => diagnostics.push(Diagnostic::error(
            "website",
            format!("`{website}` is not an absolute URL: {err}"),
        )),
    }
}

fn check_rss_service(config: &SiteConfig, diagnostics: &mut Vec<Diagnostic>) {
    if let Some(service) = config.feed_relay() {
        if let Err(err) = url::Url::parse(service) {
            diagnostics.push(Diagnostic::warning(
                "rss_service",
                format!("`{service}` is not a URL: {err}"),
            ));
        }
    }
}

fn check_extensions(config: &SiteConfig, diagnostics: &mut Vec<Diagnostic>) {
    if !config.has_extension(BLOG_EXTENSION) {
        diagnostics.push(Diagnostic::error(
            "extensions",
            format!("`{BLOG_EXTENSION}` is required to build a blog"),
        ));
    }
    for extension in &config.extensions {
        if !KNOWN_EXTENSIONS.contains(&extension.as_str()) {
            diagnostics.push(Diagnostic::warning(
                "extensions",
                format!("`{extension}` does not ship with the renderer; make sure it is installed"),
            ));
        }
    }
    for extension in config.extensions.iter().duplicates() {
        diagnostics.push(Diagnostic::warning(
            "extensions",
            format!("`{extension}` is listed more than once"),
        ));
    }
}

fn check_theme(config: &SiteConfig, diagnostics: &mut Vec<Diagnostic>) {
    let theme = config.html_theme.as_str();
    let bundled = config.html_theme_path.iter().any(SearchPath::is_bundled)
        && tinkr_config::is_bundled_theme(theme);
    let local = config
        .html_theme_path
        .iter()
        .filter_map(|p| p.resolve(&config.root))
        .any(|dir| dir.join(theme).is_dir());
    if !bundled && !local {
        diagnostics.push(Diagnostic::warning(
            "html_theme",
            format!("theme `{theme}` was not found in any `html_theme_path` entry"),
        ));
    }
}

fn check_search_paths(
    key: &'static str,
    paths: &[SearchPath],
    config: &SiteConfig,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for path in paths {
        if let Some(dir) = path.resolve(&config.root) {
            if !dir.is_dir() {
                diagnostics.push(Diagnostic::warning(
                    key,
                    format!("directory `{path}` does not exist"),
                ));
            }
        }
    }
}

fn check_favicon(config: &SiteConfig, diagnostics: &mut Vec<Diagnostic>) {
    if let Some(favicon) = &config.html_favicon {
        if !favicon.to_path(&config.root).is_file() {
            diagnostics.push(Diagnostic::warning(
                "html_favicon",
                format!("file `{favicon}` does not exist"),
            ));
        }
    }
}

fn check_landing_page(config: &SiteConfig, diagnostics: &mut Vec<Diagnostic>) {
    if let Some(page) = config.landing_page() {
        let file = config
            .root
            .join("pages")
            .join(format!("{page}{}", tinkr_config::SOURCE_SUFFIX));
        if !file.is_file() {
            diagnostics.push(Diagnostic::warning(
                "landing_page",
                format!("`{page}` has no `pages/{page}{}`", tinkr_config::SOURCE_SUFFIX),
            ));
        }
    }
}

fn check_exclude_patterns(config: &SiteConfig, diagnostics: &mut Vec<Diagnostic>) {
    for pattern in &config.exclude_patterns {
        if let Err(err) = tinkr_core::Source::new(&config.root, [pattern.as_str()]) {
            diagnostics.push(Diagnostic::error(
                "exclude_patterns",
                format!("`{pattern}` is not a valid pattern: {err}"),
            ));
        } else if !pattern.contains('/') {
            diagnostics.push(Diagnostic::warning(
                "exclude_patterns",
                format!(
                    "`{pattern}` excludes matching files in every directory, the renderer only at the top; write `/{pattern}` to match the renderer"
                ),
            ));
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn blog(files: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for file in files {
            let path = dir.path().join(file);
            if file.ends_with('/') {
                std::fs::create_dir_all(&path).unwrap();
            } else {
                std::fs::create_dir_all(path.parent().unwrap()).unwrap();
                std::fs::write(&path, "").unwrap();
            }
        }
        dir
    }

    fn load(dir: &tempfile::TempDir, document: &str) -> SiteConfig {
        SiteConfig::from_document(document)
            .unwrap()
            .with_root(dir.path())
    }

    fn keys(diagnostics: &[Diagnostic]) -> Vec<(Severity, &'static str)> {
        diagnostics.iter().map(|d| (d.severity, d.key)).collect()
    }

    #[test]
    fn scaffolded_blog_is_clean() {
        let dir = blog(&["_templates/", "_static/", "_themes/"]);
        let config = load(&dir, "website: http://example.com/blog/");
        assert_eq!(check(&config), Vec::<Diagnostic>::new());
    }

    #[test]
    fn missing_website_is_an_error() {
        let dir = blog(&["_templates/", "_static/", "_themes/"]);
        let config = load(&dir, "project: Notes");
        assert_eq!(keys(&check(&config)), [(Severity::Error, "website")]);
    }

    #[test]
    fn website_must_be_http() {
        let dir = blog(&["_templates/", "_static/", "_themes/"]);
        let config = load(&dir, "website: ftp://example.com/");
        assert_eq!(keys(&check(&config)), [(Severity::Error, "website")]);
        let config = load(&dir, "website: example.com/blog/");
        assert_eq!(keys(&check(&config)), [(Severity::Error, "website")]);
        let config = load(&dir, "website: http://example.com/blog");
        assert_eq!(keys(&check(&config)), [(Severity::Warning, "website")]);
    }

    #[test]
    fn blog_extension_required() {
        let dir = blog(&["_templates/", "_static/", "_themes/"]);
        let config = load(
            &dir,
            "website: http://example.com/\nextensions: [sphinx.ext.mathjax]",
        );
        assert_eq!(keys(&check(&config)), [(Severity::Error, "extensions")]);
    }

    #[test]
    fn unknown_and_repeated_extensions_warn() {
        let dir = blog(&["_templates/", "_static/", "_themes/"]);
        let config = load(
            &dir,
            "website: http://example.com/
extensions: [tinkerer.ext.blog, acme.ext.gallery, tinkerer.ext.blog]",
        );
        let diagnostics = check(&config);
        assert_eq!(
            keys(&diagnostics),
            [
                (Severity::Warning, "extensions"),
                (Severity::Warning, "extensions")
            ]
        );
        assert!(diagnostics[0].message.contains("acme.ext.gallery"));
        assert!(diagnostics[1].message.contains("more than once"));
    }

    #[test]
    fn local_theme_found() {
        let dir = blog(&["_templates/", "_static/", "_themes/solarized/theme.conf"]);
        let config = load(
            &dir,
            "website: http://example.com/\nhtml_theme: solarized\nhtml_theme_path: [_themes]",
        );
        assert_eq!(check(&config), Vec::<Diagnostic>::new());
        let config = load(
            &dir,
            "website: http://example.com/\nhtml_theme: flat\nhtml_theme_path: [_themes]",
        );
        assert_eq!(keys(&check(&config)), [(Severity::Warning, "html_theme")]);
    }

    #[test]
    fn missing_directories_warn() {
        let dir = blog(&[]);
        let config = load(&dir, "website: http://example.com/\nhtml_favicon: _static/x.ico");
        assert_eq!(
            keys(&check(&config)),
            [
                (Severity::Warning, "templates_path"),
                (Severity::Warning, "html_static_path"),
                (Severity::Warning, "html_theme_path"),
                (Severity::Warning, "html_favicon"),
            ]
        );
    }

    #[test]
    fn landing_page_must_exist() {
        let dir = blog(&["_templates/", "_static/", "_themes/", "pages/about.rst"]);
        let config = load(&dir, "website: http://example.com/\nlanding_page: about");
        assert_eq!(check(&config), Vec::<Diagnostic>::new());
        let config = load(&dir, "website: http://example.com/\nlanding_page: contact");
        assert_eq!(keys(&check(&config)), [(Severity::Warning, "landing_page")]);
    }

    #[test]
    fn invalid_exclude_pattern_is_an_error() {
        let dir = blog(&["_templates/", "_static/", "_themes/"]);
        let config = load(&dir, "website: http://example.com/\nexclude_patterns: ['a[b']");
        assert_eq!(keys(&check(&config)), [(Severity::Error, "exclude_patterns")]);
    }

    #[test]
    fn unanchored_exclude_pattern_warns() {
        let dir = blog(&["_templates/", "_static/", "_themes/"]);
        let config = load(
            &dir,
            "website: http://example.com/\nexclude_patterns: ['*.txt', '/*.bak', 'drafts/*']",
        );
        let diagnostics = check(&config);
        assert_eq!(keys(&diagnostics), [(Severity::Warning, "exclude_patterns")]);
        assert!(diagnostics[0].message.contains("`/*.txt`"));
    }
}
