use std::fmt;
use std::path;

use liquid_core::model::KString;
use relative_path::RelativePathBuf;

use super::*;

pub const CONFIG_FILE_NAME: &str = "_tinkr.yml";
pub const BLOG_EXTENSION: &str = "tinkerer.ext.blog";

const DEFAULT_PROJECT: &str = "My blog";
const DEFAULT_THEME: &str = "flat";
const DEFAULT_FIRST_PAGE_TITLE: &str = "Home";

/// Settings for one blog, read once per invocation and never changed afterwards.
///
/// Every key may be omitted from the document; see the `Default` impl for what an omitted key
/// means.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct SiteConfig {
    #[serde(skip)]
    pub root: path::PathBuf,

    pub project: String,
    pub tagline: String,
    pub description: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_favicon: Option<RelativePathBuf>,
    pub html_theme: KString,
    pub html_theme_options: ThemeOptions,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rss_service: Option<String>,
    pub rss_generate_full_posts: bool,

    pub posts_per_page: PageSize,
    pub slug_word_separator: SlugSeparator,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_page_title: Option<String>,

    pub extensions: Vec<KString>,
    pub templates_path: Vec<SearchPath>,
    pub html_static_path: Vec<SearchPath>,
    pub html_theme_path: Vec<SearchPath>,
    pub exclude_patterns: Vec<KString>,
    pub html_sidebars: Sidebars,
    pub html_use_index: bool,
}

impl Default for SiteConfig {
    fn default() -> SiteConfig {
        SiteConfig {
            root: Default::default(),
            project: DEFAULT_PROJECT.to_owned(),
            tagline: Default::default(),
            description: Default::default(),
            author: Default::default(),
            copyright: None,
            website: None,
            html_favicon: None,
            html_theme: DEFAULT_THEME.into(),
            html_theme_options: Default::default(),
            rss_service: None,
            rss_generate_full_posts: false,
            posts_per_page: Default::default(),
            slug_word_separator: Default::default(),
            landing_page: None,
            first_page_title: None,
            extensions: vec![BLOG_EXTENSION.into()],
            templates_path: vec![SearchPath::local("_templates")],
            html_static_path: vec![SearchPath::local("_static"), SearchPath::Bundled],
            html_theme_path: vec![SearchPath::local("_themes"), SearchPath::Bundled],
            exclude_patterns: vec!["drafts/*".into(), "_templates/*".into()],
            html_sidebars: Default::default(),
            html_use_index: true,
        }
    }
}

impl SiteConfig {
    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<SiteConfig> {
        Self::from_file_internal(path.into())
    }

    fn from_file_internal(path: path::PathBuf) -> Result<SiteConfig> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Status::new("Failed to read config")
                .with_source(e)
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        let mut config = Self::from_document(&content).map_err(|e| {
            e.context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        let mut root = path;
        root.pop(); // Remove filename
        if root == path::Path::new("") {
            root = path::Path::new(".").to_owned();
        }
        config.root = root;

        Ok(config)
    }

    /// Parse a settings document.  A blank document yields the defaults.
    pub fn from_document(content: &str) -> Result<SiteConfig> {
        if content.trim().is_empty() {
            return Ok(SiteConfig::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| Status::new("Failed to parse config").with_source(e))
    }

    pub fn from_cwd<P: Into<path::PathBuf>>(cwd: P) -> Result<SiteConfig> {
        Self::from_cwd_internal(cwd.into())
    }

    fn from_cwd_internal(cwd: path::PathBuf) -> Result<SiteConfig> {
        let file_path = find_project_file(&cwd, CONFIG_FILE_NAME);
        let config = file_path
            .map(|p| {
                log::debug!("Using config file `{}`", p.display());
                Self::from_file(&p)
            })
            .unwrap_or_else(|| {
                log::warn!(
                    "No {CONFIG_FILE_NAME} file found in current directory, using default config."
                );
                let config = SiteConfig {
                    root: cwd,
                    ..Default::default()
                };
                Ok(config)
            })?;
        Ok(config)
    }

    /// The settings document for this record; loading it back gives an equal record.
    pub fn to_document(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| Status::new("Failed to serialize config").with_source(e))
    }

    /// The same settings, rooted at `root`.
    pub fn with_root<P: Into<path::PathBuf>>(self, root: P) -> SiteConfig {
        SiteConfig {
            root: root.into(),
            ..self
        }
    }

    /// Footer string, the author's name when not set explicitly.
    pub fn copyright(&self) -> &str {
        self.copyright.as_deref().unwrap_or(&self.author)
    }

    /// External relay the feed links point at.  `None` links the local feed directly.
    pub fn feed_relay(&self) -> Option<&str> {
        self.rss_service.as_deref()
    }

    /// Page under `pages/` used as the site root.  `None` makes the post listing the root.
    pub fn landing_page(&self) -> Option<&str> {
        self.landing_page.as_deref()
    }

    pub fn first_page_title(&self) -> &str {
        self.first_page_title
            .as_deref()
            .unwrap_or(DEFAULT_FIRST_PAGE_TITLE)
    }

    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions.iter().any(|e| e.as_str() == name)
    }

    pub fn slugify<S: AsRef<str>>(&self, title: S) -> String {
        crate::slugify(title, self.slug_word_separator)
    }

    pub fn sidebar_widgets(&self, page: &str) -> Option<&[KString]> {
        self.html_sidebars.widgets_for(page)
    }

    pub fn renderer_settings(&self) -> RendererSettings {
        RendererSettings::from_config(self)
    }
}

impl fmt::Display for SiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}

fn find_project_file<P: Into<path::PathBuf>>(dir: P, name: &str) -> Option<path::PathBuf> {
    find_project_file_internal(dir.into(), name)
}

fn find_project_file_internal(dir: path::PathBuf, name: &str) -> Option<path::PathBuf> {
    let mut file_path = dir;
    file_path.push(name);
    while !file_path.exists() {
        file_path.pop(); // filename
        let hit_bottom = !file_path.pop();
        if hit_bottom {
            return None;
        }
        file_path.push(name);
    }
    Some(file_path)
}
