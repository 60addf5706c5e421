use std::fmt;
use std::path;

use relative_path::RelativePathBuf;

/// Document token standing for the renderer's own directory of a given kind.
pub const BUNDLED_TOKEN: &str = "@bundled";

/// An entry in `templates_path`, `html_static_path` or `html_theme_path`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SearchPath {
    /// Directory relative to the blog root.
    Local(RelativePathBuf),
    /// Directory shipped with the renderer itself.
    Bundled,
}

impl SearchPath {
    pub fn local<P: Into<RelativePathBuf>>(path: P) -> Self {
        Self::Local(path.into())
    }

    pub fn is_bundled(&self) -> bool {
        matches!(self, Self::Bundled)
    }

    /// Absolute location under `root`, `None` for the renderer's bundled directory.
    pub fn resolve(&self, root: &path::Path) -> Option<path::PathBuf> {
        match self {
            Self::Local(rel) => Some(rel.to_path(root)),
            Self::Bundled => None,
        }
    }
}

impl From<String> for SearchPath {
    fn from(value: String) -> Self {
        if value == BUNDLED_TOKEN {
            Self::Bundled
        } else {
            Self::Local(RelativePathBuf::from(value))
        }
    }
}

impl From<&str> for SearchPath {
    fn from(value: &str) -> Self {
        value.to_owned().into()
    }
}

impl From<SearchPath> for String {
    fn from(path: SearchPath) -> Self {
        match path {
            SearchPath::Local(rel) => rel.into_string(),
            SearchPath::Bundled => BUNDLED_TOKEN.to_owned(),
        }
    }
}

impl fmt::Display for SearchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(rel) => write!(f, "{rel}"),
            Self::Bundled => f.write_str(BUNDLED_TOKEN),
        }
    }
}
