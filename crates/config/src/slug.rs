use std::fmt;

static SLUG_INVALID_CHARS: once_cell::sync::Lazy<regex::Regex> =
    once_cell::sync::Lazy::new(|| regex::Regex::new(r"[\W_]+").unwrap());

const DEFAULT_SEPARATOR: char = '_';

/// Character substituted for every run of non-alphanumeric characters in a slug.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SlugSeparator(char);

impl SlugSeparator {
    pub fn new(separator: char) -> Option<Self> {
        (!separator.is_control()).then_some(Self(separator))
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl Default for SlugSeparator {
    fn default() -> Self {
        Self(DEFAULT_SEPARATOR)
    }
}

impl TryFrom<String> for SlugSeparator {
    type Error = InvalidSeparator;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c).ok_or(InvalidSeparator(value)),
            _ => Err(InvalidSeparator(value)),
        }
    }
}

impl From<SlugSeparator> for String {
    fn from(separator: SlugSeparator) -> Self {
        separator.0.to_string()
    }
}

impl fmt::Display for SlugSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidSeparator(String);

impl fmt::Display for InvalidSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "slug word separator must be a single printable character, got {:?}",
            self.0
        )
    }
}

impl std::error::Error for InvalidSeparator {}

/// Create a URL slug for a post or page title.
///
/// Runs of characters that are not letters or digits (underscores included) collapse into a
/// single `separator`, the result is lowercased and stray separators are trimmed from both ends.
/// Non-ASCII letters are kept as-is.
pub fn slugify<S: AsRef<str>>(title: S, separator: SlugSeparator) -> String {
    slugify_str(title.as_ref(), separator.as_char())
}

fn slugify_str(title: &str, separator: char) -> String {
    let mut buf = [0; 4];
    let replacement = separator.encode_utf8(&mut buf);
    let title = title.to_lowercase();
    let slug = SLUG_INVALID_CHARS.replace_all(&title, &*replacement);
    slug.trim_matches(separator).to_owned()
}
