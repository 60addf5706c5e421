use std::fmt;

use liquid_core::model::KString;

/// `html_sidebars`: page pattern to the ordered sidebar widgets shown on matching pages.
///
/// Declaration order is significant and preserved through load and save.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sidebars {
    entries: Vec<(KString, Vec<KString>)>,
}

impl Sidebars {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[KString])> {
        self.entries.iter().map(|(p, w)| (p.as_str(), w.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Widgets for the page named `page` (e.g. `2024/01/02/hello_world`).
    ///
    /// A pattern without wildcards naming the page exactly beats every wildcard pattern; among
    /// wildcard matches the one declared first wins.  `None` leaves the choice to the theme.
    pub fn widgets_for(&self, page: &str) -> Option<&[KString]> {
        let mut matched: Option<&(KString, Vec<KString>)> = None;
        for entry in &self.entries {
            let pattern = entry.0.as_str();
            if !pattern_matches(pattern, page) {
                continue;
            }
            if let Some((previous, _)) = matched {
                if has_wildcard(pattern) {
                    if has_wildcard(previous) {
                        log::warn!(
                            "page `{page}` matches sidebar patterns `{previous}` and `{pattern}`, using `{previous}`"
                        );
                    }
                    continue;
                }
            }
            matched = Some(entry);
        }
        matched.map(|(_, widgets)| widgets.as_slice())
    }
}

fn has_wildcard(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

fn pattern_matches(pattern: &str, page: &str) -> bool {
    if !has_wildcard(pattern) {
        return pattern == page;
    }
    match regex::Regex::new(&glob_to_regex(pattern)) {
        Ok(re) => re.is_match(page),
        Err(err) => {
            log::warn!("ignoring sidebar pattern `{pattern}`: {err}");
            false
        }
    }
}

/// Translate a page glob into an anchored regex.
///
/// `**` crosses `/`, `*` and `?` stay within one path segment, `[...]` is a character class with
/// `[!...]` negation.
fn glob_to_regex(pattern: &str) -> String {
    let mut re = String::from("^");
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' if chars.peek() == Some(&'*') => {
                chars.next();
                re.push_str(".*");
            }
            '*' => re.push_str("[^/]*"),
            '?' => re.push_str("[^/]"),
            '[' => {
                let mut class = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == ']' && !class.is_empty() {
                        closed = true;
                        break;
                    }
                    class.push(c);
                }
                if closed {
                    re.push('[');
                    if let Some(rest) = class.strip_prefix('!') {
                        re.push('^');
                        re.push_str(&rest.replace('\\', "\\\\"));
                    } else {
                        re.push_str(&class.replace('\\', "\\\\"));
                    }
                    re.push(']');
                } else {
                    re.push_str(&regex::escape("["));
                    re.push_str(&regex::escape(&class));
                }
            }
            c => re.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }
    re.push('$');
    re
}

impl serde::Serialize for Sidebars {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (pattern, widgets) in &self.entries {
            map.serialize_entry(pattern, widgets)?;
        }
        map.end()
    }
}

impl<'de> serde::Deserialize<'de> for Sidebars {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SidebarsVisitor)
    }
}

struct SidebarsVisitor;

impl<'de> serde::de::Visitor<'de> for SidebarsVisitor {
    type Value = Sidebars;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping of page patterns to lists of sidebar widgets")
    }

    fn visit_map<A: serde::de::MapAccess<'de>>(self, mut access: A) -> Result<Sidebars, A::Error> {
        let mut entries: Vec<(KString, Vec<KString>)> =
            Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((pattern, widgets)) = access.next_entry::<KString, Vec<KString>>()? {
            if entries.iter().any(|(p, _)| *p == pattern) {
                return Err(serde::de::Error::custom(format!(
                    "duplicate sidebar pattern `{pattern}`"
                )));
            }
            entries.push((pattern, widgets));
        }
        Ok(Sidebars { entries })
    }
}
