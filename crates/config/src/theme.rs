/// Theme-specific tuning values, e.g. `accent_color: "#dd0000"`.
///
/// The renderer's theme decides what each option means; values and their order are kept as
/// written.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ThemeOptions(serde_yaml::Mapping);

impl ThemeOptions {
    pub fn get(&self, name: &str) -> Option<&serde_yaml::Value> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&serde_yaml::Value, &serde_yaml::Value)> {
        self.0.iter()
    }
}

/// Themes shipped with the renderer.
pub const BUNDLED_THEMES: &[&str] = &[
    "boilerplate",
    "dark",
    "flat",
    "minimal5",
    "modern5",
    "responsive",
];

pub fn is_bundled_theme(name: &str) -> bool {
    BUNDLED_THEMES.contains(&name)
}
