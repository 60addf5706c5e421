use super::*;

pub const MASTER_DOC: &str = "master";
pub const SOURCE_SUFFIX: &str = ".rst";

/// Values the renderer needs that are derived from the configuration rather than written in it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct RendererSettings {
    pub html_title: String,
    pub master_doc: &'static str,
    pub source_suffix: &'static str,
    pub html_show_sourcelink: bool,
    pub html_add_permalinks: &'static str,
}

impl RendererSettings {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            html_title: config.project.clone(),
            master_doc: MASTER_DOC,
            source_suffix: SOURCE_SUFFIX,
            html_show_sourcelink: false,
            html_add_permalinks: "",
        }
    }
}
