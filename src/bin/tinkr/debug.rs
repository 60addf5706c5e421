use crate::args;
use crate::error::*;

#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum DebugCommands {
    /// Prints post-processed config
    Config {
        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },

    /// Prints values derived for the renderer
    Renderer {
        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },

    /// Prints files that take part in a build
    Files {
        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },

    /// Prints the sidebar widgets for a page
    Sidebar {
        /// Page name, e.g. `pages/about` or `2024/01/02/hello_world`
        page: String,

        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },
}

impl DebugCommands {
    pub(crate) fn run(&self) -> Result<()> {
        match self {
            Self::Config { config } => {
                let config = config.load_config()?;
                print!("{config}");
            }
            Self::Renderer { config } => {
                let config = config.load_config()?;
                let settings = serde_yaml::to_string(&config.renderer_settings())?;
                print!("{settings}");
            }
            Self::Files { config } => {
                let config = config.load_config()?;
                let source = tinkr_core::Source::from_config(&config)?;
                for path in source.iter() {
                    println!("{}", path.rel_path);
                }
            }
            Self::Sidebar { page, config } => {
                let config = config.load_config()?;
                match config.sidebar_widgets(page) {
                    Some(widgets) => {
                        for widget in widgets {
                            println!("{widget}");
                        }
                    }
                    None if config.html_sidebars.is_empty() => {
                        log::info!("No `html_sidebars` set, the theme decides")
                    }
                    None => log::info!("No sidebar pattern matches `{page}`, the theme decides"),
                }
            }
        }

        Ok(())
    }
}
