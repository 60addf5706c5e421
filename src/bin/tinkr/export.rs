use std::path;

use anyhow::Context as _;

use crate::args;
use crate::error::*;

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ExportArgs {
    /// Output file, `-` for stdout [default: conf.py next to the config]
    #[arg(short, long, value_name = "FILE")]
    output: Option<path::PathBuf>,

    #[command(flatten, next_help_heading = "Config")]
    config: args::ConfigArgs,
}

impl ExportArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let config = self.config.load_config()?;
        let rendered = tinkr::render_conf_py(&config)?;

        let output = self
            .output
            .clone()
            .unwrap_or_else(|| config.root.join("conf.py"));
        if output == path::Path::new("-") {
            print!("{rendered}");
        } else {
            std::fs::write(&output, rendered)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            log::info!("Wrote {}", output.display());
        }

        Ok(())
    }
}
