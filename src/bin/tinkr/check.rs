use crate::args;
use crate::error::*;

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct CheckArgs {
    /// Treat warnings as errors
    #[arg(long)]
    strict: bool,

    #[command(flatten, next_help_heading = "Config")]
    config: args::ConfigArgs,
}

impl CheckArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let config = self.config.load_config()?;
        let diagnostics = tinkr::check(&config);
        for diagnostic in &diagnostics {
            println!("{diagnostic}");
        }

        let errors = diagnostics
            .iter()
            .filter(|d| d.is_error() || self.strict)
            .count();
        if 0 < errors {
            anyhow::bail!("{errors} problem(s) found in {}", config.root.display());
        }
        log::info!("Config at {} looks good", config.root.display());

        Ok(())
    }
}
