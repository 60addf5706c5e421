use std::path;

use crate::error::*;

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct InitArgs {
    /// Target directory
    #[arg(default_value = "./")]
    directory: path::PathBuf,
}

impl InitArgs {
    pub(crate) fn run(&self) -> Result<()> {
        tinkr::create_new_project(&self.directory)
            .map_err(|e| e.context("Could not create a new blog"))?;
        log::info!("Created new blog at {}", self.directory.display());

        Ok(())
    }
}
