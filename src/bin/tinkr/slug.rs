use crate::args;
use crate::error::*;

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct SlugArgs {
    /// Post or page title
    #[arg(required = true)]
    title: Vec<String>,

    #[command(flatten, next_help_heading = "Config")]
    config: args::ConfigArgs,
}

impl SlugArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let config = self.config.load_config()?;
        let title = self.title.join(" ");
        println!("{}", config.slugify(&title));

        Ok(())
    }
}
