use std::io::Write;
use std::path;

use tinkr_config::SiteConfig;

use crate::error::*;

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ConfigArgs {
    /// Config file to use [default: _tinkr.yml]
    #[arg(short, long, value_name = "FILE")]
    config: Option<path::PathBuf>,
}

impl ConfigArgs {
    pub(crate) fn load_config(&self) -> Result<SiteConfig> {
        let config = if let Some(config_path) = self.config.as_deref() {
            SiteConfig::from_file(config_path).map_err(|e| {
                anyhow::Error::new(e)
                    .context(format!("Error reading config file {}", config_path.display()))
            })?
        } else {
            let cwd = std::env::current_dir()?;
            SiteConfig::from_cwd(cwd)?
        };

        Ok(config)
    }
}

pub(crate) fn init_logging(
    verbose: &clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,
) {
    let mut builder = env_logger::Builder::new();
    builder.format(|buf, record| {
        let level = format!("[{}]", record.level()).to_lowercase();
        writeln!(buf, "{:8} {}", level, record.args())
    });
    builder.filter_level(verbose.log_level_filter());
    builder.init();
}
