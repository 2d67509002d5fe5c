pub mod toml_config;

#[cfg(feature = "cli")]
use crate::{
    core::container::SOURCE_STATIC,
    domain::model::OutputFormat,
    utils::error::Result,
    utils::validation::Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "hello-service")]
#[command(about = "Print a greeting from an injectable data source")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Greeting source: dao or static (overrides the config file)
    #[arg(long)]
    pub source: Option<String>,

    /// Text for the static source (overrides the config file)
    #[arg(long)]
    pub text: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merge the optional config file with command-line overrides.
    ///
    /// A `--text` without a `--source` selects the static source.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        if let Some(text) = &self.text {
            config.greeting.text = Some(text.clone());
            if self.source.is_none() {
                config.greeting.source = SOURCE_STATIC.to_string();
            }
        }

        if let Some(source) = &self.source {
            config.greeting.source = source.clone();
        }

        if self.verbose {
            config.logging.get_or_insert_with(Default::default).verbose = Some(true);
        }

        Ok(config)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.resolve()?.validate()
    }
}
