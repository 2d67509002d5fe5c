use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// Output shape of a greeting. Core operations return plain `String`s;
/// this wrapper only exists so the CLI can render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub greeting: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Greeting {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.greeting.clone()),
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }
}

impl From<String> for Greeting {
    fn from(greeting: String) -> Self {
        Self { greeting }
    }
}
