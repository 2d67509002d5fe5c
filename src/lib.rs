pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod testing;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::dao::{hello, HelloDao};
pub use config::toml_config::TomlConfig;
pub use core::{say_hello, HelloService, ServiceContainer};
pub use domain::model::{Greeting, OutputFormat};
pub use utils::error::{GreetError, Result};
