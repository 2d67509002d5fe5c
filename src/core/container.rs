//! Service container for dependency injection
//!
//! Holds the greeting source behind `Arc<dyn GreetingSource>` so the binary
//! can pick an implementation at runtime and tests can hand in a mock.
//!
//! ```
//! use hello_service::core::ServiceContainer;
//! use hello_service::testing::MockGreetingSource;
//! use std::sync::Arc;
//!
//! let container = ServiceContainer::with_source(Arc::new(MockGreetingSource::new("Hola")));
//! assert_eq!(container.say_hello(), "Hola");
//! ```

use crate::adapters::dao::HelloDao;
use crate::adapters::static_source::StaticGreeting;
use crate::domain::ports::{ConfigProvider, GreetingSource};
use crate::utils::error::{GreetError, Result};
use std::sync::Arc;

pub const SOURCE_DAO: &str = "dao";
pub const SOURCE_STATIC: &str = "static";
pub const SOURCE_KINDS: &[&str] = &[SOURCE_DAO, SOURCE_STATIC];

#[derive(Clone)]
pub struct ServiceContainer {
    pub source: Arc<dyn GreetingSource>,
}

impl ServiceContainer {
    /// Container wired to the data access layer.
    pub fn new() -> Self {
        Self {
            source: Arc::new(HelloDao),
        }
    }

    /// Container with a caller-supplied source. Mostly for tests.
    pub fn with_source(source: Arc<dyn GreetingSource>) -> Self {
        Self { source }
    }

    /// Build the source the configuration asks for.
    ///
    /// # Errors
    ///
    /// Returns an error if the source kind is unknown, or if `static` is
    /// selected without any text.
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        match config.source_kind() {
            SOURCE_DAO => Ok(Self::new()),
            SOURCE_STATIC => {
                let text = config
                    .static_text()
                    .ok_or_else(|| GreetError::MissingConfigError {
                        field: "greeting.text".to_string(),
                    })?;
                tracing::debug!("using static greeting source");
                Ok(Self::with_source(Arc::new(StaticGreeting::new(text))))
            }
            other => Err(GreetError::InvalidConfigValueError {
                field: "greeting.source".to_string(),
                value: other.to_string(),
                reason: format!("Expected one of: {}", SOURCE_KINDS.join(", ")),
            }),
        }
    }

    pub fn source(&self) -> &dyn GreetingSource {
        self.source.as_ref()
    }

    pub fn say_hello(&self) -> String {
        self.source.greeting()
    }
}

impl Default for ServiceContainer {
    fn default() -> Self {
        Self::new()
    }
}
