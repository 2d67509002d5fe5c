//! Mock implementations of the ports for testing

use crate::core::container::SOURCE_DAO;
use crate::domain::ports::{ConfigProvider, GreetingSource};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Greeting source that returns a fixed value and counts how often it was
/// asked.
///
/// ```
/// use hello_service::core::GreetingSource;
/// use hello_service::testing::MockGreetingSource;
///
/// let mock = MockGreetingSource::new("Hola");
/// assert_eq!(mock.greeting(), "Hola");
/// assert_eq!(mock.calls(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockGreetingSource {
    value: String,
    calls: AtomicUsize,
}

impl MockGreetingSource {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl GreetingSource for MockGreetingSource {
    fn greeting(&self) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.value.clone()
    }
}

/// Mock configuration provider for testing
#[derive(Debug, Clone)]
pub struct MockConfigProvider {
    pub source_kind: String,
    pub static_text: Option<String>,
    pub verbose: bool,
}

impl Default for MockConfigProvider {
    fn default() -> Self {
        Self {
            source_kind: SOURCE_DAO.to_string(),
            static_text: None,
            verbose: false,
        }
    }
}

impl ConfigProvider for MockConfigProvider {
    fn source_kind(&self) -> &str {
        &self.source_kind
    }

    fn static_text(&self) -> Option<&str> {
        self.static_text.as_deref()
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}
