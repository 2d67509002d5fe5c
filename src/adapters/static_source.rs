use crate::domain::ports::GreetingSource;

/// Greeting source backed by text supplied through configuration.
#[derive(Debug, Clone)]
pub struct StaticGreeting {
    text: String,
}

impl StaticGreeting {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl GreetingSource for StaticGreeting {
    fn greeting(&self) -> String {
        self.text.clone()
    }
}
