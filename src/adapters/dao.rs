use crate::domain::ports::GreetingSource;

pub const HELLO: &str = "Hello";

/// Data access: produce the canonical greeting.
pub fn hello() -> String {
    tracing::trace!("dao: producing canonical greeting");
    HELLO.to_string()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HelloDao;

impl GreetingSource for HelloDao {
    fn greeting(&self) -> String {
        hello()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_returns_constant() {
        assert_eq!(hello(), "Hello");
        assert_eq!(hello(), HELLO);
    }

    #[test]
    fn test_dao_source_matches_hello() {
        assert_eq!(HelloDao.greeting(), hello());
    }
}
