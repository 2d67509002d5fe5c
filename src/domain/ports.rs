/// Anything that can produce the greeting a service hands back.
///
/// Implemented by the data access adapter, by configured static text, by
/// test mocks, and by any `Fn() -> String` closure.
pub trait GreetingSource: Send + Sync {
    fn greeting(&self) -> String;
}

impl<F> GreetingSource for F
where
    F: Fn() -> String + Send + Sync,
{
    fn greeting(&self) -> String {
        self()
    }
}

pub trait ConfigProvider: Send + Sync {
    fn source_kind(&self) -> &str;
    fn static_text(&self) -> Option<&str>;
    fn verbose(&self) -> bool;
}
