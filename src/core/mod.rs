pub mod container;
pub mod service;

pub use crate::domain::model::Greeting;
pub use crate::domain::ports::{ConfigProvider, GreetingSource};
pub use crate::utils::error::Result;
pub use container::ServiceContainer;
pub use service::{say_hello, HelloService};
