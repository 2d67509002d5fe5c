// Adapters layer: concrete greeting sources.

pub mod dao;
pub mod static_source;
