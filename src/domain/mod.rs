// Domain layer: the greeting model and the port a service depends on.

pub mod model;
pub mod ports;
