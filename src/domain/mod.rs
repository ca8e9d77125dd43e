// Domain layer: value objects and ports. No HTTP here.

pub mod model;
pub mod ports;
