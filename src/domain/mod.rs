// Domain layer: package measurements, categories and the classification port.

pub mod model;
pub mod ports;
