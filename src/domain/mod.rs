// Domain layer: core models and ports. No external dependencies beyond serde/tabled derives.

pub mod model;
pub mod ports;
