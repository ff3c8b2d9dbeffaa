// Domain layer: core models and ports (interfaces). No dependencies beyond
// serde/chrono for the transport derives.

pub mod model;
pub mod ports;
