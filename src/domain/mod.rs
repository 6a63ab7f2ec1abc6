// Domain layer: branch records, report rows and ports (interfaces). No
// external dependencies beyond std/serde.

pub mod model;
pub mod ports;
