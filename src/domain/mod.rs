// Domain layer: meet records, trend rows, and the ports the pipeline is built on.

pub mod model;
pub mod ports;
