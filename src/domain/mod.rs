// Domain layer: record types for everything that crosses the network
// boundary, plus the ports the core is generic over.

pub mod model;
pub mod ports;
