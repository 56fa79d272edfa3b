// Domain layer: parcel model, the compliance rule and the ports the core depends on.

pub mod compliance;
pub mod model;
pub mod ports;
