// Domain layer: the tour's value types and the ports the engine is written against.

pub mod model;
pub mod ports;
