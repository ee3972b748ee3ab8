// Domain layer: value types and the small traits the core routines are generic over.

pub mod model;
pub mod ports;
