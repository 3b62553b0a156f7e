// Domain layer: entities and the contracts outer layers implement.
// Depends on nothing else in the crate.

pub mod model;
pub mod ports;
