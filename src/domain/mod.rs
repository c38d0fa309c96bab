// Domain layer: the report model and the ports the emitter talks through.

pub mod model;
pub mod ports;
