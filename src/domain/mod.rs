// Domain layer: value types shared by the helpers and the clock port.

pub mod model;
pub mod ports;
