// Domain layer: request model and the ports the pricing core and shell depend on.

pub mod model;
pub mod ports;
