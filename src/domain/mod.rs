// Domain layer: the run report model and the Runnable port.

pub mod model;
pub mod ports;
