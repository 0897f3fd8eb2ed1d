// Domain layer: core models and ports (interfaces). No HTTP or clock access here.

pub mod model;
pub mod ports;
