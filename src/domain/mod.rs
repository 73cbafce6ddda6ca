// Domain layer: input catalog, recipe models and ports. No I/O here.

pub mod catalog;
pub mod model;
pub mod ports;
