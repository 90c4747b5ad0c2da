// Domain layer: the item record, the source port and the built-in sample catalog.

pub mod model;
pub mod ports;
pub mod sample;
