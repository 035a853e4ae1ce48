// Domain layer: directory records, the query set and the fetch port.

pub mod model;
pub mod ports;
