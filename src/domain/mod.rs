// Domain layer: the record model, the pure parse/tally/report core and the ports it runs behind.

pub mod model;
pub mod parser;
pub mod ports;
pub mod report;
pub mod tally;
