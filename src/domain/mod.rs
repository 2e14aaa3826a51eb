// Domain layer: ledger model and storage port. No I/O here.

pub mod model;
pub mod ports;
