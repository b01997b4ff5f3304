mod connection;
mod gate;

pub use connection::{ConnectionState, StoreConfig, StoreHandle, StoreStatus};
pub use gate::{AvailabilityGate, StoreFailure, StoreUnavailable};
