//! Backup health evaluation
//!
//! [`evaluate`] checks one host against the configured maximum ages;
//! [`Monitor`] runs that check over a whole [`crate::models::HostTable`],
//! isolates per-host data faults and sends one alert per problem host.

mod evaluator;
mod monitor;

pub use evaluator::{AgeCheck, HealthResult, Violation, evaluate, exceeds};
pub use monitor::{HostReport, Monitor, MonitorReport, MonitorTally};
