//! Core data structures for host backup status
//!
//! A fresh [`HostTable`] is built from every fetch; nothing is cached.

mod host;
mod table;

pub use host::{AUTO_DISABLED_STATE, HostField, HostStatus};
pub use table::HostTable;
