//! Ordered, in-memory collection of host records from one fetch.

use super::host::HostStatus;
use crate::error::HostNotFound;

/// Host records in dashboard row order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostTable {
    hosts: Vec<HostStatus>,
}

impl HostTable {
    /// Wraps records, keeping their order
    #[must_use]
    pub const fn new(hosts: Vec<HostStatus>) -> Self {
        Self { hosts }
    }

    /// Number of hosts
    #[must_use]
    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    /// Whether the table holds no hosts
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// Iterates over records top to bottom
    pub fn iter(&self) -> std::slice::Iter<'_, HostStatus> {
        self.hosts.iter()
    }

    /// Records as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[HostStatus] {
        &self.hosts
    }

    /// Finds a host by exact, case-sensitive name.
    ///
    /// Duplicate names resolve to the earliest row.
    ///
    /// # Errors
    ///
    /// Returns [`HostNotFound`] when no row carries that name.
    pub fn find_by_hostname(&self, name: &str) -> Result<&HostStatus, HostNotFound> {
        self.hosts
            .iter()
            .find(|h| h.hostname == name)
            .ok_or_else(|| HostNotFound(name.to_string()))
    }
}

impl From<Vec<HostStatus>> for HostTable {
    fn from(hosts: Vec<HostStatus>) -> Self {
        Self::new(hosts)
    }
}

impl<'a> IntoIterator for &'a HostTable {
    type Item = &'a HostStatus;
    type IntoIter = std::slice::Iter<'a, HostStatus>;

    fn into_iter(self) -> Self::IntoIter {
        self.hosts.iter()
    }
}
