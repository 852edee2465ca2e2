//! Property-based tests for hostname lookup

use backuppc_reports_core::models::{HostStatus, HostTable};
use proptest::prelude::*;

fn host(name: &str, user: &str) -> HostStatus {
    HostStatus::from_cells([
        name.to_string(),
        user.to_string(),
        "1".to_string(),
        "1.0".to_string(),
        "1.0".to_string(),
        "1.0".to_string(),
        "1".to_string(),
        "0.5".to_string(),
        "0.5".to_string(),
        "idle".to_string(),
        "0".to_string(),
        "now".to_string(),
    ])
}

/// Strategy for a table whose hostnames may repeat
fn arb_table() -> impl Strategy<Value = HostTable> {
    prop::collection::vec("[a-d]{1,2}", 0..30).prop_map(|names| {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| host(n, &format!("user{i}")))
            .collect::<Vec<_>>()
            .into()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Property 4: Lookup Finds The First Match
    // =========================================================================

    /// Lookup returns the first record in table order with that exact name,
    /// and fails only when no record has it.
    #[test]
    fn prop_lookup_returns_first_match(table in arb_table(), name in "[a-d]{1,2}") {
        let first = table.iter().find(|h| h.hostname == name);
        match (table.find_by_hostname(&name), first) {
            (Ok(found), Some(expected)) => {
                prop_assert_eq!(&found.user, &expected.user);
            }
            (Err(err), None) => {
                prop_assert_eq!(err.0, name);
            }
            (found, expected) => {
                prop_assert!(false, "lookup {:?} disagrees with scan {:?}", found, expected);
            }
        }
    }

    // =========================================================================
    // Property 5: Lookup Is Idempotent
    // =========================================================================

    /// Repeating a lookup yields the same record.
    #[test]
    fn prop_lookup_is_idempotent(table in arb_table(), name in "[a-d]{1,2}") {
        let once = table.find_by_hostname(&name).ok().cloned();
        let twice = table.find_by_hostname(&name).ok().cloned();
        prop_assert_eq!(once, twice);
    }

    // =========================================================================
    // Property 6: Lookup Is Case-Sensitive
    // =========================================================================

    /// Upper-cased names never match lower-case hostnames.
    #[test]
    fn prop_lookup_is_case_sensitive(table in arb_table(), name in "[a-d]{1,2}") {
        prop_assert!(table.find_by_hostname(&name.to_uppercase()).is_err());
    }
}
