//! Property-based tests for health evaluation and the monitoring pass

use async_trait::async_trait;
use backuppc_reports_core::config::Thresholds;
use backuppc_reports_core::error::NotificationResult;
use backuppc_reports_core::health::{HealthResult, Monitor, evaluate};
use backuppc_reports_core::models::{HostStatus, HostTable};
use backuppc_reports_core::notify::{Notification, Notifier};
use proptest::prelude::*;

struct Discard;

#[async_trait]
impl Notifier for Discard {
    async fn send(&self, _: &Notification) -> NotificationResult<()> {
        Ok(())
    }
}

fn host(name: &str, full: &str, incr: &str, last: &str, state: &str) -> HostStatus {
    HostStatus::from_cells([
        name.to_string(),
        "backup".to_string(),
        "3".to_string(),
        full.to_string(),
        "10.0".to_string(),
        "20.0".to_string(),
        "6".to_string(),
        incr.to_string(),
        last.to_string(),
        state.to_string(),
        "0".to_string(),
        "now".to_string(),
    ])
}

/// Strategy for an age cell: mostly numbers, sometimes garbage
fn arb_age() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => (0u32..2000).prop_map(|tenths| format!("{:.1}", f64::from(tenths) / 10.0)),
        1 => Just(String::new()),
        1 => Just("n/a".to_string()),
    ]
}

/// Strategy for a host state
fn arb_state() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("idle".to_string()),
        Just("backup in progress".to_string()),
        Just("auto disabled".to_string()),
        Just("disabled".to_string()),
    ]
}

fn arb_thresholds() -> impl Strategy<Value = Thresholds> {
    (1u32..60, 1u32..60, 1u32..60).prop_map(|(f, i, l)| Thresholds::new(f, i, l))
}

fn arb_host() -> impl Strategy<Value = HostStatus> {
    ("[a-z]{3,8}", arb_age(), arb_age(), arb_age(), arb_state())
        .prop_map(|(n, f, i, l, s)| host(&n, &f, &i, &l, &s))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Property 7: Auto-Disabled Dominates
    // =========================================================================

    /// An auto-disabled host is never reported, whatever its ages.
    #[test]
    fn prop_auto_disabled_is_never_checked(
        full in arb_age(),
        incr in arb_age(),
        last in arb_age(),
        thresholds in arb_thresholds(),
    ) {
        let h = host("nas", &full, &incr, &last, "auto disabled");
        prop_assert_eq!(evaluate(&h, &thresholds), HealthResult::Disabled);
    }

    // =========================================================================
    // Property 8: One Violation Per Exceeded Limit
    // =========================================================================

    /// With readable ages, the violations are exactly the exceeded limits.
    #[test]
    fn prop_violations_match_exceeded_limits(
        full in 0u32..100,
        incr in 0u32..100,
        last in 0u32..100,
        thresholds in arb_thresholds(),
    ) {
        let h = host("nas", &full.to_string(), &incr.to_string(), &last.to_string(), "idle");
        let expected = usize::from(full > thresholds.max_full_backup_age)
            + usize::from(incr > thresholds.max_incr_backup_age)
            + usize::from(last > thresholds.max_last_backup_age);

        let result = evaluate(&h, &thresholds);
        prop_assert_eq!(result.violations().len(), expected);
        prop_assert_eq!(expected == 0, result == HealthResult::Healthy);
    }

    // =========================================================================
    // Property 9: Tally Adds Up
    // =========================================================================

    /// Every host is counted exactly once as disabled, healthy or violating.
    #[test]
    fn prop_tally_is_consistent(
        hosts in prop::collection::vec(arb_host(), 0..25),
        thresholds in arb_thresholds(),
    ) {
        let table = HostTable::new(hosts);
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let report = runtime.block_on(Monitor::new(thresholds, &Discard).run(&table));

        prop_assert_eq!(report.tally.total, table.len());
        prop_assert!(report.tally.is_consistent());
        prop_assert!(report.tally.unreadable <= report.tally.violating);
        prop_assert_eq!(report.sent_notifications(), report.tally.violating);
    }

    // =========================================================================
    // Property 10: Faults Never Mask Violations
    // =========================================================================

    /// Every readable age over its limit is reported, even beside unreadable fields.
    #[test]
    fn prop_faults_never_mask_violations(
        full in arb_age(),
        incr in arb_age(),
        last in arb_age(),
        thresholds in arb_thresholds(),
    ) {
        let h = host("nas", &full, &incr, &last, "idle");
        let limits = [
            thresholds.max_full_backup_age,
            thresholds.max_incr_backup_age,
            thresholds.max_last_backup_age,
        ];
        let ages = [&full, &incr, &last];
        let readable = ages.iter().filter(|a| a.parse::<f64>().is_ok()).count();
        let exceeded = ages
            .iter()
            .zip(limits)
            .filter(|(age, limit)| age.parse::<f64>().is_ok_and(|v| v > f64::from(*limit)))
            .count();

        let result = evaluate(&h, &thresholds);
        prop_assert_eq!(result.violations().len(), exceeded);
        prop_assert_eq!(result.faults().len(), 3 - readable);
    }
}
