//! Statistics Tests

use taylorsim_core::sim::RunOutcome;
use taylorsim_core::stats::VerifyStats;

fn outcome(passed: u64, failed: u64, cycles: u64) -> RunOutcome {
    RunOutcome {
        label: "run".to_owned(),
        latency: 3,
        passed,
        failed,
        cycles,
    }
}

#[test]
fn totals_accumulate_across_runs() {
    let mut stats = VerifyStats::default();
    stats.record(&outcome(7, 0, 10));
    stats.record(&outcome(6, 0, 11));
    assert_eq!(
        stats,
        VerifyStats {
            runs: 2,
            passed: 13,
            failed: 0,
            cycles: 21
        }
    );
    assert!(stats.all_passed());
    assert_eq!(stats.exit_code(), 0);
}

#[test]
fn any_failure_sets_exit_code() {
    let mut stats = VerifyStats::default();
    stats.record(&outcome(5, 0, 8));
    stats.record(&outcome(0, 1, 3));
    assert!(!stats.all_passed());
    assert_eq!(stats.exit_code(), 1);
    assert_eq!(stats.checks(), 6);
}

#[test]
fn summary_block() {
    let mut stats = VerifyStats::default();
    stats.record(&outcome(13, 0, 21));
    let text = stats.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].chars().all(|c| c == '='));
    assert_eq!(lines[1], "  Results:  13 PASSED  /  0 FAILED");
    assert!(lines[4].ends_with("21"));
    assert_eq!(lines[0], lines[5]);
}
