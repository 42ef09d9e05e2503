//! Verification statistics collection and reporting.
//!
//! This module tallies results across verification runs. It provides:
//! 1. **Totals:** Runs, passing and failing comparisons, and clock edges driven.
//! 2. **Verdict:** Whether every comparison passed, and the matching exit status.
//! 3. **Summary:** A `Display` rendering of the final results block.

use std::fmt;

use crate::sim::report::RunOutcome;

/// Separator used by the summary block.
const RULE: &str = "=================================================================";

/// Accumulated verification results.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VerifyStats {
    /// Runs completed.
    pub runs: u64,
    /// Comparisons within tolerance.
    pub passed: u64,
    /// Comparisons outside tolerance.
    pub failed: u64,
    /// Clock edges driven across all runs.
    pub cycles: u64,
}

impl VerifyStats {
    /// Adds one run's tally.
    pub fn record(&mut self, outcome: &RunOutcome) {
        self.runs += 1;
        self.passed += outcome.passed;
        self.failed += outcome.failed;
        self.cycles += outcome.cycles;
    }

    /// Total comparisons made.
    pub const fn checks(&self) -> u64 {
        self.passed + self.failed
    }

    /// Whether no comparison failed.
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Process exit status: 0 iff no comparison failed.
    pub const fn exit_code(&self) -> i32 {
        if self.all_passed() { 0 } else { 1 }
    }
}

impl fmt::Display for VerifyStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(
            f,
            "  Results:  {} PASSED  /  {} FAILED",
            self.passed, self.failed
        )?;
        writeln!(f, "  runs                   {}", self.runs)?;
        writeln!(f, "  checks                 {}", self.checks())?;
        writeln!(f, "  sim_cycles             {}", self.cycles)?;
        write!(f, "{RULE}")
    }
}
