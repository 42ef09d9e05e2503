//! Console reporting sink.
//!
//! Renders harness events as colored `[PASS]` / `[FAIL]` lines on stdout.

use taylorsim_core::sim::{CheckRecord, ReportSink, RunOutcome};

/// Passing check marker.
pub const GREEN: &str = "\x1b[92m";
/// Failing check marker and failure summary.
pub const RED: &str = "\x1b[91m";
/// Run section headers.
pub const CYAN: &str = "\x1b[96m";
/// Approximation quality table header.
pub const YELLOW: &str = "\x1b[93m";
/// Restores the terminal's default attributes.
pub const RESET: &str = "\x1b[0m";

/// ANSI palette that collapses to empty strings when color is disabled.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Creates a palette; `enabled == false` strips every escape code.
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Returns `code` when color is enabled, otherwise an empty string.
    pub const fn paint(self, code: &'static str) -> &'static str {
        if self.enabled { code } else { "" }
    }
}

/// Prints one line per comparison plus a header per run.
#[derive(Debug)]
pub struct ConsoleSink {
    palette: Palette,
    runs: usize,
}

impl ConsoleSink {
    /// Creates a sink that prints with `palette`.
    pub const fn new(palette: Palette) -> Self {
        Self { palette, runs: 0 }
    }
}

impl ReportSink for ConsoleSink {
    fn on_run_start(&mut self, label: &str, latency: usize) {
        self.runs += 1;
        let p = self.palette;
        println!(
            "\n{}--- DUT {}: {}   (ORDER={}, latency={} cycles) ---{}",
            p.paint(CYAN),
            self.runs,
            label,
            latency.saturating_sub(1),
            latency,
            p.paint(RESET)
        );
    }

    fn on_check(&mut self, record: &CheckRecord) {
        let p = self.palette;
        if record.passed {
            println!(
                "  {}[PASS]{}  {:20}  y = {:12.7}   (expected {:12.7})",
                p.paint(GREEN),
                p.paint(RESET),
                record.label,
                record.got,
                record.expected
            );
        } else {
            println!(
                "  {}[FAIL]{}  {:20}  y = {:12.7}   (expected {:12.7})   err = {:.3e}",
                p.paint(RED),
                p.paint(RESET),
                record.label,
                record.got,
                record.expected,
                record.error
            );
        }
    }

    fn on_run_end(&mut self, outcome: &RunOutcome) {
        if !outcome.all_passed() {
            let p = self.palette;
            println!(
                "  {}{} of {} checks failed{}",
                p.paint(RED),
                outcome.failed,
                outcome.checks(),
                p.paint(RESET)
            );
        }
    }
}
