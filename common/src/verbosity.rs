//! # Verbosity Sink
//!
//! Gates human-readable progress output by a numeric threshold chosen once per run.
//!
//! A message of severity `s` is emitted only when `s > 3 - verbosity`, so a run
//! without `-v` prints nothing, `-v` prints verdicts, `-vv` adds section headers
//! and `-vvv` adds per-item detail.
//!
//! Messages are emitted as `tracing` events on [`PRINT_TARGET`]; the CLI formats
//! that target verbatim on stdout.

use std::fmt::Display;

use tracing::{info, warn};

/// Target used for every line the sink lets through.
pub const PRINT_TARGET: &str = "satcheck::print";

const MAX_SEVERITY: u8 = 3;

/// How important a message is, independently of the configured verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Per-item detail, visible at `-vvv`.
    Info = 1,
    /// Section headers and failure listings, visible at `-vv`.
    Section = 2,
    /// Final verdicts, visible at `-v`.
    Verdict = 3,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Verbosity {
    level: u8,
}

impl Verbosity {
    pub fn new(level: u8) -> Self {
        Self { level }
    }

    /// A sink that never emits anything.
    pub fn silent() -> Self {
        Self::default()
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn allows(&self, severity: Severity) -> bool {
        if self.level == 0 {
            return false;
        }
        severity as u8 > MAX_SEVERITY.saturating_sub(self.level)
    }

    pub fn emit<M: Display>(&self, severity: Severity, message: M) {
        if self.allows(severity) {
            info!(target: PRINT_TARGET, "{}", message);
        }
    }

    /// Prints regardless of the configured level.
    pub fn diagnostic<M: Display>(&self, message: M) {
        warn!(target: PRINT_TARGET, "{}", message);
    }
}

impl From<u8> for Verbosity {
    fn from(level: u8) -> Self {
        Self::new(level)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
