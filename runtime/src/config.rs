//! Build-time configuration.
//!
//! There is nothing to read configuration from at this stage of boot, so everything is fixed at
//! compile time. The `best-effort` feature selects [`WritePolicy::BestEffort`] by default.

/// The line printed by the image.
pub const GREETING: &str = "Hello, World!\n";

/// What to report when writing to the console fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    /// Return the console's error status to the firmware.
    Propagate,
    /// Ignore the failure and report success.
    BestEffort,
}

impl Default for WritePolicy {
    fn default() -> Self {
        if cfg!(feature = "best-effort") {
            WritePolicy::BestEffort
        } else {
            WritePolicy::Propagate
        }
    }
}

/// Entrypoint configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Text written to the console.
    pub message: &'static str,
    /// Handling of console write failures.
    pub write_policy: WritePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            message: GREETING,
            write_policy: WritePolicy::default(),
        }
    }
}
