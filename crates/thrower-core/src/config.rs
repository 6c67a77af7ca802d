//! Operational defaults for a run.

use std::time::Duration;

/// Compute units granted when the caller supplies no budget.
pub const DEFAULT_COMPUTE: i64 = 1000;

/// Wall-clock allowance granted when the caller supplies no budget.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(15 * 60);

/// Cost of an ordinary evaluation step.
pub const DEFAULT_STEP_COMPUTE: i64 = 1;
pub const DEFAULT_STEP_DURATION: Duration = Duration::from_millis(10);

/// Cost of a `resolve`. The duration doubles as the resolver timeout.
pub const RESOLVE_COMPUTE: i64 = 10;
pub const RESOLVE_TIMEOUT: Duration = Duration::from_millis(5000);

/// Suffix appended to every resolved label unless configured otherwise.
pub const DEFAULT_SUFFIX: &str = ".example.com.";

/// Environment variable overriding [`DEFAULT_SUFFIX`].
pub const SUFFIX_ENV: &str = "DNS_SUFFIX";

/// Settings fixed for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub suffix: String,
    pub compute: i64,
    pub deadline: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_owned(),
            compute: DEFAULT_COMPUTE,
            deadline: DEFAULT_DEADLINE,
        }
    }
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with the suffix taken from `DNS_SUFFIX` when it is set.
    pub fn from_env() -> Self {
        Self::default().suffix_from(std::env::var(SUFFIX_ENV).ok())
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Replace the suffix only when a value is present.
    pub fn suffix_from(self, suffix: Option<String>) -> Self {
        match suffix {
            Some(s) => self.suffix(s),
            None => self,
        }
    }

    pub fn compute(mut self, compute: i64) -> Self {
        self.compute = compute;
        self
    }

    pub fn deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }
}
