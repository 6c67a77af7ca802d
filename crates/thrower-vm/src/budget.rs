//! Compute and wall-clock accounting.
//!
//! A [`Budget`] is an immutable value. [`Budget::admit`] either returns the
//! budget that remains after a step, or rejects the step and leaves the
//! caller's budget untouched.

use std::time::{Duration, Instant};

use thrower_compiler::InstructionKind;
use thrower_core::{
    DEFAULT_STEP_COMPUTE, DEFAULT_STEP_DURATION, RESOLVE_COMPUTE, RESOLVE_TIMEOUT, RunConfig,
};

use crate::error::RuntimeErrorKind;

/// Estimated price of one evaluation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cost {
    pub compute: i64,
    /// Worst-case wall-clock time, checked against the deadline before the step runs.
    pub duration: Duration,
}

impl Cost {
    /// Price of block entry and of every instruction without an override.
    pub const STEP: Cost = Cost {
        compute: DEFAULT_STEP_COMPUTE,
        duration: DEFAULT_STEP_DURATION,
    };

    /// Price of a `resolve`. The duration is also the resolver's timeout.
    pub const RESOLVE: Cost = Cost {
        compute: RESOLVE_COMPUTE,
        duration: RESOLVE_TIMEOUT,
    };

    /// `sleep` is free in compute but charges its full duration against the deadline.
    pub fn sleep(ms: i64) -> Result<Cost, RuntimeErrorKind> {
        let Ok(ms) = u64::try_from(ms) else {
            return Err(RuntimeErrorKind::NegativeSleep(ms));
        };
        Ok(Cost {
            compute: 0,
            duration: Duration::from_millis(ms),
        })
    }

    pub fn for_instruction(kind: &InstructionKind) -> Result<Cost, RuntimeErrorKind> {
        match kind {
            InstructionKind::Sleep(ms) => Cost::sleep(*ms),
            InstructionKind::Resolve(_) => Ok(Cost::RESOLVE),
            _ => Ok(Cost::STEP),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Budget {
    remaining_compute: i64,
    deadline: Instant,
}

impl Budget {
    pub fn new(remaining_compute: i64, deadline: Instant) -> Self {
        Self {
            remaining_compute,
            deadline,
        }
    }

    /// Budget whose deadline is `allowance` after `now`.
    ///
    /// An allowance too large for the platform clock collapses to `now`.
    pub fn starting_at(now: Instant, compute: i64, allowance: Duration) -> Self {
        Self::new(compute, now.checked_add(allowance).unwrap_or(now))
    }

    pub fn from_config(config: &RunConfig) -> Self {
        Self::starting_at(Instant::now(), config.compute, config.deadline)
    }

    pub fn remaining_compute(&self) -> i64 {
        self.remaining_compute
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Charge `cost` for a step starting at `now`.
    ///
    /// Rejects when the compute would go negative or the step's estimated
    /// end lies past the deadline.
    pub fn admit(&self, cost: Cost, now: Instant) -> Result<Budget, RuntimeErrorKind> {
        let remaining_compute = self.remaining_compute.saturating_sub(cost.compute);
        let over_compute = remaining_compute < 0;
        let over_time = match now.checked_add(cost.duration) {
            Some(end) => self.deadline < end,
            None => true,
        };

        if over_compute || over_time {
            return Err(RuntimeErrorKind::BudgetExceeded {
                requested: cost.compute,
                remaining_compute: self.remaining_compute,
                overran_deadline: over_time,
            });
        }

        Ok(Budget {
            remaining_compute,
            deadline: self.deadline,
        })
    }
}
