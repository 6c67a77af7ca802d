//! Process exit statuses.

use std::panic::{self, AssertUnwindSafe};

use thrower_vm::StopClass;
use tracing::error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exit {
    Success,
    /// Unreadable input, bad target or any other error outside the program.
    Failure,
    AssertionFailed,
    BudgetExceeded,
    /// Any other stop raised while running.
    Stopped,
    ParseError,
}

impl Exit {
    pub fn code(self) -> i32 {
        match self {
            Exit::Success => 0,
            Exit::Failure => 1,
            Exit::AssertionFailed => 10,
            Exit::BudgetExceeded => 11,
            Exit::Stopped => 12,
            Exit::ParseError => 13,
        }
    }

    /// Run a command, turning a panic into [`Exit::Failure`].
    ///
    /// The panic message is still printed by the default hook.
    pub fn guard(command: impl FnOnce() -> Exit) -> Exit {
        match panic::catch_unwind(AssertUnwindSafe(command)) {
            Ok(exit) => exit,
            Err(_) => {
                error!("internal error");
                Exit::Failure
            }
        }
    }
}

impl From<StopClass> for Exit {
    fn from(class: StopClass) -> Self {
        match class {
            StopClass::Budget => Exit::BudgetExceeded,
            StopClass::Assertion => Exit::AssertionFailed,
            StopClass::Stop => Exit::Stopped,
        }
    }
}
