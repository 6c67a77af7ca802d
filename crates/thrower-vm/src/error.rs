//! Conditions that stop a run.

use thrower_compiler::{Diagnostics, TextRange};
use thrower_core::{Register, Value};

/// How a stop is reported to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StopClass {
    /// Compute units or deadline ran out.
    Budget,
    /// An `assert` did not hold.
    Assertion,
    /// Any other fatal condition raised by the program.
    Stop,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeErrorKind {
    #[error("budget exceeded: {}", describe_budget(.requested, .remaining_compute, .overran_deadline))]
    BudgetExceeded {
        requested: i64,
        remaining_compute: i64,
        overran_deadline: bool,
    },

    #[error("assertion failed: {register} {comparison} {}, found {}", quoted(.expected), quoted(.actual))]
    AssertionFailed {
        register: Register,
        comparison: &'static str,
        expected: Value,
        actual: Value,
    },

    #[error("uninitialized register: {0}")]
    UninitializedRegister(Register),

    #[error("nothing to store in {0}: no instruction has produced a result")]
    MissingLast(Register),

    #[error("negative sleep time: {0}")]
    NegativeSleep(i64),

    #[error("resolver exception: {0}")]
    ResolverFault(String),
}

impl RuntimeErrorKind {
    pub fn class(&self) -> StopClass {
        match self {
            RuntimeErrorKind::BudgetExceeded { .. } => StopClass::Budget,
            RuntimeErrorKind::AssertionFailed { .. } => StopClass::Assertion,
            RuntimeErrorKind::UninitializedRegister(_)
            | RuntimeErrorKind::MissingLast(_)
            | RuntimeErrorKind::NegativeSleep(_)
            | RuntimeErrorKind::ResolverFault(_) => StopClass::Stop,
        }
    }
}

fn describe_budget(requested: &i64, remaining: &i64, overran_deadline: &bool) -> String {
    if *overran_deadline {
        "step would end past the deadline".to_string()
    } else {
        format!("step needs {requested} compute units, {remaining} left")
    }
}

fn quoted(value: &Value) -> String {
    match value {
        Value::Int(n) => n.to_string(),
        Value::Str(s) => format!("{s:?}"),
    }
}

/// A stop condition together with the source location that raised it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {line}")]
pub struct RuntimeError {
    pub kind: RuntimeErrorKind,
    /// 1-based line of the offending node.
    pub line: u32,
    pub span: TextRange,
}

impl RuntimeError {
    pub fn new(kind: RuntimeErrorKind, line: u32, span: TextRange) -> Self {
        Self { kind, line, span }
    }

    pub fn class(&self) -> StopClass {
        self.kind.class()
    }

    /// The stop as a diagnostic, for rendering against the program source.
    pub fn to_diagnostics(&self) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        diagnostics.stop(self.kind.to_string(), self.span).emit();
        diagnostics
    }
}
