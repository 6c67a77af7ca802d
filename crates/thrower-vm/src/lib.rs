//! Budgeted interpreter for thrower programs.
//!
//! Every evaluation step is admitted against a [`Budget`] before it runs.
//! `resolve` instructions go through a [`Resolve`] implementation; the
//! default one speaks DNS over UDP to the configured [`Target`](thrower_core::Target).

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod budget;
mod error;
mod interpreter;
mod registers;
pub mod resolver;

#[cfg(test)]
mod registers_tests;

pub use budget::{Budget, Cost};
pub use error::{RuntimeError, RuntimeErrorKind, StopClass};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use registers::RegisterFile;
pub use resolver::{DnsResolver, Resolve, ResolveError};
