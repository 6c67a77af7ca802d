pub mod ast;
pub mod check;
pub mod exit;
pub mod loader;
pub mod run;
pub mod run_common;
pub mod selftest;

#[cfg(test)]
mod loader_tests;
#[cfg(test)]
mod run_common_tests;
