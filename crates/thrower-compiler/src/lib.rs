//! Thrower compiler front end: lexer, parser and diagnostics.
//!
//! - `parser` - logos lexer, recursive-descent parser, typed AST, AST printer
//! - `diagnostics` - error collection and snippet rendering
//! - `line_index` - line lookup for byte offsets

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod line_index;
pub mod parser;


pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter};
pub use parser::ast::{
    Block, Comparison, Instruction, InstructionKind, IntLiteral, Operand, Program, RegisterRef,
    StringLiteral,
};
pub use parser::{AstPrinter, Parser, parse};
pub use line_index::LineIndex;
pub use text_size::{TextRange, TextSize};

/// Errors that can occur while parsing a program.
///
/// Either way no partial tree is returned.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Blocks nested deeper than the parser's recursion limit.
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    #[error("program parsing failed with {} errors", .0.error_count())]
    ProgramParseError(Diagnostics),
}

impl Error {
    /// Diagnostics to show the user, if the failure produced any.
    pub fn diagnostics(&self) -> Option<&Diagnostics> {
        match self {
            Error::ProgramParseError(d) => Some(d),
            Error::RecursionLimitExceeded => None,
        }
    }
}

/// Result type for parsing.
pub type Result<T> = std::result::Result<T, Error>;
