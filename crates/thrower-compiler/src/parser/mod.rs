//! Parser for the program language.
//!
//! Source is tokenized by a logos lexer that keeps trivia, then a hand-written
//! recursive-descent parser builds a typed [`ast::Program`]. The first syntax
//! error stops the parse; no partial tree is returned.

pub mod ast;
mod core;
mod grammar;
mod lexer;
mod printer;
mod syntax_kind;

#[cfg(test)]
mod parser_tests;

pub use self::core::{DEFAULT_RECURSION_LIMIT, Parser};
pub use lexer::{Token, lex, token_text};
pub use printer::AstPrinter;
pub use syntax_kind::SyntaxKind;

use crate::Result;

/// Parse `source` into a program with the default recursion limit.
pub fn parse(source: &str) -> Result<ast::Program> {
    Parser::new(source, lex(source)).parse()
}
