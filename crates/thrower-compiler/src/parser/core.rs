//! Parser state machine and low-level operations.

use text_size::{TextRange, TextSize};

use super::ast::Program;
use super::lexer::{Token, token_text};
use super::syntax_kind::SyntaxKind;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::line_index::LineIndex;
use crate::{Error, Result};

/// Default maximum nesting of `{ ... }` blocks.
pub const DEFAULT_RECURSION_LIMIT: u32 = 256;

/// Recursive-descent parser over a trivia-bearing token stream.
///
/// Grammar productions return `None` after emitting a diagnostic; parsing
/// stops at the first error since a failed parse yields no tree.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) lines: LineIndex,
    pub(super) diagnostics: Diagnostics,
    pub(super) depth: u32,
    /// End offset of the last consumed non-trivia token.
    pub(super) last_end: TextSize,
    recursion_fuel_limit: Option<u32>,
    fatal_error: Option<Error>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            lines: LineIndex::new(source),
            diagnostics: Diagnostics::new(),
            depth: 0,
            last_end: TextSize::from(0),
            recursion_fuel_limit: Some(DEFAULT_RECURSION_LIMIT),
            fatal_error: None,
        }
    }

    /// Set the maximum block nesting. `None` disables the check.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel_limit = limit;
        self
    }

    pub fn parse(mut self) -> Result<Program> {
        let program = self.parse_program();
        if let Some(err) = self.fatal_error {
            return Err(err);
        }
        match program {
            Some(program) if !self.diagnostics.has_errors() => Ok(program),
            _ => Err(Error::ProgramParseError(self.diagnostics)),
        }
    }

    pub(super) fn skip_trivia(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_trivia() {
            self.pos += 1;
        }
    }

    /// Current non-trivia token kind, or `None` at end of input.
    pub(super) fn current(&mut self) -> Option<SyntaxKind> {
        self.skip_trivia();
        self.tokens.get(self.pos).map(|t| t.kind)
    }

    pub(super) fn current_span(&mut self) -> TextRange {
        self.skip_trivia();
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    pub(super) fn current_text(&mut self) -> &'src str {
        self.skip_trivia();
        match self.tokens.get(self.pos) {
            Some(token) => token_text(self.source, token),
            None => "",
        }
    }

    pub(super) fn currently_is(&mut self, kind: SyntaxKind) -> bool {
        self.current() == Some(kind)
    }

    /// Consume the current non-trivia token.
    pub(super) fn bump(&mut self) -> Token {
        self.skip_trivia();
        let token = self.tokens[self.pos];
        self.pos += 1;
        self.last_end = token.span.end();
        token
    }

    pub(super) fn eat(&mut self, kind: SyntaxKind) -> Option<Token> {
        if self.currently_is(kind) {
            Some(self.bump())
        } else {
            None
        }
    }

    /// Consume `kind` or report `diagnostic` describing what was found instead.
    pub(super) fn expect(&mut self, kind: SyntaxKind, diagnostic: DiagnosticKind) -> Option<Token> {
        if let Some(token) = self.eat(kind) {
            return Some(token);
        }
        self.error_found(diagnostic);
        None
    }

    /// Report `kind` at the current token with a "found ..." detail.
    pub(super) fn error_found(&mut self, kind: DiagnosticKind) {
        let span = self.current_span();
        let found = match self.current() {
            None => "found end of input".to_string(),
            Some(SyntaxKind::Garbage) => format!("found unrecognized input `{}`", self.current_text()),
            Some(k) if k.is_keyword() => format!("found keyword {}", k.describe()),
            Some(
                k @ (SyntaxKind::BraceOpen
                | SyntaxKind::BraceClose
                | SyntaxKind::EqEq
                | SyntaxKind::NotEq),
            ) => format!("found {}", k.describe()),
            Some(k) => format!("found {} `{}`", k.describe(), self.current_text()),
        };
        self.diagnostics.report(kind, span).message(found).emit();
    }

    pub(super) fn line_of(&self, span: TextRange) -> u32 {
        self.lines.line(span.start())
    }

    pub(super) fn span_from(&self, start: TextSize) -> TextRange {
        TextRange::new(start, self.last_end.max(start))
    }

    pub(super) fn enter_recursion(&mut self) -> bool {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            if self.fatal_error.is_none() {
                self.fatal_error = Some(Error::RecursionLimitExceeded);
            }
            return false;
        }
        self.depth += 1;
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
