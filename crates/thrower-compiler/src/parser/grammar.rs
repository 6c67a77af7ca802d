//! Grammar productions for the program language.
//!
//! ```text
//! program      := instruction+
//! block        := '{' instruction+ '}'
//! instruction  := 'resolve' operand
//!               | 'sleep' INTEGER
//!               | 'repeat' INTEGER block
//!               | 'load' register
//!               | 'store' register
//!               | 'if' register ('==' | '!=') operand block
//!               | 'assert' register ('==' | '!=') operand
//! register     := 'r' INTEGER
//! operand      := register | STRING | INTEGER
//! ```

use text_size::TextRange;
use thrower_core::Register;

use super::ast::{
    Block, Comparison, Instruction, InstructionKind, IntLiteral, Operand, Program, RegisterRef,
    StringLiteral,
};
use super::core::Parser;
use super::syntax_kind::SyntaxKind;
use crate::diagnostics::DiagnosticKind;

impl Parser<'_> {
    pub(super) fn parse_program(&mut self) -> Option<Program> {
        let start = self.current_span().start();
        let instructions = self.parse_instructions(false)?;
        if instructions.is_empty() {
            self.diagnostics
                .report(DiagnosticKind::EmptyProgram, TextRange::empty(start))
                .emit();
            return None;
        }
        let span = self.span_from(start);
        Some(Program {
            body: Block {
                instructions,
                line: self.line_of(span),
                span,
            },
        })
    }

    /// Instructions up to end of input, or up to (not including) `}` inside a block.
    fn parse_instructions(&mut self, in_block: bool) -> Option<Vec<Instruction>> {
        let mut instructions = Vec::new();
        loop {
            match self.current() {
                None => break,
                Some(SyntaxKind::BraceClose) if in_block => break,
                Some(SyntaxKind::BraceClose) => {
                    let span = self.current_span();
                    self.diagnostics
                        .report(DiagnosticKind::UnmatchedBrace, span)
                        .emit();
                    return None;
                }
                Some(_) => instructions.push(self.parse_instruction()?),
            }
        }
        Some(instructions)
    }

    fn parse_block(&mut self) -> Option<Block> {
        let open = self.expect(SyntaxKind::BraceOpen, DiagnosticKind::ExpectedBlock)?;

        if !self.enter_recursion() {
            return None;
        }
        let instructions = self.parse_instructions(true);
        self.exit_recursion();
        let instructions = instructions?;

        if self.eat(SyntaxKind::BraceClose).is_none() {
            let span = self.current_span();
            self.diagnostics
                .report(DiagnosticKind::UnclosedBlock, span)
                .related_to("block opened here", open.span)
                .emit();
            return None;
        }

        let span = self.span_from(open.span.start());
        if instructions.is_empty() {
            self.diagnostics
                .report(DiagnosticKind::EmptyBlock, span)
                .emit();
            return None;
        }

        Some(Block {
            instructions,
            line: self.line_of(span),
            span,
        })
    }

    fn parse_instruction(&mut self) -> Option<Instruction> {
        let Some(kind) = self.current() else {
            self.error_found(DiagnosticKind::ExpectedInstruction);
            return None;
        };
        let start = self.current_span().start();

        let kind = match kind {
            SyntaxKind::KwResolve => {
                self.bump();
                InstructionKind::Resolve(self.parse_operand("after `resolve`")?)
            }
            SyntaxKind::KwSleep => {
                self.bump();
                InstructionKind::Sleep(self.parse_integer("after `sleep`")?.value)
            }
            SyntaxKind::KwRepeat => {
                self.bump();
                let count = self.parse_integer("after `repeat`")?.value;
                let body = self.parse_block()?;
                InstructionKind::Repeat { count, body }
            }
            SyntaxKind::KwLoad => {
                self.bump();
                InstructionKind::Load(self.parse_register()?)
            }
            SyntaxKind::KwStore => {
                self.bump();
                InstructionKind::Store(self.parse_register()?)
            }
            SyntaxKind::KwIf => {
                self.bump();
                let register = self.parse_register()?;
                let comparison = self.parse_comparison()?;
                let operand = self.parse_operand("after comparison")?;
                let body = self.parse_block()?;
                match comparison {
                    Comparison::Eq => InstructionKind::IfEq {
                        register,
                        operand,
                        body,
                    },
                    Comparison::Ne => InstructionKind::IfNe {
                        register,
                        operand,
                        body,
                    },
                }
            }
            SyntaxKind::KwAssert => {
                self.bump();
                let register = self.parse_register()?;
                let comparison = self.parse_comparison()?;
                let operand = self.parse_operand("after comparison")?;
                match comparison {
                    Comparison::Eq => InstructionKind::AssertEq { register, operand },
                    Comparison::Ne => InstructionKind::AssertNe { register, operand },
                }
            }
            SyntaxKind::Garbage => {
                let span = self.current_span();
                let text = self.current_text();
                self.diagnostics
                    .report(DiagnosticKind::UnexpectedToken, span)
                    .message(format!("unrecognized input `{text}`"))
                    .emit();
                return None;
            }
            _ => {
                self.error_found(DiagnosticKind::ExpectedInstruction);
                return None;
            }
        };

        let span = self.span_from(start);
        Some(Instruction {
            kind,
            line: self.line_of(span),
            span,
        })
    }

    fn parse_operand(&mut self, context: &str) -> Option<Operand> {
        match self.current() {
            Some(SyntaxKind::RegisterPrefix) => Some(Operand::Register(self.parse_register()?)),
            Some(SyntaxKind::Integer) => Some(Operand::Int(self.parse_integer(context)?)),
            Some(SyntaxKind::StringLiteral) => {
                let token = self.bump();
                let text = &self.source[token.span];
                Some(Operand::Str(StringLiteral {
                    value: text[1..text.len() - 1].to_owned(),
                    line: self.line_of(token.span),
                    span: token.span,
                }))
            }
            _ => {
                self.error_found(DiagnosticKind::ExpectedOperand);
                None
            }
        }
    }

    fn parse_register(&mut self) -> Option<RegisterRef> {
        let prefix = self.expect(SyntaxKind::RegisterPrefix, DiagnosticKind::ExpectedRegister)?;
        let index = self.expect(SyntaxKind::Integer, DiagnosticKind::ExpectedRegisterIndex)?;
        let span = prefix.span.cover(index.span);
        let text = &self.source[index.span];

        let Ok(value) = text.parse::<u32>() else {
            self.diagnostics
                .report(DiagnosticKind::InvalidRegisterIndex, span)
                .message(format!("`{text}` is not in 0..={}", u32::MAX))
                .emit();
            return None;
        };

        Some(RegisterRef {
            register: Register(value),
            line: self.line_of(span),
            span,
        })
    }

    fn parse_integer(&mut self, context: &str) -> Option<IntLiteral> {
        if !self.currently_is(SyntaxKind::Integer) {
            let span = self.current_span();
            let found = match self.current() {
                None => "end of input".to_string(),
                Some(_) => format!("`{}`", self.current_text()),
            };
            self.diagnostics
                .report(DiagnosticKind::ExpectedInteger, span)
                .message(format!("{context}, found {found}"))
                .emit();
            return None;
        }

        let token = self.bump();
        let text = &self.source[token.span];
        let Ok(value) = text.parse::<i64>() else {
            self.diagnostics
                .report(DiagnosticKind::IntegerOutOfRange, token.span)
                .message(format!("`{text}` does not fit in 64 bits"))
                .emit();
            return None;
        };

        Some(IntLiteral {
            value,
            line: self.line_of(token.span),
            span: token.span,
        })
    }

    fn parse_comparison(&mut self) -> Option<Comparison> {
        if self.eat(SyntaxKind::EqEq).is_some() {
            return Some(Comparison::Eq);
        }
        if self.eat(SyntaxKind::NotEq).is_some() {
            return Some(Comparison::Ne);
        }
        self.error_found(DiagnosticKind::ExpectedComparison);
        None
    }
}
