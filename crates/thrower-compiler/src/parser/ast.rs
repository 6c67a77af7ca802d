//! Typed AST for programs.
//!
//! Every node keeps its byte span and the 1-based line it starts on, for
//! diagnostics raised while parsing or running.

use text_size::TextRange;
use thrower_core::{Register, Value};

/// A parsed program: one non-empty top-level instruction list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub body: Block,
}

/// Instruction list, either the program body or a `{ ... }` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub instructions: Vec<Instruction>,
    pub span: TextRange,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub kind: InstructionKind,
    pub span: TextRange,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstructionKind {
    Resolve(Operand),
    Sleep(i64),
    Repeat {
        count: i64,
        body: Block,
    },
    Load(RegisterRef),
    Store(RegisterRef),
    IfEq {
        register: RegisterRef,
        operand: Operand,
        body: Block,
    },
    IfNe {
        register: RegisterRef,
        operand: Operand,
        body: Block,
    },
    AssertEq {
        register: RegisterRef,
        operand: Operand,
    },
    AssertNe {
        register: RegisterRef,
        operand: Operand,
    },
}

/// Comparison operator shared by `if` and `assert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Eq,
    Ne,
}

impl Comparison {
    pub fn holds(self, lhs: &Value, rhs: &Value) -> bool {
        match self {
            Comparison::Eq => lhs == rhs,
            Comparison::Ne => lhs != rhs,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::Eq => "==",
            Comparison::Ne => "!=",
        }
    }
}

impl InstructionKind {
    /// Source keyword of the instruction.
    pub fn keyword(&self) -> &'static str {
        match self {
            InstructionKind::Resolve(_) => "resolve",
            InstructionKind::Sleep(_) => "sleep",
            InstructionKind::Repeat { .. } => "repeat",
            InstructionKind::Load(_) => "load",
            InstructionKind::Store(_) => "store",
            InstructionKind::IfEq { .. } | InstructionKind::IfNe { .. } => "if",
            InstructionKind::AssertEq { .. } | InstructionKind::AssertNe { .. } => "assert",
        }
    }

    /// Node name used in AST dumps.
    pub fn name(&self) -> &'static str {
        match self {
            InstructionKind::Resolve(_) => "Resolve",
            InstructionKind::Sleep(_) => "Sleep",
            InstructionKind::Repeat { .. } => "Repeat",
            InstructionKind::Load(_) => "Load",
            InstructionKind::Store(_) => "Store",
            InstructionKind::IfEq { .. } => "IfEq",
            InstructionKind::IfNe { .. } => "IfNe",
            InstructionKind::AssertEq { .. } => "AssertEq",
            InstructionKind::AssertNe { .. } => "AssertNe",
        }
    }
}

/// Right-hand side of `resolve`, `if` and `assert`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Int(IntLiteral),
    Str(StringLiteral),
    Register(RegisterRef),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntLiteral {
    pub value: i64,
    pub span: TextRange,
    pub line: u32,
}

/// String literal with its quotes stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    pub value: String,
    pub span: TextRange,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterRef {
    pub register: Register,
    pub span: TextRange,
    pub line: u32,
}
