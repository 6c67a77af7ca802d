use std::fmt::{Display, Write};

use text_size::TextRange;

use super::ast::{Block, InstructionKind, Operand, Program, RegisterRef};

/// Syntactic role of a printed fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Role {
    Node,
    Register,
    Literal,
    Location,
}

impl Role {
    fn ansi(self) -> &'static str {
        match self {
            Role::Node => "\x1b[1;34m",
            Role::Register => "\x1b[35m",
            Role::Literal => "\x1b[32m",
            Role::Location => "\x1b[2m",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Indented dump of a parsed program, one node per line.
pub struct AstPrinter<'p> {
    program: &'p Program,
    lines: bool,
    spans: bool,
    colored: bool,
}

impl<'p> AstPrinter<'p> {
    pub fn new(program: &'p Program) -> Self {
        Self {
            program,
            lines: false,
            spans: false,
            colored: false,
        }
    }

    /// Append the 1-based source line to each node.
    pub fn with_lines(mut self, value: bool) -> Self {
        self.lines = value;
        self
    }

    /// Append the byte span to each node.
    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let body = &self.program.body;
        self.paint(Role::Node, "Program", w)?;
        self.format_location(body.line, body.span, w)?;
        writeln!(w)?;
        self.format_block(body, 1, w)
    }

    fn format_block(&self, block: &Block, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        for instr in &block.instructions {
            write!(w, "{}", "  ".repeat(indent))?;
            self.paint(Role::Node, instr.kind.name(), w)?;

            match &instr.kind {
                InstructionKind::Resolve(operand) => {
                    write!(w, " ")?;
                    self.format_operand(operand, w)?;
                }
                InstructionKind::Sleep(ms) => {
                    write!(w, " ")?;
                    self.paint(Role::Literal, ms, w)?;
                }
                InstructionKind::Repeat { count, .. } => {
                    write!(w, " ")?;
                    self.paint(Role::Literal, count, w)?;
                }
                InstructionKind::Load(reg) | InstructionKind::Store(reg) => {
                    write!(w, " ")?;
                    self.format_register(reg, w)?;
                }
                InstructionKind::IfEq {
                    register, operand, ..
                }
                | InstructionKind::IfNe {
                    register, operand, ..
                }
                | InstructionKind::AssertEq { register, operand }
                | InstructionKind::AssertNe { register, operand } => {
                    write!(w, " ")?;
                    self.format_register(register, w)?;
                    write!(w, " ")?;
                    self.format_operand(operand, w)?;
                }
            }

            self.format_location(instr.line, instr.span, w)?;
            writeln!(w)?;

            match &instr.kind {
                InstructionKind::Repeat { body, .. }
                | InstructionKind::IfEq { body, .. }
                | InstructionKind::IfNe { body, .. } => self.format_block(body, indent + 1, w)?,
                _ => {}
            }
        }
        Ok(())
    }

    fn format_register(&self, reg: &RegisterRef, w: &mut impl Write) -> std::fmt::Result {
        self.paint(Role::Register, reg.register, w)
    }

    fn format_operand(&self, operand: &Operand, w: &mut impl Write) -> std::fmt::Result {
        match operand {
            Operand::Int(lit) => self.paint(Role::Literal, lit.value, w),
            Operand::Str(lit) => self.paint(Role::Literal, format_args!("{:?}", lit.value), w),
            Operand::Register(reg) => self.format_register(reg, w),
        }
    }

    fn format_location(&self, line: u32, span: TextRange, w: &mut impl Write) -> std::fmt::Result {
        if self.lines {
            write!(w, " ")?;
            self.paint(Role::Location, format_args!("@{line}"), w)?;
        }
        if self.spans {
            let (start, end) = (u32::from(span.start()), u32::from(span.end()));
            write!(w, " ")?;
            self.paint(Role::Location, format_args!("[{start}..{end}]"), w)?;
        }
        Ok(())
    }

    fn paint(&self, role: Role, text: impl Display, w: &mut impl Write) -> std::fmt::Result {
        if self.colored {
            write!(w, "{}{text}{RESET}", role.ansi())
        } else {
            write!(w, "{text}")
        }
    }
}

impl Program {
    pub fn printer(&self) -> AstPrinter<'_> {
        AstPrinter::new(self)
    }
}
