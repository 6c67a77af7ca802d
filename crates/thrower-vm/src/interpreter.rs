//! Tree-walking evaluator.
//!
//! Every block entry and every instruction is admitted against the budget
//! before it runs. Operands are part of their instruction and cost nothing on
//! their own. A rejected step does not run and leaves the budget as it was.

use std::time::Instant;

use thrower_compiler::{
    Block, Comparison, Instruction, InstructionKind, Operand, Program, RegisterRef, TextRange,
};
use thrower_core::{RunConfig, Target, Value};
use tracing::{debug, info, info_span, warn};

use crate::budget::{Budget, Cost};
use crate::error::{RuntimeError, RuntimeErrorKind};
use crate::registers::RegisterFile;
use crate::resolver::{DnsResolver, Resolve};

/// Executes one program against one register file and budget.
///
/// Instances are not meant to be shared between runs of unrelated programs;
/// build a fresh one per run.
pub struct Interpreter<R> {
    resolver: R,
    budget: Budget,
    registers: RegisterFile,
    suffix: String,
    id: u64,
}

/// Builder for [`Interpreter`] instances.
pub struct InterpreterBuilder<R> {
    resolver: R,
    config: RunConfig,
    budget: Option<Budget>,
    id: u64,
}

impl<R: Resolve> InterpreterBuilder<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            config: RunConfig::default(),
            budget: None,
            id: 0,
        }
    }

    /// Take suffix, compute and deadline from `config`.
    pub fn config(mut self, config: RunConfig) -> Self {
        self.config = config;
        self
    }

    /// Use an explicit budget instead of one derived from the config at build time.
    pub fn budget(mut self, budget: Budget) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config = self.config.suffix(suffix);
        self
    }

    /// Identifier recorded on every log event of the run.
    pub fn id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    pub fn build(self) -> Interpreter<R> {
        Interpreter {
            budget: self
                .budget
                .unwrap_or_else(|| Budget::from_config(&self.config)),
            resolver: self.resolver,
            registers: RegisterFile::new(),
            suffix: self.config.suffix,
            id: self.id,
        }
    }
}

impl Interpreter<DnsResolver> {
    /// Builder resolving over UDP against `target`.
    pub fn for_target(target: Target) -> InterpreterBuilder<DnsResolver> {
        InterpreterBuilder::new(DnsResolver::new(target))
    }
}

impl<R: Resolve> Interpreter<R> {
    pub fn builder(resolver: R) -> InterpreterBuilder<R> {
        InterpreterBuilder::new(resolver)
    }

    pub fn budget(&self) -> Budget {
        self.budget
    }

    pub fn registers(&self) -> &RegisterFile {
        &self.registers
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Run `program` to completion or to its first stop.
    ///
    /// Returns the result of the program's last instruction, `None` when that
    /// instruction produced none.
    pub fn run(&mut self, program: &Program) -> Result<Option<Value>, RuntimeError> {
        let span = info_span!("interpreter", id = self.id);
        let _enter = span.enter();

        info!(
            compute = self.budget.remaining_compute(),
            suffix = %self.suffix,
            "run started"
        );
        let result = self.eval_block(&program.body);
        match &result {
            Ok(value) => info!(
                remaining_compute = self.budget.remaining_compute(),
                ?value,
                "run finished"
            ),
            Err(err) => warn!(line = err.line, error = %err.kind, "run stopped"),
        }
        result
    }

    fn admit(&mut self, cost: Cost, line: u32, span: TextRange) -> Result<(), RuntimeError> {
        self.budget = self
            .budget
            .admit(cost, Instant::now())
            .map_err(|kind| RuntimeError::new(kind, line, span))?;
        Ok(())
    }

    fn eval_block(&mut self, block: &Block) -> Result<Option<Value>, RuntimeError> {
        self.admit(Cost::STEP, block.line, block.span)?;

        let mut result = None;
        for instruction in &block.instructions {
            result = self.eval_instruction(instruction)?;
            if let Some(value) = &result {
                self.registers.set_last(value.clone());
            }
        }
        Ok(result)
    }

    fn eval_instruction(&mut self, instr: &Instruction) -> Result<Option<Value>, RuntimeError> {
        let line = instr.line;
        let stop = |kind: RuntimeErrorKind| RuntimeError::new(kind, line, instr.span);

        let cost = Cost::for_instruction(&instr.kind).map_err(stop)?;
        self.admit(cost, line, instr.span)?;
        debug!(
            line,
            instruction = instr.kind.keyword(),
            remaining_compute = self.budget.remaining_compute(),
            "step"
        );

        match &instr.kind {
            InstructionKind::Resolve(operand) => {
                let label = self.eval_operand(operand)?;
                self.resolve(&label, line, instr.span).map(Some)
            }
            InstructionKind::Sleep(ms) => {
                let Ok(millis) = u64::try_from(*ms) else {
                    return Err(stop(RuntimeErrorKind::NegativeSleep(*ms)));
                };
                debug!(line, ms, "sleeping");
                std::thread::sleep(std::time::Duration::from_millis(millis));
                Ok(Some(Value::Int(*ms)))
            }
            InstructionKind::Repeat { count, body } => {
                let mut result = None;
                for iteration in 0..(*count).max(0) {
                    debug!(line, iteration, count, "repeat");
                    result = self.eval_block(body)?;
                }
                Ok(result)
            }
            InstructionKind::Load(reg) => {
                let value = self.load(reg)?;
                debug!(line, register = %reg.register, ?value, "load");
                Ok(Some(value))
            }
            InstructionKind::Store(reg) => {
                let value = self.registers.store(reg.register).map_err(stop)?;
                debug!(line, register = %reg.register, ?value, "store");
                Ok(Some(value))
            }
            InstructionKind::IfEq {
                register,
                operand,
                body,
            } => self.eval_if(Comparison::Eq, register, operand, body, line),
            InstructionKind::IfNe {
                register,
                operand,
                body,
            } => self.eval_if(Comparison::Ne, register, operand, body, line),
            InstructionKind::AssertEq { register, operand } => {
                self.eval_assert(Comparison::Eq, register, operand, instr)
            }
            InstructionKind::AssertNe { register, operand } => {
                self.eval_assert(Comparison::Ne, register, operand, instr)
            }
        }
    }

    /// An untaken branch yields the empty string, not "no result".
    fn eval_if(
        &mut self,
        comparison: Comparison,
        register: &RegisterRef,
        operand: &Operand,
        body: &Block,
        line: u32,
    ) -> Result<Option<Value>, RuntimeError> {
        let actual = self.load(register)?;
        let expected = self.eval_operand(operand)?;
        let taken = comparison.holds(&actual, &expected);
        debug!(
            line,
            register = %register.register,
            ?actual,
            op = comparison.symbol(),
            ?expected,
            taken,
            "if"
        );

        if taken {
            self.eval_block(body)
        } else {
            Ok(Some(Value::empty()))
        }
    }

    fn eval_assert(
        &mut self,
        comparison: Comparison,
        register: &RegisterRef,
        operand: &Operand,
        instr: &Instruction,
    ) -> Result<Option<Value>, RuntimeError> {
        let actual = self.load(register)?;
        let expected = self.eval_operand(operand)?;
        let holds = comparison.holds(&actual, &expected);
        debug!(
            line = instr.line,
            register = %register.register,
            ?actual,
            op = comparison.symbol(),
            ?expected,
            holds,
            "assert"
        );

        if !holds {
            return Err(RuntimeError::new(
                RuntimeErrorKind::AssertionFailed {
                    register: register.register,
                    comparison: comparison.symbol(),
                    expected,
                    actual,
                },
                instr.line,
                instr.span,
            ));
        }
        Ok(None)
    }

    fn eval_operand(&self, operand: &Operand) -> Result<Value, RuntimeError> {
        match operand {
            Operand::Register(reg) => self.load(reg),
            Operand::Int(lit) => Ok(Value::Int(lit.value)),
            Operand::Str(lit) => Ok(Value::Str(lit.value.clone())),
        }
    }

    fn load(&self, reg: &RegisterRef) -> Result<Value, RuntimeError> {
        self.registers
            .load(reg.register)
            .map_err(|kind| RuntimeError::new(kind, reg.line, reg.span))
    }

    /// Benign failures become the empty string; anything else stops the run.
    fn resolve(&mut self, label: &Value, line: u32, span: TextRange) -> Result<Value, RuntimeError> {
        let qname = format!("{label}{}", self.suffix);
        match self.resolver.resolve(&qname, Cost::RESOLVE.duration) {
            Ok(addr) => {
                debug!(line, %qname, %addr, "resolved");
                Ok(Value::Str(addr.to_string()))
            }
            Err(err) if err.is_benign() => {
                debug!(line, %qname, reason = %err, "resolved to nothing");
                Ok(Value::empty())
            }
            Err(err) => Err(RuntimeError::new(
                RuntimeErrorKind::ResolverFault(err.to_string()),
                line,
                span,
            )),
        }
    }
}
