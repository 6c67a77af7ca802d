//! Register file and the `last` result slot.

use std::collections::HashMap;

use thrower_core::{Register, Value};

use crate::error::RuntimeErrorKind;

/// Numbered registers plus the result of the most recent instruction.
///
/// `last` is kept apart from the numbered registers so no register index can
/// shadow it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    registers: HashMap<Register, Value>,
    last: Option<Value>,
}

impl RegisterFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&self, register: Register) -> Result<Value, RuntimeErrorKind> {
        self.registers
            .get(&register)
            .cloned()
            .ok_or(RuntimeErrorKind::UninitializedRegister(register))
    }

    /// Copy `last` into `register` and return the copied value.
    pub fn store(&mut self, register: Register) -> Result<Value, RuntimeErrorKind> {
        let value = self
            .last
            .clone()
            .ok_or(RuntimeErrorKind::MissingLast(register))?;
        self.registers.insert(register, value.clone());
        Ok(value)
    }

    pub fn get(&self, register: Register) -> Option<&Value> {
        self.registers.get(&register)
    }

    pub fn last(&self) -> Option<&Value> {
        self.last.as_ref()
    }

    pub(crate) fn set_last(&mut self, value: Value) {
        self.last = Some(value);
    }

    pub fn len(&self) -> usize {
        self.registers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registers.is_empty()
    }

    /// Set registers in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Register, &Value)> {
        let mut entries: Vec<_> = self.registers.iter().map(|(r, v)| (*r, v)).collect();
        entries.sort_by_key(|(r, _)| *r);
        entries.into_iter()
    }
}
