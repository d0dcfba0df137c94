//! Basic Block Management
//! 
//! A block owns its instructions in program order. Instructions only enter
//! a block through `append` (directly or via the `new_*` helpers) and are
//! never removed or reordered.

use log::debug;
use std::fmt;
use std::rc::Rc;
use crate::error::IrError;
use crate::ident::LocalIdent;
use crate::instructions::Instruction;
use crate::values::Value;

/// Block terminators
#[derive(Debug, Clone)]
pub enum Terminator {
    /// ret <value> or ret void
    Ret(Option<Value>),
    Unreachable,
}

impl fmt::Display for Terminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terminator::Ret(Some(value)) => write!(f, "ret {value}"),
            Terminator::Ret(None) => write!(f, "ret void"),
            Terminator::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// Basic Block - a straight-line sequence of instructions
#[derive(Debug, Default)]
pub struct Block {
    ident: LocalIdent,
    insts: Vec<Rc<Instruction>>,
    term: Option<Terminator>,
}

impl Block {
    /// A block whose label is numbered by its function
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: &str) -> Self {
        Self {
            ident: LocalIdent::named(name),
            ..Self::default()
        }
    }

    pub fn ident(&self) -> &LocalIdent {
        &self.ident
    }

    /// Append an instruction and return the shared handle to it
    pub fn append(&mut self, inst: Instruction) -> Rc<Instruction> {
        debug!("block {}: append {} #{}", self.ident.label(), inst.opcode(), self.insts.len());
        let inst = Rc::new(inst);
        self.insts.push(Rc::clone(&inst));
        inst
    }

    pub fn new_extract_value(&mut self, x: &Value, indices: &[u64]) -> Result<Value, IrError> {
        let inst = Instruction::new_extract_value(x, indices)?;
        Ok(self.append(inst).into())
    }

    pub fn new_insert_value(&mut self, x: &Value, elem: &Value, indices: &[u64]) -> Result<Value, IrError> {
        let inst = Instruction::new_insert_value(x, elem, indices)?;
        Ok(self.append(inst).into())
    }

    pub fn new_extract_element(&mut self, x: &Value, index: &Value) -> Result<Value, IrError> {
        let inst = Instruction::new_extract_element(x, index)?;
        Ok(self.append(inst).into())
    }

    pub fn new_insert_element(&mut self, x: &Value, elem: &Value, index: &Value) -> Result<Value, IrError> {
        let inst = Instruction::new_insert_element(x, elem, index)?;
        Ok(self.append(inst).into())
    }

    pub fn new_shuffle_vector(&mut self, x: &Value, y: &Value, mask: &Value) -> Result<Value, IrError> {
        let inst = Instruction::new_shuffle_vector(x, y, mask)?;
        Ok(self.append(inst).into())
    }

    pub fn instructions(&self) -> &[Rc<Instruction>] {
        &self.insts
    }

    pub fn len(&self) -> usize {
        self.insts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.insts.is_empty()
    }

    pub fn set_term(&mut self, term: Terminator) {
        self.term = Some(term);
    }

    pub fn term(&self) -> Option<&Terminator> {
        self.term.as_ref()
    }

    pub fn has_terminator(&self) -> bool {
        self.term.is_some()
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.ident.label())?;
        for inst in &self.insts {
            writeln!(f, "  {}", inst.ll())?;
        }
        if let Some(term) = &self.term {
            writeln!(f, "  {term}")?;
        }
        Ok(())
    }
}
