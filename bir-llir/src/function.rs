//! Function definitions and local numbering

use log::trace;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;
use crate::blocks::Block;
use crate::error::IrError;
use crate::ident::{escape_name, LocalIdent};
use crate::types::Type;
use crate::values::{Param, Value};

/// Function in IR
#[derive(Debug)]
pub struct Function {
    name: String,
    return_type: Type,
    params: Vec<Rc<Param>>,
    blocks: Vec<Block>,
}

impl Function {
    pub fn new(name: &str, return_type: Type) -> Self {
        Self {
            name: name.to_string(),
            return_type,
            params: Vec::new(),
            blocks: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn return_type(&self) -> &Type {
        &self.return_type
    }

    /// Add a parameter; an empty name leaves it to numbering
    pub fn new_param(&mut self, name: &str, ty: Type) -> Value {
        let param = Rc::new(Param::new(name, ty));
        self.params.push(Rc::clone(&param));
        param.into()
    }

    pub fn params(&self) -> &[Rc<Param>] {
        &self.params
    }

    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn entry_block(&self) -> Option<&Block> {
        self.blocks.first()
    }

    /// Number every unnamed parameter, block and instruction result.
    ///
    /// Numbers start at 0 and follow printing order. Identities that are
    /// already assigned are kept, so calling this twice is harmless.
    /// A local name used twice in the function is an error.
    pub fn assign_ids(&self) -> Result<(), IrError> {
        self.check_local_names()?;

        let mut next_id = 0u64;
        let mut assign = |ident: &LocalIdent| -> Result<(), IrError> {
            if !ident.is_assigned() {
                ident.set_id(next_id)?;
                next_id += 1;
            }
            Ok(())
        };

        for param in &self.params {
            assign(param.ident())?;
        }
        for block in &self.blocks {
            assign(block.ident())?;
            for inst in block.instructions() {
                assign(inst.ident())?;
            }
        }
        trace!("@{}: assigned {} local ids", self.name, next_id);
        Ok(())
    }

    /// Parameters, block labels and instruction results share one namespace
    fn check_local_names(&self) -> Result<(), IrError> {
        let idents = self
            .params
            .iter()
            .map(|param| param.ident())
            .chain(self.blocks.iter().flat_map(|block| {
                std::iter::once(block.ident())
                    .chain(block.instructions().iter().map(|inst| inst.ident()))
            }));

        let mut seen = HashSet::new();
        for name in idents.filter_map(LocalIdent::name) {
            if !seen.insert(name) {
                return Err(IrError::DuplicateLocalName {
                    function: self.name.clone(),
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "define {} @{}(", self.return_type, escape_name(&self.name))?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 { write!(f, ", ")?; }
            write!(f, "{param}")?;
        }
        writeln!(f, ") {{")?;
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 { writeln!(f)?; }
            write!(f, "{block}")?;
        }
        writeln!(f, "}}")
    }
}
