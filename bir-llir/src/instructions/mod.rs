//! IR Instructions
//! 
//! An `Instruction` holds its result identity, the opcode payload, metadata
//! attachments and a memoized result type. The type is computed on first
//! query and never changes afterwards; constructors query it once so that
//! an untypeable instruction is rejected before it exists.

use log::trace;
use once_cell::unsync::OnceCell;
use std::fmt;
use crate::error::IrError;
use crate::ident::LocalIdent;
use crate::metadata::MetadataAttachment;
use crate::resolve::resolve_element_type;
use crate::types::Type;
use crate::values::Value;

mod aggregate;
mod vector;

/// Opcode payloads
#[derive(Debug)]
pub enum InstKind {
    /// result = extractvalue x, indices...
    ExtractValue {
        x: Value,
        indices: Vec<u64>,
    },

    /// result = insertvalue x, elem, indices...
    InsertValue {
        x: Value,
        elem: Value,
        indices: Vec<u64>,
    },

    /// result = extractelement x, index
    ExtractElement {
        x: Value,
        index: Value,
    },

    /// result = insertelement x, elem, index
    InsertElement {
        x: Value,
        elem: Value,
        index: Value,
    },

    /// result = shufflevector x, y, mask
    ShuffleVector {
        x: Value,
        y: Value,
        mask: Value,
    },
}

impl InstKind {
    pub fn opcode(&self) -> &'static str {
        match self {
            InstKind::ExtractValue { .. } => "extractvalue",
            InstKind::InsertValue { .. } => "insertvalue",
            InstKind::ExtractElement { .. } => "extractelement",
            InstKind::InsertElement { .. } => "insertelement",
            InstKind::ShuffleVector { .. } => "shufflevector",
        }
    }

    /// Operands in printing order
    pub fn operands(&self) -> Vec<&Value> {
        match self {
            InstKind::ExtractValue { x, .. } => vec![x],
            InstKind::InsertValue { x, elem, .. } => vec![x, elem],
            InstKind::ExtractElement { x, index } => vec![x, index],
            InstKind::InsertElement { x, elem, index } => vec![x, elem, index],
            InstKind::ShuffleVector { x, y, mask } => vec![x, y, mask],
        }
    }

    fn result_type(&self) -> Result<Type, IrError> {
        match self {
            InstKind::ExtractValue { x, indices } => {
                resolve_element_type(x.ty()?, indices).cloned()
            }
            InstKind::InsertValue { x, .. } | InstKind::InsertElement { x, .. } => {
                x.ty().cloned()
            }
            InstKind::ExtractElement { x, .. } => {
                let (_, elem) = vector_parts(x.ty()?)?;
                Ok(elem.clone())
            }
            InstKind::ShuffleVector { x, mask, .. } => {
                let (_, elem) = vector_parts(x.ty()?)?;
                let (len, _) = vector_parts(mask.ty()?)?;
                Ok(Type::vector(len, elem.clone()))
            }
        }
    }
}

fn vector_parts(ty: &Type) -> Result<(u64, &Type), IrError> {
    ty.vector_parts()
        .ok_or_else(|| IrError::ExpectedVector { found: ty.clone() })
}

/// IR Instruction
#[derive(Debug)]
pub struct Instruction {
    ident: LocalIdent,
    kind: InstKind,
    metadata: Vec<MetadataAttachment>,
    typ: OnceCell<Type>,
}

impl Instruction {
    fn from_kind(kind: InstKind) -> Result<Self, IrError> {
        let inst = Self {
            ident: LocalIdent::new(),
            kind,
            metadata: Vec::new(),
            typ: OnceCell::new(),
        };
        // Compute type.
        inst.ty()?;
        Ok(inst)
    }

    /// Name the result instead of leaving it to function numbering
    pub fn with_name(mut self, name: &str) -> Self {
        self.ident = LocalIdent::named(name);
        self
    }

    pub fn with_metadata(mut self, attachment: MetadataAttachment) -> Self {
        self.metadata.push(attachment);
        self
    }

    pub fn ident(&self) -> &LocalIdent {
        &self.ident
    }

    pub fn kind(&self) -> &InstKind {
        &self.kind
    }

    pub fn opcode(&self) -> &'static str {
        self.kind.opcode()
    }

    pub fn metadata(&self) -> &[MetadataAttachment] {
        &self.metadata
    }

    /// Result type, computed on first query and cached
    pub fn ty(&self) -> Result<&Type, IrError> {
        self.typ.get_or_try_init(|| {
            let ty = self.kind.result_type()?;
            trace!("{} result type {ty}", self.kind.opcode());
            Ok(ty)
        })
    }

    pub fn is_type_cached(&self) -> bool {
        self.typ.get().is_some()
    }

    /// Full instruction line, e.g. `%3 = extractvalue {i32, i32} %agg, 0`
    pub fn ll_string(&self) -> String {
        self.ll().to_string()
    }

    pub(crate) fn ll(&self) -> LlInst<'_> {
        LlInst(self)
    }
}

/// Type-value pair of the result, as used in operand position
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ty = self.ty().map_err(|_| fmt::Error)?;
        write!(f, "{} {}", ty, self.ident.ident())
    }
}

pub(crate) struct LlInst<'a>(&'a Instruction);

impl fmt::Display for LlInst<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inst = self.0;
        write!(f, "{} = {}", inst.ident.ident(), inst.opcode())?;
        for (i, operand) in inst.kind.operands().into_iter().enumerate() {
            if i > 0 { write!(f, ",")?; }
            write!(f, " {operand}")?;
        }
        match &inst.kind {
            InstKind::ExtractValue { indices, .. } | InstKind::InsertValue { indices, .. } => {
                for index in indices {
                    write!(f, ", {index}")?;
                }
            }
            _ => {}
        }
        for md in &inst.metadata {
            write!(f, ", {md}")?;
        }
        Ok(())
    }
}
