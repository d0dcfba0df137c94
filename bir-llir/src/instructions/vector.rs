//! Vector instructions: extractelement, insertelement, shufflevector
//! 
//! Operand compatibility (lane types, index types) is left to the caller.
//! Only the result type computation needs vector operands.

use crate::error::IrError;
use crate::values::Value;
use super::{InstKind, Instruction};

impl Instruction {
    pub fn new_extract_element(x: &Value, index: &Value) -> Result<Self, IrError> {
        Self::from_kind(InstKind::ExtractElement {
            x: x.clone(),
            index: index.clone(),
        })
    }

    pub fn new_insert_element(x: &Value, elem: &Value, index: &Value) -> Result<Self, IrError> {
        Self::from_kind(InstKind::InsertElement {
            x: x.clone(),
            elem: elem.clone(),
            index: index.clone(),
        })
    }

    pub fn new_shuffle_vector(x: &Value, y: &Value, mask: &Value) -> Result<Self, IrError> {
        Self::from_kind(InstKind::ShuffleVector {
            x: x.clone(),
            y: y.clone(),
            mask: mask.clone(),
        })
    }
}
