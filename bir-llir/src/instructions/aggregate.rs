//! Aggregate instructions: extractvalue, insertvalue

use crate::error::IrError;
use crate::resolve::resolve_element_type;
use crate::values::Value;
use super::{InstKind, Instruction};

impl Instruction {
    /// extractvalue of the element of `x` at `indices`
    pub fn new_extract_value(x: &Value, indices: &[u64]) -> Result<Self, IrError> {
        Self::from_kind(InstKind::ExtractValue {
            x: x.clone(),
            indices: indices.to_vec(),
        })
    }

    /// insertvalue of `elem` into `x` at `indices`.
    ///
    /// `elem` must have exactly the type found at that position.
    pub fn new_insert_value(x: &Value, elem: &Value, indices: &[u64]) -> Result<Self, IrError> {
        let expected = resolve_element_type(x.ty()?, indices)?;
        let found = elem.ty()?;
        if expected != found {
            return Err(IrError::ElementTypeMismatch {
                expected: expected.clone(),
                found: found.clone(),
            });
        }
        Self::from_kind(InstKind::InsertValue {
            x: x.clone(),
            elem: elem.clone(),
            indices: indices.to_vec(),
        })
    }
}
