//! IR construction errors
//! 
//! All of these are upstream contract violations: the typed program handed
//! to the backend asked for an instruction that cannot be typed. They are
//! reported, never retried.

use bir_common::{CompilerError, SourceLocation};
use thiserror::Error;
use crate::types::Type;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IrError {
    #[error("cannot index into non-aggregate type {ty}")]
    UnsupportedAggregate { ty: Type },

    #[error("field index {index} out of range for {ty} with {len} fields")]
    FieldIndexOutOfRange {
        index: u64,
        len: usize,
        ty: Type,
    },

    #[error("insertvalue element type mismatch: expected {expected}, got {found}")]
    ElementTypeMismatch { expected: Type, found: Type },

    #[error("expected vector type, got {found}")]
    ExpectedVector { found: Type },

    #[error("identifier already assigned as {existing}")]
    IdentAlreadyAssigned { existing: String },

    #[error("local name {name} defined more than once in @{function}")]
    DuplicateLocalName { function: String, name: String },
}

impl IrError {
    /// Attach the source location of the construct being lowered
    pub fn at(self, location: SourceLocation) -> CompilerError {
        CompilerError::backend_error(self.to_string(), location)
    }
}

impl From<IrError> for CompilerError {
    fn from(err: IrError) -> Self {
        CompilerError::internal_error(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = IrError::FieldIndexOutOfRange {
            index: 2,
            len: 2,
            ty: Type::struct_of(vec![Type::I32, Type::I32]),
        };
        assert_eq!(err.to_string(), "field index 2 out of range for {i32, i32} with 2 fields");

        let err = IrError::ElementTypeMismatch { expected: Type::I32, found: Type::I64 };
        assert_eq!(err.to_string(), "insertvalue element type mismatch: expected i32, got i64");
    }

    #[test]
    fn test_attach_location() {
        let err = IrError::UnsupportedAggregate { ty: Type::DOUBLE }
            .at(SourceLocation::new("vec.wa", 12, 4));
        assert_eq!(
            err,
            CompilerError::BackendError {
                location: SourceLocation::new("vec.wa", 12, 4),
                message: "cannot index into non-aggregate type double".to_string(),
            }
        );
    }

    #[test]
    fn test_into_compiler_error() {
        let err: CompilerError = IrError::ExpectedVector { found: Type::I32 }.into();
        assert_eq!(err.to_string(), "Internal compiler error: expected vector type, got i32");
    }
}
