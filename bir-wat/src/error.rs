//! WAT emission errors

use bir_common::{CompilerError, SourceLocation};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WatError {
    #[error("duplicate name ${name} in {scope}")]
    DuplicateName { scope: String, name: String },

    #[error("empty name in {scope}")]
    EmptyName { scope: String },

    #[error("invalid character in name ${name} in {scope}")]
    InvalidName { scope: String, name: String },
}

impl WatError {
    /// Attach the source location of the declaration being lowered
    pub fn at(self, location: SourceLocation) -> CompilerError {
        CompilerError::backend_error(self.to_string(), location)
    }
}

impl From<WatError> for CompilerError {
    fn from(err: WatError) -> Self {
        CompilerError::internal_error(err.to_string())
    }
}
