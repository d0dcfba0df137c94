//! Backend IR - Common Types and Utilities
//! 
//! This crate contains the error type, source locations and target
//! selection shared by the LLVM-style IR, the WebAssembly value types
//! and the compile driver.

pub mod error;
pub mod source_loc;
pub mod target;

pub use error::CompilerError;
pub use source_loc::SourceLocation;
pub use target::Machine;
