//! Backend IR - LLVM-style Intermediate Representation
//! 
//! This crate models the typed values, instructions and basic blocks that
//! are serialized to LLVM-style textual IR.
//! 
//! ## Architecture
//! 
//! - `types` - Type system (`Type`, `FloatKind`)
//! - `resolve` - Element type resolution along an index path
//! - `ident` - Assign-once local identities (`%name`, `%3`)
//! - `values` - Shared operand handles (parameters, constants, instructions)
//! - `metadata` - Metadata attachments (`!dbg !3`)
//! - `instructions` - Aggregate and vector instructions
//! - `blocks` - Append-only basic blocks
//! - `function` / `module` - Containers and id assignment
//! 
//! Everything here is single-threaded: values are `Rc` handles and the
//! instruction type cache is an unsynchronized `OnceCell`.

pub use self::types::{Type, FloatKind};
pub use self::resolve::resolve_element_type;
pub use self::ident::LocalIdent;
pub use self::values::{Value, Param, Constant};
pub use self::metadata::MetadataAttachment;
pub use self::instructions::{Instruction, InstKind};
pub use self::blocks::{Block, Terminator};
pub use self::function::Function;
pub use self::module::Module;
pub use self::error::IrError;

mod types;
mod resolve;
mod ident;
mod values;
mod metadata;
mod instructions;
mod blocks;
mod function;
mod module;
mod error;
