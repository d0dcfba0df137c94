//! Backend IR - WebAssembly Value Types
//! 
//! The wasm target only knows four machine types, but the compiler keeps
//! signedness around: `U32` and `I32` are different kinds that share the
//! wire name `i32`. Compare value types with `equal` (or `==`), never by
//! name.
//! 
//! - `value_type` - Primitive value types
//! - `var` - Named variables
//! - `func` / `module` - Local tables and WAT text output

pub use self::value_type::ValueType;
pub use self::var::Var;
pub use self::func::Func;
pub use self::module::Module;
pub use self::error::WatError;

mod value_type;
mod var;
mod func;
mod module;
mod error;
