//! IR Type System
//! 
//! Defines the first-class types of the LLVM-style IR. Types are plain
//! values compared structurally; there are no named (nominal) types at
//! this layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Floating point kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloatKind {
    Float,  // 32-bit IEEE
    Double, // 64-bit IEEE
}

/// IR Type system
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    /// Void type
    Void,

    /// Integer type with bit width
    Int(u32),

    /// Floating point type
    Float(FloatKind),

    /// Pointer type
    Pointer(Box<Type>),

    /// Array type [len x elem]
    Array { len: u64, elem: Box<Type> },

    /// Vector type <len x elem>
    Vector { len: u64, elem: Box<Type> },

    /// Literal struct type {a, b}, packed <{a, b}>
    Struct { fields: Vec<Type>, packed: bool },
}

impl Type {
    pub const VOID: Type = Type::Void;
    pub const I1: Type = Type::Int(1);
    pub const I8: Type = Type::Int(8);
    pub const I16: Type = Type::Int(16);
    pub const I32: Type = Type::Int(32);
    pub const I64: Type = Type::Int(64);
    pub const FLOAT: Type = Type::Float(FloatKind::Float);
    pub const DOUBLE: Type = Type::Float(FloatKind::Double);

    pub fn pointer(elem: Type) -> Type {
        Type::Pointer(Box::new(elem))
    }

    pub fn array(len: u64, elem: Type) -> Type {
        Type::Array { len, elem: Box::new(elem) }
    }

    pub fn vector(len: u64, elem: Type) -> Type {
        Type::Vector { len, elem: Box::new(elem) }
    }

    pub fn struct_of(fields: Vec<Type>) -> Type {
        Type::Struct { fields, packed: false }
    }

    pub fn packed_struct(fields: Vec<Type>) -> Type {
        Type::Struct { fields, packed: true }
    }

    /// Check if this is a scalar, non-derived type
    pub fn is_primitive(&self) -> bool {
        matches!(self, Type::Void | Type::Int(_) | Type::Float(_))
    }

    /// Check if this type can be addressed by an index path
    pub fn is_aggregate(&self) -> bool {
        matches!(self, Type::Array { .. } | Type::Struct { .. })
    }

    /// Get the length and element type of a vector type
    pub fn vector_parts(&self) -> Option<(u64, &Type)> {
        match self {
            Type::Vector { len, elem } => Some((*len, elem)),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Void => write!(f, "void"),
            Type::Int(bits) => write!(f, "i{bits}"),
            Type::Float(FloatKind::Float) => write!(f, "float"),
            Type::Float(FloatKind::Double) => write!(f, "double"),
            Type::Pointer(elem) => write!(f, "{elem}*"),
            Type::Array { len, elem } => write!(f, "[{len} x {elem}]"),
            Type::Vector { len, elem } => write!(f, "<{len} x {elem}>"),
            Type::Struct { fields, packed } => {
                if *packed { write!(f, "<")?; }
                write!(f, "{{")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{field}")?;
                }
                write!(f, "}}")?;
                if *packed { write!(f, ">")?; }
                Ok(())
            }
        }
    }
}
