//! Primitive value types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of scalar kinds of the wasm target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
}

impl ValueType {
    /// Wire name used in WAT output
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::I32 | ValueType::U32 => "i32",
            ValueType::I64 | ValueType::U64 => "i64",
            ValueType::F32 => "f32",
            ValueType::F64 => "f64",
        }
    }

    /// Kind-exact equality: `I32` and `U32` differ even though both are `i32`
    pub fn equal(&self, other: &ValueType) -> bool {
        self == other
    }

    pub fn is_unsigned(&self) -> bool {
        matches!(self, ValueType::U32 | ValueType::U64)
    }

    pub fn is_float(&self) -> bool {
        matches!(self, ValueType::F32 | ValueType::F64)
    }

    /// Get the size in bytes
    pub fn size_in_bytes(&self) -> u32 {
        match self {
            ValueType::I32 | ValueType::U32 | ValueType::F32 => 4,
            ValueType::I64 | ValueType::U64 | ValueType::F64 => 8,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ValueType; 6] = [
        ValueType::I32,
        ValueType::U32,
        ValueType::I64,
        ValueType::U64,
        ValueType::F32,
        ValueType::F64,
    ];

    #[test]
    fn test_wire_names() {
        let names: Vec<_> = ALL.iter().map(|t| t.name()).collect();
        assert_eq!(names, ["i32", "i32", "i64", "i64", "f32", "f64"]);
        assert_eq!(ValueType::U64.to_string(), "i64");
    }

    #[test]
    fn test_equal_is_kind_exact() {
        assert!(ValueType::I32.equal(&ValueType::I32));
        assert!(!ValueType::I32.equal(&ValueType::U32));
        assert_eq!(ValueType::I32.name(), ValueType::U32.name());

        for (i, a) in ALL.iter().enumerate() {
            for (j, b) in ALL.iter().enumerate() {
                assert_eq!(a.equal(b), i == j, "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_kind_queries() {
        assert!(ValueType::U32.is_unsigned());
        assert!(!ValueType::I64.is_unsigned());
        assert!(ValueType::F32.is_float());
        assert_eq!(ValueType::U64.size_in_bytes(), 8);
        assert_eq!(ValueType::F32.size_in_bytes(), 4);
    }
}
