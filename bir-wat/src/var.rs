//! Named variables

use serde::{Deserialize, Serialize};
use crate::value_type::ValueType;

/// A name paired with one primitive value type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Var {
    name: String,
    #[serde(rename = "type")]
    ty: ValueType,
}

impl Var {
    pub fn new(name: &str, ty: ValueType) -> Self {
        Self { name: name.to_string(), ty }
    }

    pub fn i32(name: &str) -> Self {
        Self::new(name, ValueType::I32)
    }

    pub fn u32(name: &str) -> Self {
        Self::new(name, ValueType::U32)
    }

    pub fn i64(name: &str) -> Self {
        Self::new(name, ValueType::I64)
    }

    pub fn u64(name: &str) -> Self {
        Self::new(name, ValueType::U64)
    }

    pub fn f32(name: &str) -> Self {
        Self::new(name, ValueType::F32)
    }

    pub fn f64(name: &str) -> Self {
        Self::new(name, ValueType::F64)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> ValueType {
        self.ty
    }
}
