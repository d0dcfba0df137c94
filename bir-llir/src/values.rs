//! IR Value Representations
//! 
//! Defines values that can be used as operands in IR instructions:
//! function parameters, constants and instruction results. A `Value` is a
//! cheap, cloneable handle; one value can feed any number of operands.

use std::fmt;
use std::rc::Rc;
use crate::error::IrError;
use crate::ident::LocalIdent;
use crate::instructions::Instruction;
use crate::types::{FloatKind, Type};

/// Function parameter
#[derive(Debug)]
pub struct Param {
    ident: LocalIdent,
    ty: Type,
}

impl Param {
    pub fn new(name: &str, ty: Type) -> Self {
        Self { ident: LocalIdent::named(name), ty }
    }

    pub fn ident(&self) -> &LocalIdent {
        &self.ident
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.ident.ident())
    }
}

/// Constant operands
#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    Int { ty: Type, value: i64 },
    Float { ty: Type, value: f64 },
    Undef(Type),
    ZeroInitializer(Type),
    /// Constant vector, e.g. a shuffle mask
    Vector { ty: Type, elems: Vec<Constant> },
}

impl Constant {
    pub fn int(ty: Type, value: i64) -> Self {
        Constant::Int { ty, value }
    }

    pub fn i32(value: i32) -> Self {
        Constant::int(Type::I32, i64::from(value))
    }

    pub fn float(kind: FloatKind, value: f64) -> Self {
        Constant::Float { ty: Type::Float(kind), value }
    }

    pub fn vector(elem_ty: Type, elems: Vec<Constant>) -> Self {
        let ty = Type::vector(elems.len() as u64, elem_ty);
        Constant::Vector { ty, elems }
    }

    /// Constant `<N x i32>` mask from lane indices
    pub fn mask(lanes: &[i32]) -> Self {
        Constant::vector(Type::I32, lanes.iter().map(|&lane| Constant::i32(lane)).collect())
    }

    pub fn ty(&self) -> &Type {
        match self {
            Constant::Int { ty, .. }
            | Constant::Float { ty, .. }
            | Constant::Undef(ty)
            | Constant::ZeroInitializer(ty)
            | Constant::Vector { ty, .. } => ty,
        }
    }

    pub fn ident(&self) -> String {
        match self {
            Constant::Int { ty: Type::Int(1), value } => {
                if *value == 0 { "false".to_string() } else { "true".to_string() }
            }
            Constant::Int { value, .. } => value.to_string(),
            Constant::Float { ty, value } => float_literal(ty, *value),
            Constant::Undef(_) => "undef".to_string(),
            Constant::ZeroInitializer(_) => "zeroinitializer".to_string(),
            Constant::Vector { elems, .. } => {
                let elems: Vec<String> = elems.iter().map(|c| c.to_string()).collect();
                format!("<{}>", elems.join(", "))
            }
        }
    }
}

/// Decimal when the value is integral, otherwise the exact hex form.
///
/// `float` constants are written as the double holding the rounded value.
fn float_literal(ty: &Type, value: f64) -> String {
    let value = if *ty == Type::FLOAT { f64::from(value as f32) } else { value };
    let decimal = format!("{value:?}");
    if value.is_finite() && value.fract() == 0.0 && !decimal.contains('e') {
        decimal
    } else {
        format!("0x{:016X}", value.to_bits())
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty(), self.ident())
    }
}

/// IR Value - represents operands in IR instructions
#[derive(Debug, Clone)]
pub enum Value {
    Param(Rc<Param>),
    Const(Rc<Constant>),
    Inst(Rc<Instruction>),
}

impl Value {
    /// Type of the value; instruction results use their cached type
    pub fn ty(&self) -> Result<&Type, IrError> {
        match self {
            Value::Param(param) => Ok(param.ty()),
            Value::Const(constant) => Ok(constant.ty()),
            Value::Inst(inst) => inst.ty(),
        }
    }

    /// Operand spelling without the type
    pub fn ident(&self) -> String {
        match self {
            Value::Param(param) => param.ident().ident(),
            Value::Const(constant) => constant.ident(),
            Value::Inst(inst) => inst.ident().ident(),
        }
    }

    pub fn as_inst(&self) -> Option<&Rc<Instruction>> {
        match self {
            Value::Inst(inst) => Some(inst),
            _ => None,
        }
    }

    /// Check if both handles refer to the same value
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Param(a), Value::Param(b)) => Rc::ptr_eq(a, b),
            (Value::Const(a), Value::Const(b)) => Rc::ptr_eq(a, b),
            (Value::Inst(a), Value::Inst(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<Constant> for Value {
    fn from(constant: Constant) -> Self {
        Value::Const(Rc::new(constant))
    }
}

impl From<Rc<Instruction>> for Value {
    fn from(inst: Rc<Instruction>) -> Self {
        Value::Inst(inst)
    }
}

impl From<Rc<Param>> for Value {
    fn from(param: Rc<Param>) -> Self {
        Value::Param(param)
    }
}

/// Type-value pair, e.g. `{i32, i32} %agg`
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ty = self.ty().map_err(|_| fmt::Error)?;
        write!(f, "{} {}", ty, self.ident())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_display() {
        let agg: Value = Rc::new(Param::new("agg", Type::struct_of(vec![Type::I32, Type::I32]))).into();
        assert_eq!(agg.to_string(), "{i32, i32} %agg");
        assert_eq!(agg.ident(), "%agg");
    }

    #[test]
    fn test_constant_display() {
        assert_eq!(Constant::i32(-5).to_string(), "i32 -5");
        assert_eq!(Constant::int(Type::I1, 1).to_string(), "i1 true");
        assert_eq!(Constant::float(FloatKind::Double, 2.0).to_string(), "double 2.0");
        assert_eq!(
            Constant::float(FloatKind::Double, 0.5).to_string(),
            "double 0x3FE0000000000000"
        );
        assert_eq!(Constant::Undef(Type::vector(4, Type::I32)).to_string(), "<4 x i32> undef");
        assert_eq!(
            Constant::ZeroInitializer(Type::array(2, Type::I8)).to_string(),
            "[2 x i8] zeroinitializer"
        );
        assert_eq!(Constant::mask(&[0, 2]).to_string(), "<2 x i32> <i32 0, i32 2>");
    }

    #[test]
    fn test_float_constant_is_rounded() {
        // 0.1 is not exact in float; the printed double is the rounded value
        let c = Constant::float(FloatKind::Float, 0.1);
        assert_eq!(c.ident(), format!("0x{:016X}", f64::from(0.1f32).to_bits()));
    }

    #[test]
    fn test_shared_handles() {
        let x: Value = Constant::i32(7).into();
        let y = x.clone();
        assert!(x.ptr_eq(&y));
        let z: Value = Constant::i32(7).into();
        assert!(!x.ptr_eq(&z));
    }
}
