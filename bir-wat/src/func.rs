//! Functions and their local variable tables

use serde::{Deserialize, Serialize};
use std::fmt;
use crate::error::WatError;
use crate::value_type::ValueType;
use crate::var::Var;

/// A wasm function signature plus its declared locals.
///
/// Parameters and locals share one namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Func {
    name: String,
    #[serde(default)]
    export: Option<String>,
    #[serde(default)]
    params: Vec<Var>,
    #[serde(default)]
    results: Vec<ValueType>,
    #[serde(default)]
    locals: Vec<Var>,
}

impl Func {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            export: None,
            params: Vec::new(),
            results: Vec::new(),
            locals: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn exported_as(mut self, export: &str) -> Self {
        self.export = Some(export.to_string());
        self
    }

    pub fn add_param(&mut self, var: Var) -> Result<(), WatError> {
        self.check_new_name(var.name())?;
        self.params.push(var);
        Ok(())
    }

    pub fn add_result(&mut self, ty: ValueType) {
        self.results.push(ty);
    }

    pub fn add_local(&mut self, var: Var) -> Result<(), WatError> {
        self.check_new_name(var.name())?;
        self.locals.push(var);
        Ok(())
    }

    pub fn params(&self) -> &[Var] {
        &self.params
    }

    pub fn results(&self) -> &[ValueType] {
        &self.results
    }

    pub fn locals(&self) -> &[Var] {
        &self.locals
    }

    /// Look up a parameter or local by name
    pub fn lookup(&self, name: &str) -> Option<&Var> {
        self.params.iter().chain(&self.locals).find(|v| v.name() == name)
    }

    /// Re-check names, e.g. after deserializing
    pub fn validate(&self) -> Result<(), WatError> {
        check_name(&self.name, &self.scope())?;
        let mut seen: Vec<&str> = Vec::new();
        for var in self.params.iter().chain(&self.locals) {
            check_name(var.name(), &self.scope())?;
            if seen.contains(&var.name()) {
                return Err(WatError::DuplicateName {
                    scope: self.scope(),
                    name: var.name().to_string(),
                });
            }
            seen.push(var.name());
        }
        Ok(())
    }

    fn check_new_name(&self, name: &str) -> Result<(), WatError> {
        check_name(name, &self.scope())?;
        if self.lookup(name).is_some() {
            return Err(WatError::DuplicateName {
                scope: self.scope(),
                name: name.to_string(),
            });
        }
        Ok(())
    }

    fn scope(&self) -> String {
        format!("func ${}", self.name)
    }
}

/// WAT identifiers are `$` followed by printable idchars
pub(crate) fn check_name(name: &str, scope: &str) -> Result<(), WatError> {
    if name.is_empty() {
        return Err(WatError::EmptyName { scope: scope.to_string() });
    }
    let valid = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "!#$%&'*+-./:<=>?@\\^_`|~".contains(c));
    if !valid {
        return Err(WatError::InvalidName {
            scope: scope.to_string(),
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Contents of a WAT string literal.
///
/// `"`, `\` and bytes outside printable ASCII become `\hh` escapes.
fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'"' | b'\\' => out.push_str(&format!("\\{byte:02x}")),
            0x20..=0x7e => out.push(char::from(byte)),
            _ => out.push_str(&format!("\\{byte:02x}")),
        }
    }
    out
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(func ${}", self.name)?;
        if let Some(export) = &self.export {
            write!(f, " (export \"{}\")", escape_string(export))?;
        }
        for param in &self.params {
            write!(f, " (param ${} {})", param.name(), param.ty())?;
        }
        for result in &self.results {
            write!(f, " (result {result})")?;
        }
        writeln!(f)?;
        for local in &self.locals {
            writeln!(f, "  (local ${} {})", local.name(), local.ty())?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_table() {
        let mut func = Func::new("sum");
        func.add_param(Var::u32("n")).unwrap();
        func.add_local(Var::i64("acc")).unwrap();
        func.add_local(Var::f64("scale")).unwrap();

        assert_eq!(func.lookup("n").map(Var::ty), Some(ValueType::U32));
        assert_eq!(func.lookup("acc").map(Var::ty), Some(ValueType::I64));
        assert!(func.lookup("missing").is_none());
        assert_eq!(func.locals().len(), 2);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut func = Func::new("f");
        func.add_param(Var::i32("x")).unwrap();
        assert_eq!(
            func.add_local(Var::f32("x")),
            Err(WatError::DuplicateName { scope: "func $f".to_string(), name: "x".to_string() })
        );
        func.add_local(Var::f32("y")).unwrap();
        assert!(func.add_param(Var::i64("y")).is_err());
        assert_eq!(func.params().len(), 1);
        assert_eq!(func.locals().len(), 1);
    }

    #[test]
    fn test_invalid_names_rejected() {
        let mut func = Func::new("f");
        assert_eq!(
            func.add_local(Var::i32("")),
            Err(WatError::EmptyName { scope: "func $f".to_string() })
        );
        assert!(matches!(
            func.add_local(Var::i32("a b")),
            Err(WatError::InvalidName { .. })
        ));
        assert!(func.add_local(Var::i32("runtime.tmp$1")).is_ok());
    }

    #[test]
    fn test_export_name_is_escaped() {
        let func = Func::new("f").exported_as("a\") (import");
        assert_eq!(func.to_string(), "(func $f (export \"a\\22) (import\")\n)");

        let func = Func::new("g").exported_as("back\\slash\tπ");
        assert_eq!(
            func.to_string(),
            "(func $g (export \"back\\5cslash\\09\\cf\\80\")\n)"
        );
    }

    #[test]
    fn test_bad_func_name_reports_func_scope() {
        let func: Func = serde_json::from_str(r#"{"name": "a b"}"#).unwrap();
        assert_eq!(
            func.validate(),
            Err(WatError::InvalidName { scope: "func $a b".to_string(), name: "a b".to_string() })
        );
    }

    #[test]
    fn test_func_display() {
        let mut func = Func::new("main").exported_as("_start");
        func.add_param(Var::u32("argc")).unwrap();
        func.add_result(ValueType::I32);
        func.add_local(Var::f64("t")).unwrap();
        assert_eq!(
            func.to_string(),
            "(func $main (export \"_start\") (param $argc i32) (result i32)\n  (local $t f64)\n)"
        );
    }
}
