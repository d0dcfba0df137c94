//! WAT module output

use log::debug;
use serde::{Deserialize, Serialize};
use crate::error::WatError;
use crate::func::{check_name, Func};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    name: String,
    #[serde(default)]
    funcs: Vec<Func>,
}

impl Module {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            funcs: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_func(&mut self, func: Func) -> Result<(), WatError> {
        if self.get_func(func.name()).is_some() {
            return Err(WatError::DuplicateName {
                scope: self.scope(),
                name: func.name().to_string(),
            });
        }
        self.funcs.push(func);
        Ok(())
    }

    pub fn funcs(&self) -> &[Func] {
        &self.funcs
    }

    pub fn get_func(&self, name: &str) -> Option<&Func> {
        self.funcs.iter().find(|f| f.name() == name)
    }

    /// Check every name; deserialized modules skip the `add_*` checks
    pub fn validate(&self) -> Result<(), WatError> {
        check_name(&self.name, "module")?;
        let mut seen: Vec<&str> = Vec::new();
        for func in &self.funcs {
            func.validate()?;
            if seen.contains(&func.name()) {
                return Err(WatError::DuplicateName {
                    scope: self.scope(),
                    name: func.name().to_string(),
                });
            }
            seen.push(func.name());
        }
        Ok(())
    }

    pub fn to_wat(&self) -> String {
        debug!("emitting wat module ${} with {} funcs", self.name, self.funcs.len());
        let mut output = format!("(module ${}\n", self.name);
        for func in &self.funcs {
            for line in func.to_string().lines() {
                output.push_str("  ");
                output.push_str(line);
                output.push('\n');
            }
        }
        output.push_str(")\n");
        output
    }

    fn scope(&self) -> String {
        format!("module ${}", self.name)
    }
}
