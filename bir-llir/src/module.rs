//! IR Module - a complete compilation unit

use crate::error::IrError;
use crate::function::Function;

#[derive(Debug)]
pub struct Module {
    name: String,
    functions: Vec<Function>,
}

impl Module {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            functions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_function(&mut self, function: Function) {
        self.functions.push(function);
    }

    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    pub fn get_function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|f| f.name() == name)
    }

    /// Number unnamed locals and print the whole module
    pub fn to_ll_string(&self, emit_header: bool) -> Result<String, IrError> {
        let mut output = String::new();
        if emit_header {
            output.push_str(&format!("; ModuleID = '{}'\n", self.name));
        }
        for function in &self.functions {
            function.assign_ids()?;
            if !output.is_empty() {
                output.push('\n');
            }
            output.push_str(&function.to_string());
        }
        Ok(output)
    }
}
