//! Backend IR - Compile Driver
//! 
//! The backend is a pure function from a lowered program and a target
//! selector to output bytes. Loading and checking the source program
//! happen upstream; this crate only picks the representation to
//! serialize.

pub mod demos;

use bir_common::{CompilerError, Machine};
use log::debug;

/// A lowered program, in both target representations
#[derive(Debug)]
pub struct Program {
    pub name: String,
    pub llir: bir_llir::Module,
    pub wat: bir_wat::Module,
}

/// Options for compiling
#[derive(Debug, Clone)]
pub struct CompileOptions {
    pub target: Machine,
    /// Start the output with a comment naming the module / target
    pub emit_header: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            target: Machine::default(),
            emit_header: true,
        }
    }
}

/// Serialize `program` for the selected target
pub fn compile(program: &Program, options: &CompileOptions) -> Result<Vec<u8>, CompilerError> {
    debug!("compiling '{}' for {}", program.name, options.target);
    let text = match options.target {
        Machine::Llir64Bit => program.llir.to_ll_string(options.emit_header)?,
        Machine::Wasm32Wa | Machine::Wasm32Wasi => {
            program.wat.validate()?;
            let mut output = String::new();
            if options.emit_header {
                output.push_str(&format!(";; target = {}\n", options.target));
            }
            output.push_str(&program.wat.to_wat());
            output
        }
    };
    debug!("emitted {} bytes", text.len());
    Ok(text.into_bytes())
}

/// Load a WAT module described as JSON and check its names
pub fn load_wat_module(json: &str) -> Result<bir_wat::Module, CompilerError> {
    let module: bir_wat::Module = serde_json::from_str(json).map_err(|e| {
        CompilerError::InvalidInput { message: e.to_string() }
    })?;
    module.validate()?;
    Ok(module)
}
