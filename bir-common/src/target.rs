//! Target machine selection

use crate::error::CompilerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output target of the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Machine {
    /// WebAssembly, 32-bit, with the language's own host interface
    #[default]
    #[serde(rename = "wasm32-wa")]
    Wasm32Wa,
    /// WebAssembly, 32-bit, WASI host interface
    #[serde(rename = "wasm32-wasi")]
    Wasm32Wasi,
    /// LLVM-style textual IR, 64-bit pointers
    #[serde(rename = "llir-64bit")]
    Llir64Bit,
}

impl Machine {
    pub const ALL: [Machine; 3] = [Machine::Wasm32Wa, Machine::Wasm32Wasi, Machine::Llir64Bit];

    pub fn as_str(&self) -> &'static str {
        match self {
            Machine::Wasm32Wa => "wasm32-wa",
            Machine::Wasm32Wasi => "wasm32-wasi",
            Machine::Llir64Bit => "llir-64bit",
        }
    }

    /// Check if this target is lowered through the wasm value types
    pub fn is_wasm(&self) -> bool {
        matches!(self, Machine::Wasm32Wa | Machine::Wasm32Wasi)
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Machine {
    type Err = CompilerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Machine::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| CompilerError::InvalidTarget { name: s.to_string() })
    }
}
