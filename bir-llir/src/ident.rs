//! Local identities
//! 
//! An instruction result, parameter or block label is named either by the
//! caller (`%sum`) or by function-level numbering (`%3`). Either way the
//! identity is assigned exactly once.

use once_cell::unsync::OnceCell;
use crate::error::IrError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum IdentName {
    Name(String),
    Id(u64),
}

/// Assign-once identity of a local value
#[derive(Debug, Default)]
pub struct LocalIdent {
    slot: OnceCell<IdentName>,
}

impl LocalIdent {
    /// An identity to be numbered later
    pub fn new() -> Self {
        Self::default()
    }

    /// A named identity; an empty name leaves it to numbering
    pub fn named(name: &str) -> Self {
        if name.is_empty() {
            return Self::new();
        }
        Self {
            slot: OnceCell::with_value(IdentName::Name(name.to_string())),
        }
    }

    /// Name the identity. An empty name is a no-op.
    pub fn set_name(&self, name: &str) -> Result<(), IrError> {
        if name.is_empty() {
            return Ok(());
        }
        self.assign(IdentName::Name(name.to_string()))
    }

    pub fn set_id(&self, id: u64) -> Result<(), IrError> {
        self.assign(IdentName::Id(id))
    }

    fn assign(&self, name: IdentName) -> Result<(), IrError> {
        self.slot
            .set(name)
            .map_err(|_| IrError::IdentAlreadyAssigned { existing: self.ident() })
    }

    pub fn is_assigned(&self) -> bool {
        self.slot.get().is_some()
    }

    pub fn name(&self) -> Option<&str> {
        match self.slot.get() {
            Some(IdentName::Name(name)) => Some(name),
            _ => None,
        }
    }

    pub fn id(&self) -> Option<u64> {
        match self.slot.get() {
            Some(IdentName::Id(id)) => Some(*id),
            _ => None,
        }
    }

    /// Spelling without the sigil, as used for block labels
    pub fn label(&self) -> String {
        match self.slot.get() {
            Some(IdentName::Name(name)) => escape_name(name),
            Some(IdentName::Id(id)) => id.to_string(),
            None => "<unassigned>".to_string(),
        }
    }

    /// Operand spelling, e.g. `%agg` or `%3`
    pub fn ident(&self) -> String {
        format!("%{}", self.label())
    }
}

/// Quote a name unless it is a plain LLVM identifier.
///
/// `"` and `\` are written as `\22` and `\5C`, like any other byte outside
/// printable ASCII.
pub(crate) fn escape_name(name: &str) -> String {
    let plain = !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '$' | '.' | '_' | '-'));
    if plain {
        return name.to_string();
    }

    let mut out = String::with_capacity(name.len() + 2);
    out.push('"');
    for byte in name.bytes() {
        match byte {
            b'"' | b'\\' => out.push_str(&format!("\\{byte:02X}")),
            0x20..=0x7e => out.push(char::from(byte)),
            _ => out.push_str(&format!("\\{byte:02X}")),
        }
    }
    out.push('"');
    out
}
