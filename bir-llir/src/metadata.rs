//! Metadata attachments

use serde::{Deserialize, Serialize};
use std::fmt;

/// `!kind !node`, e.g. `!dbg !7`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataAttachment {
    pub kind: String,
    pub node: u64,
}

impl MetadataAttachment {
    pub fn new(kind: &str, node: u64) -> Self {
        Self { kind: kind.to_string(), node }
    }

    /// Debug location attachment
    pub fn dbg(node: u64) -> Self {
        Self::new("dbg", node)
    }
}

impl fmt::Display for MetadataAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "!{} !{}", self.kind, self.node)
    }
}
