//! Collection codec. Defaults to compact JSON via serde_json.
//!
//! Implement [`Serializer`] to persist the collection in another textual
//! layout (for instance with a trailing newline or sorted keys).

use crate::error::{Error, Result};
use crate::person::People;

/// Converts the person collection to/from bytes for persistence.
pub trait Serializer: Send + Sync {
    /// Encode the collection.
    fn serialize(&self, people: &People) -> Result<Vec<u8>>;

    /// Decode bytes back into a collection.
    fn deserialize(&self, bytes: &[u8]) -> Result<People>;
}

/// JSON serializer with optional pretty-printing.
#[derive(Debug, Clone, Default)]
pub struct JsonSerializer {
    pretty: bool,
}

impl JsonSerializer {
    /// Compact JSON (single line, no extra whitespace).
    pub fn new() -> Self {
        Self::default()
    }

    /// Indented JSON, easier to read and diff by hand.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// `true` when this serializer indents its output.
    pub fn is_pretty(&self) -> bool {
        self.pretty
    }
}

impl Serializer for JsonSerializer {
    fn serialize(&self, people: &People) -> Result<Vec<u8>> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(people)
        } else {
            serde_json::to_vec(people)
        };
        bytes.map_err(|e| Error::Encode(e.to_string()))
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<People> {
        serde_json::from_slice(bytes).map_err(Error::from)
    }
}
