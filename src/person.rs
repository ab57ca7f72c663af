//! Domain types: a person record and the ordered collection the store persists.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of a person. Signed so that zero and negative ids survive
/// decoding and get rejected by [`Person::validate`] instead.
pub type PersonId = i64;

/// JSON key holding the identifier. Reserved: it may not appear in
/// [`Person::fields`].
pub const ID_FIELD: &str = "id";

/// A person record.
///
/// Only `id` has meaning to the store. Every other field of the JSON object is
/// kept in `fields` and written back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier. Valid ids are positive.
    pub id: PersonId,
    /// Remaining profile fields, carried opaquely.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Person {
    /// A person with no profile fields.
    pub fn new(id: PersonId) -> Self {
        Self {
            id,
            fields: Map::new(),
        }
    }

    /// Builder-style helper to attach a profile field. The reserved `id` key
    /// is refused (the call leaves the person unchanged); set the id through
    /// [`Person::new`].
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        if name != ID_FIELD {
            self.fields.insert(name, value.into());
        }
        self
    }

    /// Reject an `id` key inside `fields`. Flattened next to the real id it
    /// would write a document with a repeated key that no longer decodes.
    pub fn check_fields(&self) -> Result<()> {
        if self.fields.contains_key(ID_FIELD) {
            return Err(Error::Validation(format!(
                "field `{ID_FIELD}` is reserved for the identifier"
            )));
        }
        Ok(())
    }

    /// Reject ids that are not strictly positive and a reserved `id` key in
    /// `fields`. The store itself only checks uniqueness and the reserved key;
    /// callers run this before handing a person over.
    pub fn validate(&self) -> Result<()> {
        self.check_fields()?;
        if self.id <= 0 {
            return Err(Error::Validation(format!(
                "id must be a positive integer, got {}",
                self.id
            )));
        }
        Ok(())
    }
}

/// The persisted document: `{"people": [...]}`, insertion order preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct People {
    /// Records in insertion order.
    #[serde(default)]
    pub people: Vec<Person>,
}

impl People {
    /// Position of the first record with `id`.
    pub fn position(&self, id: PersonId) -> Option<usize> {
        self.people.iter().position(|p| p.id == id)
    }

    /// First id that appears more than once, if any.
    pub(crate) fn first_duplicate(&self) -> Option<PersonId> {
        let mut seen = std::collections::HashSet::with_capacity(self.people.len());
        self.people
            .iter()
            .map(|p| p.id)
            .find(|id| !seen.insert(*id))
    }
}

impl From<Vec<Person>> for People {
    fn from(people: Vec<Person>) -> Self {
        Self { people }
    }
}
