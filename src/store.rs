//! Core store type and its builder.

use crate::error::{Error, Result};
use crate::person::{People, Person, PersonId};
use crate::persist::{atomic_write, load};
use crate::serializer::{JsonSerializer, Serializer};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Person collection cached in memory and mirrored to one JSON file.
///
/// Every mutating call rewrites the whole file before returning, so after a
/// successful `create`/`update`/`delete` the file decodes to exactly what
/// [`list`](Self::list) returns. If the write fails the in-memory change is
/// undone and the error is returned.
///
/// All operations take one lock for their full duration (scan, mutate and
/// write), which makes the store safe to share between request handlers
/// behind an `Arc`.
pub struct PersonStore {
    people: Mutex<People>,
    path: PathBuf,
    serializer: JsonSerializer,
}

impl PersonStore {
    /// Open (or create) a store at `path` writing compact JSON.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::builder(path).build()
    }

    /// Start configuring a new store. Call [`.build()`](PersonStoreBuilder::build)
    /// when ready.
    pub fn builder(path: impl AsRef<Path>) -> PersonStoreBuilder {
        PersonStoreBuilder::new(path)
    }

    // ---- reads ----

    /// Snapshot of every record, in insertion order.
    #[must_use]
    pub fn list(&self) -> People {
        self.people.lock().clone()
    }

    /// The record with `id`.
    pub fn get(&self, id: PersonId) -> Result<Person> {
        let people = self.people.lock();
        people
            .position(id)
            .map(|idx| people.people[idx].clone())
            .ok_or(Error::NotFound(id))
    }

    /// `true` if a record with `id` exists.
    #[must_use]
    pub fn contains(&self, id: PersonId) -> bool {
        self.people.lock().position(id).is_some()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.people.lock().people.len()
    }

    /// `true` when the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Path to the backing JSON file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    // ---- writes ----

    /// Append `person` and persist. Fails with [`Error::DuplicateId`] if the id
    /// is taken and [`Error::Validation`] if `fields` holds an `id` key.
    /// Positivity of the id is not checked here, see [`Person::validate`].
    pub fn create(&self, person: Person) -> Result<()> {
        person.check_fields()?;
        let mut people = self.people.lock();
        let id = person.id;
        if people.position(id).is_some() {
            return Err(Error::DuplicateId(id));
        }

        people.people.push(person);
        if let Err(err) = self.persist(&people) {
            people.people.pop();
            warn!(id, error = %err, "create rolled back, file write failed");
            return Err(err);
        }
        debug!(id, records = people.people.len(), "created person");
        Ok(())
    }

    /// Replace the record sharing `person.id`, keeping its position.
    pub fn update(&self, person: Person) -> Result<()> {
        person.check_fields()?;
        let mut people = self.people.lock();
        let id = person.id;
        let idx = people.position(id).ok_or(Error::NotFound(id))?;

        let previous = std::mem::replace(&mut people.people[idx], person);
        if let Err(err) = self.persist(&people) {
            people.people[idx] = previous;
            warn!(id, error = %err, "update rolled back, file write failed");
            return Err(err);
        }
        debug!(id, "updated person");
        Ok(())
    }

    /// Remove the record with `id`, returning it. Later records shift up by
    /// one.
    pub fn delete(&self, id: PersonId) -> Result<Person> {
        let mut people = self.people.lock();
        let idx = people.position(id).ok_or(Error::NotFound(id))?;

        let removed = people.people.remove(idx);
        if let Err(err) = self.persist(&people) {
            people.people.insert(idx, removed);
            warn!(id, error = %err, "delete rolled back, file write failed");
            return Err(err);
        }
        debug!(id, records = people.people.len(), "deleted person");
        Ok(removed)
    }

    // ---- internal ----

    fn persist(&self, people: &People) -> Result<()> {
        let bytes = self.serializer.serialize(people)?;
        atomic_write(&self.path, &bytes)
    }
}

impl std::fmt::Debug for PersonStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersonStore")
            .field("path", &self.path)
            .field("records", &self.len())
            .field("pretty", &self.serializer.is_pretty())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Configures and opens a [`PersonStore`].
///
/// ```rust,no_run
/// use person_store::PersonStore;
///
/// let store = PersonStore::builder("people.json").pretty(true).build().unwrap();
/// assert!(store.is_empty());
/// ```
pub struct PersonStoreBuilder {
    path: PathBuf,
    pretty: bool,
}

impl PersonStoreBuilder {
    fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            pretty: false,
        }
    }

    /// Write indented JSON (default: compact).
    pub fn pretty(mut self, yes: bool) -> Self {
        self.pretty = yes;
        self
    }

    /// Load the existing file, or create it holding an empty collection.
    pub fn build(self) -> Result<PersonStore> {
        let serializer = if self.pretty {
            JsonSerializer::pretty()
        } else {
            JsonSerializer::new()
        };

        let people = match load(&self.path, &serializer)? {
            Some(people) => people,
            None => {
                let empty = People::default();
                atomic_write(&self.path, &serializer.serialize(&empty)?)?;
                info!(path = %self.path.display(), "created empty person file");
                empty
            }
        };

        Ok(PersonStore {
            people: Mutex::new(people),
            path: self.path,
            serializer,
        })
    }
}

impl std::fmt::Debug for PersonStoreBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersonStoreBuilder")
            .field("path", &self.path)
            .field("pretty", &self.pretty)
            .finish()
    }
}
