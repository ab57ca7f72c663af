//! Person records kept in memory and persisted as one JSON document.
//!
//! [`PersonStore`] loads `{"people": [...]}` at startup, serves reads from
//! memory and rewrites the whole file (temp file + rename) on every change.
//! The [`api`] module puts an axum router in front of it.
//!
//! ```rust,no_run
//! use person_store::{Person, PersonStore};
//!
//! let store = PersonStore::open("people.json").unwrap();
//! store.create(Person::new(1).with_field("name", "Ada")).unwrap();
//! assert_eq!(store.get(1).unwrap().fields["name"], "Ada");
//! ```
//!
//! **Single-process only.** Two processes opening the same file will clobber
//! each other's writes.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod person;
pub mod persist;
pub mod serializer;
pub mod store;

pub use config::{Config, LogFormat};
pub use error::{Error, Result};
pub use person::{People, Person, PersonId};
pub use store::{PersonStore, PersonStoreBuilder};
