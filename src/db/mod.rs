//! Database module: the person record and its persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and request payloads
//! - `schema.rs`: SQL DDL for initializing the database (SQLite)
//! - `sqlite.rs`: the pooled gateway every handler shares

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{Person, PersonInput};
pub use schema::SQLITE_INIT;
pub use sqlite::{PeopleStore, SqlitePool, connect};
