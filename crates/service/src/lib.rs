//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates request handling from data access.
//! - Reaches persistence only through the narrow `EntryStore` boundary.
//! - Provides clear error types decoupled from store internals.

pub mod entry;
pub mod errors;
