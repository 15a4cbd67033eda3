//! Shared domain types for the todo service.
//!
//! Everything here is free of I/O so the persistence layer, the HTTP
//! layer, and the client can all depend on it.

pub mod error;
pub mod todo;
pub mod types;
