//! HTTP handlers for record CRUD.

pub mod records;
pub use records::*;
