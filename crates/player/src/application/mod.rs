//! Application layer
//!
//! Use cases consumed by the sheet forms: the storage gateway and the two
//! sheet services built on top of it.

pub mod error;
pub mod services;

pub use error::SheetError;
