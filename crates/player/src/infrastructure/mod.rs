//! Infrastructure adapters
//!
//! Concrete implementations of the outbound ports.

pub mod platform;
