//! State containers for player-side dependency injection
//!
//! This module contains the container that wires the sheet services to one
//! storage backend.

mod manager;

pub use manager::{PlatformStorage, SheetManager};
