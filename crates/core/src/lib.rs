//! Core types for intent-embed
//!
//! Domain types, configuration and the vector math shared by the
//! embedding client, the storage layer and the batch updater.

mod config;
mod constants;
mod env_config;
mod error;
mod intent;
mod text;
mod vector;

pub use config::*;
pub use constants::*;
pub use env_config::*;
pub use error::*;
pub use intent::*;
pub use text::*;
pub use vector::*;
