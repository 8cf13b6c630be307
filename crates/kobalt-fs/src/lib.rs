//! Filesystem primitives for Kobalt settings
//!
//! Provides the structured-document reader, the directory-creation primitive
//! and the names of the well-known paths under `~/.kobalt`.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;

pub use config::ConfigStore;
pub use constants::KobaltPath;
pub use error::{Error, Result};
