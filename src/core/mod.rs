// src/core/mod.rs
pub mod config;
pub mod rotation;
pub mod vault;

pub use config::Config;
pub use rotation::RotationAdvisor;
pub use vault::{EncryptedStore, FileVault, SavedArtifacts, StoreError};
