//! Data models for receipt scanning.

pub mod config;
pub mod draft;

pub use config::{KharchaConfig, OcrSpaceConfig};
pub use draft::{Category, DraftFields, TransactionDraft};
