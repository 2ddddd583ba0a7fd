//! Core library for receipt scanning and transaction drafting.
//!
//! This crate provides:
//! - OCR.space recognition client for receipt images
//! - Field extraction (amount, title) tuned for Nepali receipts
//! - Keyword-based expense categorization
//! - A single-flight scan pipeline that always yields a usable draft

pub mod error;
pub mod extract;
pub mod models;
pub mod ocr;
pub mod pipeline;

pub use error::{KharchaError, RecognitionError, Result, ScanError};
pub use extract::{
    categorize, category_rules, draft_from_text, extract_amount, extract_title, format_npr,
};
pub use models::{Category, DraftFields, KharchaConfig, OcrSpaceConfig, TransactionDraft};
pub use ocr::{OcrSpaceClient, ReceiptImage, RecognizedText, TextRecognizer};
pub use pipeline::{CaptureSource, ScanOutcome, ScanPhase, ScanPipeline, ScanReport};
