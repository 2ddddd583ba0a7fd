//! Text recognition over the OCR.space HTTP service.

mod client;
mod response;

pub use client::OcrSpaceClient;

use async_trait::async_trait;

use crate::error::{RecognitionError, ScanError};

/// Result type for recognition operations.
pub type Result<T> = std::result::Result<T, RecognitionError>;

/// Immutable text recognized from one receipt image.
///
/// Holds non-blank text only; the constructor rejects empty or
/// whitespace-only input so downstream stages never see blank text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizedText(String);

impl RecognizedText {
    /// Wrap recognized text; `None` if it is empty or whitespace-only.
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            None
        } else {
            Some(Self(text))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl std::fmt::Display for RecognizedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated receipt image bytes ready for upload.
#[derive(Debug, Clone)]
pub struct ReceiptImage {
    bytes: Vec<u8>,
    content_type: &'static str,
}

impl ReceiptImage {
    /// Validate raw bytes as a supported receipt image (JPEG or PNG).
    pub fn from_bytes(bytes: Vec<u8>) -> std::result::Result<Self, ScanError> {
        if bytes.is_empty() {
            return Err(ScanError::InvalidImage("empty image data".to_string()));
        }

        let format = image::guess_format(&bytes)
            .map_err(|_| ScanError::InvalidImage("unrecognized image data".to_string()))?;

        let content_type = match format {
            image::ImageFormat::Jpeg => "image/jpeg",
            image::ImageFormat::Png => "image/png",
            other => {
                return Err(ScanError::InvalidImage(format!(
                    "unsupported image format: {:?}",
                    other
                )));
            }
        };

        Ok(Self {
            bytes,
            content_type,
        })
    }

    /// MIME type sent with the upload.
    pub fn content_type(&self) -> &'static str {
        self.content_type
    }

    /// Upload file name expected by the recognition service.
    pub fn file_name(&self) -> &'static str {
        match self.content_type {
            "image/png" => "receipt.png",
            _ => "receipt.jpg",
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Interface to a text-recognition backend.
///
/// Implementations perform exactly one recognition attempt per call;
/// retries and fallback policy belong to the caller.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    /// Recognize text in the image, consuming it.
    async fn recognize(&self, image: ReceiptImage) -> Result<RecognizedText>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jpeg_bytes() -> Vec<u8> {
        let mut bytes = vec![0xFF, 0xD8, 0xFF, 0xE0];
        bytes.extend_from_slice(&[0x00; 32]);
        bytes
    }

    #[test]
    fn test_recognized_text_rejects_blank() {
        assert!(RecognizedText::new("").is_none());
        assert!(RecognizedText::new("  \n\t ").is_none());
        assert!(RecognizedText::new("Total: 450").is_some());
    }

    #[test]
    fn test_image_from_jpeg_bytes() {
        let image = ReceiptImage::from_bytes(jpeg_bytes()).unwrap();
        assert_eq!(image.content_type(), "image/jpeg");
        assert_eq!(image.file_name(), "receipt.jpg");
        assert_eq!(image.len(), 36);
    }

    #[test]
    fn test_image_from_png_bytes() {
        let mut bytes = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        bytes.extend_from_slice(&[0x00; 16]);

        let image = ReceiptImage::from_bytes(bytes).unwrap();
        assert_eq!(image.content_type(), "image/png");
        assert_eq!(image.file_name(), "receipt.png");
    }

    #[test]
    fn test_image_rejects_empty_bytes() {
        let err = ReceiptImage::from_bytes(Vec::new()).unwrap_err();
        assert!(matches!(err, ScanError::InvalidImage(_)));
    }

    #[test]
    fn test_image_rejects_unsupported_format() {
        let mut bytes = b"GIF89a".to_vec();
        bytes.extend_from_slice(&[0x00; 16]);

        let err = ReceiptImage::from_bytes(bytes).unwrap_err();
        assert!(matches!(err, ScanError::InvalidImage(_)));
    }
}
