//! HTTP client for the OCR.space parse endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::{debug, warn};

use super::response::ParseImageResponse;
use super::{ReceiptImage, RecognizedText, Result, TextRecognizer};
use crate::error::RecognitionError;
use crate::models::OcrSpaceConfig;

/// Client for the OCR.space recognition service.
///
/// Performs exactly one multipart POST per `recognize` call; no retries.
/// The configured timeout is the only timeout in the pipeline and its
/// expiry surfaces as a transport failure.
pub struct OcrSpaceClient {
    http: reqwest::Client,
    config: OcrSpaceConfig,
}

impl OcrSpaceClient {
    /// Build a client from configuration.
    pub fn new(config: OcrSpaceConfig) -> crate::error::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent("kharcha/0.1.0")
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &OcrSpaceConfig {
        &self.config
    }
}

#[async_trait]
impl TextRecognizer for OcrSpaceClient {
    async fn recognize(&self, image: ReceiptImage) -> Result<RecognizedText> {
        let file_name = image.file_name();
        let content_type = image.content_type();

        debug!(
            "Submitting {} byte {} image to {}",
            image.len(),
            content_type,
            self.config.endpoint
        );

        let part = Part::bytes(image.into_bytes())
            .file_name(file_name)
            .mime_str(content_type)
            .map_err(|e| RecognitionError::Transport(format!("invalid file part: {}", e)))?;

        let form = Form::new()
            .text("apikey", self.config.api_key.clone())
            .text("language", self.config.language.clone())
            .text("isOverlayRequired", "false")
            .text("detectOrientation", "false")
            .text("isTable", "false")
            .text("scale", "true")
            .text("OCREngine", self.config.engine.to_string())
            .part("file", part);

        let response = self
            .http
            .post(&self.config.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| RecognitionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Recognition service returned HTTP {}", status);
            return Err(RecognitionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ParseImageResponse = response
            .json()
            .await
            .map_err(|e| RecognitionError::InvalidResponse(e.to_string()))?;

        parsed.into_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_with_defaults() {
        let client = OcrSpaceClient::new(OcrSpaceConfig::default()).unwrap();
        assert_eq!(client.config().engine, 2);
    }
}
