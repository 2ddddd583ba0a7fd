//! Response model for the OCR.space parse endpoint.

use serde::Deserialize;
use tracing::debug;

use super::{RecognizedText, Result};
use crate::error::RecognitionError;

/// Top-level parse response.
#[derive(Debug, Deserialize)]
pub(crate) struct ParseImageResponse {
    #[serde(rename = "ParsedResults", default)]
    parsed_results: Vec<ParsedResult>,

    #[serde(rename = "IsErroredOnProcessing", default)]
    is_errored_on_processing: bool,

    #[serde(rename = "ErrorMessage", default)]
    error_message: Option<ErrorMessages>,
}

/// One parsed result; only the recognized text is consumed.
#[derive(Debug, Deserialize)]
pub(crate) struct ParsedResult {
    #[serde(rename = "ParsedText", default)]
    parsed_text: String,
}

/// The service reports errors as a single string or a list of strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorMessages {
    One(String),
    Many(Vec<String>),
}

impl ErrorMessages {
    fn joined(&self) -> String {
        match self {
            ErrorMessages::One(message) => message.clone(),
            ErrorMessages::Many(messages) => messages.join(", "),
        }
    }
}

impl ParseImageResponse {
    /// Interpret the response: recognized text, a reported service error,
    /// or no text detected.
    pub(crate) fn into_text(self) -> Result<RecognizedText> {
        if self.is_errored_on_processing {
            debug!("Service flagged the parse as errored");
        }

        if let Some(first) = self.parsed_results.into_iter().next() {
            return RecognizedText::new(first.parsed_text).ok_or(RecognitionError::NoTextDetected);
        }

        if let Some(errors) = self.error_message {
            let joined = errors.joined();
            if !joined.trim().is_empty() {
                return Err(RecognitionError::Service(joined));
            }
        }

        Err(RecognitionError::NoTextDetected)
    }
}
