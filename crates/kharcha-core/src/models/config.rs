//! Configuration structures for the scan pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the kharcha pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KharchaConfig {
    /// OCR.space recognition service configuration.
    pub ocr: OcrSpaceConfig,
}

impl Default for KharchaConfig {
    fn default() -> Self {
        Self {
            ocr: OcrSpaceConfig::default(),
        }
    }
}

/// OCR.space recognition service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrSpaceConfig {
    /// Service endpoint URL.
    pub endpoint: String,

    /// API key. The default is OCR.space's public demo key; set a real
    /// key via config, flag, or the OCR_SPACE_API_KEY environment variable.
    pub api_key: String,

    /// Source language code sent to the service.
    pub language: String,

    /// OCR engine version selector (engine 2 handles receipts better).
    pub engine: u8,

    /// Client-side request timeout in seconds. This is the only timeout
    /// in the pipeline; its expiry surfaces as a transport failure.
    pub timeout_secs: u64,
}

impl Default for OcrSpaceConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.ocr.space/parse/image".to_string(),
            api_key: "helloworld".to_string(),
            language: "eng".to_string(),
            engine: 2,
            timeout_secs: 120,
        }
    }
}

impl KharchaConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KharchaConfig::default();
        assert_eq!(config.ocr.endpoint, "https://api.ocr.space/parse/image");
        assert_eq!(config.ocr.language, "eng");
        assert_eq!(config.ocr.engine, 2);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: KharchaConfig =
            serde_json::from_str(r#"{"ocr": {"api_key": "K12345"}}"#).unwrap();
        assert_eq!(config.ocr.api_key, "K12345");
        assert_eq!(config.ocr.engine, 2);
        assert_eq!(config.ocr.timeout_secs, 120);
    }
}
