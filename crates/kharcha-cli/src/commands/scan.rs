//! Scan command - recognize a receipt image and draft a transaction.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, info};

use kharcha_core::extract::format_npr;
use kharcha_core::models::{DraftFields, KharchaConfig};
use kharcha_core::ocr::{OcrSpaceClient, ReceiptImage};
use kharcha_core::pipeline::{ScanOutcome, ScanPipeline, ScanReport};

use super::config::default_config_path;

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Receipt image (JPEG or PNG)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// OCR.space API key (overrides config file and OCR_SPACE_API_KEY)
    #[arg(short, long)]
    api_key: Option<String>,

    /// Include the recognized text in the output
    #[arg(long)]
    show_text: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub async fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    config.ocr.api_key = resolve_api_key(
        args.api_key.clone(),
        std::env::var("OCR_SPACE_API_KEY").ok(),
        config.ocr.api_key,
    );

    // Check input file exists
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Scanning receipt: {}", args.input.display());

    let bytes = fs::read(&args.input)?;
    let image = ReceiptImage::from_bytes(bytes)?;
    debug!("Loaded {} byte {} file", image.len(), image.content_type());

    let client = OcrSpaceClient::new(config.ocr)?;
    let pipeline = ScanPipeline::new(client);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Recognizing text...");

    let report = pipeline.scan(image).await?;

    pb.finish_and_clear();

    // Format output
    let output = format_report(&report, args.format, args.show_text)?;

    // Write output
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total scan time: {:?}", start.elapsed());

    Ok(())
}

/// Load configuration from the explicit path, the default location, or
/// defaults, in that order.
fn load_config(config_path: Option<&str>) -> anyhow::Result<KharchaConfig> {
    if let Some(path) = config_path {
        return Ok(KharchaConfig::from_file(std::path::Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Loading config from {}", default_path.display());
        return Ok(KharchaConfig::from_file(&default_path)?);
    }

    Ok(KharchaConfig::default())
}

/// Precedence: --api-key flag, then OCR_SPACE_API_KEY, then the config value.
fn resolve_api_key(flag: Option<String>, env: Option<String>, from_config: String) -> String {
    flag.or(env).unwrap_or(from_config)
}

/// JSON shape for one finished scan.
#[derive(Serialize)]
struct ScanJson {
    outcome: &'static str,
    draft: DraftFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    recognized_text: Option<String>,
    scanned_at: DateTime<Utc>,
    processing_time_ms: u64,
}

fn format_report(
    report: &ScanReport,
    format: OutputFormat,
    show_text: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let (outcome, error) = match &report.outcome {
                ScanOutcome::Resolved(_) => ("resolved", None),
                ScanOutcome::NeedsManualAmount(_) => ("needs_manual_amount", None),
                ScanOutcome::Failed { reason, .. } => ("failed", Some(reason.to_string())),
            };

            let recognized_text = if show_text {
                report
                    .recognized_text
                    .as_ref()
                    .map(|text| text.as_str().to_string())
            } else {
                None
            };

            let json = ScanJson {
                outcome,
                draft: report.outcome.draft().form_fields(),
                error,
                recognized_text,
                scanned_at: report.scanned_at,
                processing_time_ms: report.processing_time_ms,
            };

            Ok(serde_json::to_string(&json)?)
        }
        OutputFormat::Text => Ok(format_text(report, show_text)),
    }
}

fn format_text(report: &ScanReport, show_text: bool) -> String {
    let mut output = String::new();

    match &report.outcome {
        ScanOutcome::Resolved(_) => {
            output.push_str(&format!("{} Draft ready\n", style("✓").green()));
        }
        ScanOutcome::NeedsManualAmount(_) => {
            output.push_str(&format!(
                "{} No amount found, enter it manually\n",
                style("⚠").yellow()
            ));
        }
        ScanOutcome::Failed { reason, .. } => {
            output.push_str(&format!(
                "{} Recognition failed: {}\n",
                style("✗").red(),
                reason
            ));
        }
    }

    let draft = report.outcome.draft();
    output.push_str(&format!("  Title:    {}\n", draft.title));
    match draft.amount {
        Some(amount) => output.push_str(&format!("  Amount:   {}\n", format_npr(amount))),
        None => output.push_str("  Amount:   (not detected)\n"),
    }
    output.push_str(&format!("  Category: {}\n", draft.category));
    output.push_str(&format!("  Scanned in {}ms\n", report.processing_time_ms));

    if show_text {
        if let Some(text) = &report.recognized_text {
            output.push('\n');
            output.push_str("Recognized text:\n");
            for line in text.as_str().lines() {
                output.push_str(&format!("  {}\n", line));
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use kharcha_core::models::{Category, TransactionDraft};
    use kharcha_core::ocr::RecognizedText;
    use kharcha_core::RecognitionError;

    use super::*;

    fn resolved_report() -> ScanReport {
        ScanReport {
            outcome: ScanOutcome::Resolved(TransactionDraft {
                title: "Everest Cafe".to_string(),
                amount: Some("450".parse().unwrap()),
                category: Category::Food,
            }),
            recognized_text: RecognizedText::new("Everest Cafe\nTotal: Rs. 450"),
            scanned_at: Utc::now(),
            processing_time_ms: 840,
        }
    }

    #[test]
    fn test_text_format_shows_draft_fields() {
        let output = format_text(&resolved_report(), false);
        assert!(output.contains("Title:    Everest Cafe"));
        assert!(output.contains("रु 450.00"));
        assert!(output.contains("Category: Food"));
        assert!(!output.contains("Recognized text"));
    }

    #[test]
    fn test_text_format_appends_recognized_text() {
        let output = format_text(&resolved_report(), true);
        assert!(output.contains("Recognized text:"));
        assert!(output.contains("  Total: Rs. 450"));
    }

    #[test]
    fn test_json_format_resolved() {
        let output = format_report(&resolved_report(), OutputFormat::Json, false).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["outcome"], "resolved");
        assert_eq!(json["draft"]["title"], "Everest Cafe");
        assert_eq!(json["draft"]["amount"], "450");
        assert_eq!(json["draft"]["category"], "Food");
        assert!(json.get("error").is_none());
        assert!(json.get("recognized_text").is_none());
    }

    #[test]
    fn test_json_format_failed_carries_error_and_fallback() {
        let report = ScanReport {
            outcome: ScanOutcome::Failed {
                reason: RecognitionError::NoTextDetected,
                fallback: TransactionDraft::placeholder(),
            },
            recognized_text: None,
            scanned_at: Utc::now(),
            processing_time_ms: 120,
        };

        let output = format_report(&report, OutputFormat::Json, false).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["outcome"], "failed");
        assert_eq!(json["error"], "no text detected in image");
        assert_eq!(json["draft"]["title"], "Receipt");
        assert_eq!(json["draft"]["amount"], "");
    }

    #[test]
    fn test_api_key_precedence() {
        let key = resolve_api_key(Some("flag".into()), Some("env".into()), "file".into());
        assert_eq!(key, "flag");

        let key = resolve_api_key(None, Some("env".into()), "file".into());
        assert_eq!(key, "env");

        let key = resolve_api_key(None, None, "file".into());
        assert_eq!(key, "file");
    }
}
