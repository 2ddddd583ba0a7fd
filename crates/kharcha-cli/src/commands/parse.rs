//! Parse command - draft a transaction from already-recognized text.
//!
//! Takes the text a recognition pass produced (or any plain text) and runs
//! only the extraction stages, so it works offline.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::debug;

use kharcha_core::extract::{draft_from_text, format_npr};
use kharcha_core::models::TransactionDraft;

use super::scan::OutputFormat;

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Text file with recognized receipt text (stdin if omitted)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

pub async fn run(args: ParseArgs) -> anyhow::Result<()> {
    let text = match &args.input {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            fs::read_to_string(path)?
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    debug!("Drafting transaction from {} characters of text", text.chars().count());

    let draft = draft_from_text(&text);
    let output = format_draft(&draft, args.format)?;

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

    Ok(())
}

fn format_draft(draft: &TransactionDraft, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(&draft.form_fields())?),
        OutputFormat::Text => {
            let mut output = String::new();
            output.push_str(&format!("Title:    {}\n", draft.title));
            match draft.amount {
                Some(amount) => output.push_str(&format!("Amount:   {}\n", format_npr(amount))),
                None => output.push_str("Amount:   (not detected)\n"),
            }
            output.push_str(&format!("Category: {}\n", draft.category));
            Ok(output)
        }
    }
}
