//! Scan pipeline orchestration.
//!
//! Drives one receipt through capture, recognition, and extraction, and
//! enforces the single-flight rule: at most one scan in flight per
//! pipeline instance, with the state machine as the authority.

use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Instant;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::error::{RecognitionError, ScanError};
use crate::extract;
use crate::models::TransactionDraft;
use crate::ocr::{ReceiptImage, RecognizedText, TextRecognizer};

/// Phase of the scan state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ScanPhase {
    /// No scan in flight.
    Idle = 0,
    /// Waiting for the capture collaborator to supply an image.
    Capturing = 1,
    /// Waiting for the recognition service.
    Recognizing = 2,
    /// Deriving the draft from recognized text.
    Extracting = 3,
}

impl ScanPhase {
    fn from_u8(value: u8) -> ScanPhase {
        match value {
            1 => ScanPhase::Capturing,
            2 => ScanPhase::Recognizing,
            3 => ScanPhase::Extracting,
            _ => ScanPhase::Idle,
        }
    }
}

/// Source of receipt images (camera, gallery, file picker).
#[async_trait]
pub trait CaptureSource: Send {
    /// Acquire an image; `Ok(None)` when the user cancels.
    async fn acquire(&mut self) -> std::result::Result<Option<ReceiptImage>, ScanError>;
}

/// Terminal result of one scan.
///
/// Three variants so callers handle every path at compile time; the
/// outcome owns no reference back to the image or the recognizer.
#[derive(Debug)]
pub enum ScanOutcome {
    /// Draft with an extracted amount, ready for the transaction form.
    Resolved(TransactionDraft),
    /// Draft without an amount; the user either retries the capture or
    /// fills the amount in manually.
    NeedsManualAmount(TransactionDraft),
    /// Recognition failed; `fallback` is the manual-entry placeholder.
    Failed {
        reason: RecognitionError,
        fallback: TransactionDraft,
    },
}

impl ScanOutcome {
    /// The draft carried by this outcome, whatever the variant.
    pub fn draft(&self) -> &TransactionDraft {
        match self {
            ScanOutcome::Resolved(draft) => draft,
            ScanOutcome::NeedsManualAmount(draft) => draft,
            ScanOutcome::Failed { fallback, .. } => fallback,
        }
    }
}

/// One finished scan: the outcome plus per-scan diagnostics.
#[derive(Debug)]
pub struct ScanReport {
    /// Terminal outcome.
    pub outcome: ScanOutcome,
    /// Text the recognition service returned, if it got that far.
    pub recognized_text: Option<RecognizedText>,
    /// When the scan finished.
    pub scanned_at: DateTime<Utc>,
    /// Wall-clock duration of the scan in milliseconds.
    pub processing_time_ms: u64,
}

/// Receipt scan pipeline.
///
/// Owns the recognizer and the phase cell. `scan` and `scan_from` drive
/// one image through the state machine and always return the pipeline to
/// `Idle`, including when the scan future is dropped mid-flight.
pub struct ScanPipeline<R> {
    recognizer: R,
    phase: AtomicU8,
}

impl<R: TextRecognizer> ScanPipeline<R> {
    pub fn new(recognizer: R) -> Self {
        Self {
            recognizer,
            phase: AtomicU8::new(ScanPhase::Idle as u8),
        }
    }

    /// Current phase of the state machine.
    pub fn phase(&self) -> ScanPhase {
        ScanPhase::from_u8(self.phase.load(Ordering::SeqCst))
    }

    /// Scan a pre-captured image.
    pub async fn scan(&self, image: ReceiptImage) -> std::result::Result<ScanReport, ScanError> {
        let guard = self.begin()?;
        Ok(self.run(&guard, image).await)
    }

    /// Acquire an image from `source` and scan it.
    ///
    /// Returns `Ok(None)` when the user cancels the capture; that is a
    /// no-op, not an error, and the pipeline stays idle.
    pub async fn scan_from<S: CaptureSource>(
        &self,
        source: &mut S,
    ) -> std::result::Result<Option<ScanReport>, ScanError> {
        let guard = self.begin()?;

        let image = match source.acquire().await? {
            Some(image) => image,
            None => {
                debug!("Capture cancelled, staying idle");
                return Ok(None);
            }
        };

        Ok(Some(self.run(&guard, image).await))
    }

    /// Enter the state machine: `Idle` -> `Capturing`, or `Busy` when a
    /// scan is already in flight.
    fn begin(&self) -> std::result::Result<PhaseGuard<'_>, ScanError> {
        self.phase
            .compare_exchange(
                ScanPhase::Idle as u8,
                ScanPhase::Capturing as u8,
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .map_err(|_| ScanError::Busy)?;

        Ok(PhaseGuard { phase: &self.phase })
    }

    async fn run(&self, guard: &PhaseGuard<'_>, image: ReceiptImage) -> ScanReport {
        let start = Instant::now();

        guard.advance(ScanPhase::Recognizing);
        info!("Recognizing text in {} byte image", image.len());

        let (outcome, recognized_text) = match self.recognizer.recognize(image).await {
            Ok(text) => {
                guard.advance(ScanPhase::Extracting);
                debug!("Recognized {} characters", text.char_count());

                let draft = extract::draft_from_text(text.as_str());
                let outcome = if draft.has_amount() {
                    info!("Draft resolved: {} ({})", draft.title, draft.category);
                    ScanOutcome::Resolved(draft)
                } else {
                    info!("No amount found in {}, manual entry required", draft.title);
                    ScanOutcome::NeedsManualAmount(draft)
                };

                (outcome, Some(text))
            }
            Err(reason) => {
                warn!("Recognition failed: {}", reason);
                let outcome = ScanOutcome::Failed {
                    reason,
                    fallback: TransactionDraft::placeholder(),
                };

                (outcome, None)
            }
        };

        ScanReport {
            outcome,
            recognized_text,
            scanned_at: Utc::now(),
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

/// Resets the phase to `Idle` when the scan ends, including when the scan
/// future is dropped mid-flight.
struct PhaseGuard<'a> {
    phase: &'a AtomicU8,
}

impl PhaseGuard<'_> {
    fn advance(&self, next: ScanPhase) {
        self.phase.store(next as u8, Ordering::SeqCst);
    }
}

impl Drop for PhaseGuard<'_> {
    fn drop(&mut self) {
        self.phase.store(ScanPhase::Idle as u8, Ordering::SeqCst);
    }
}
