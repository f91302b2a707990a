//! Single-slot store for the most recent extraction.
//!
//! The slot is owned by whoever handles uploads and is shared by reference
//! (or `Arc`) with whoever serves reports. Each successful extraction
//! replaces the previous one; there is no history and no expiry.

use crate::report::ReportFormatter;
use crate::types::{ExtractionResult, LastExtraction, Report};
use chrono::NaiveDateTime;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Thread-safe holder of the latest [`LastExtraction`].
#[derive(Debug, Default)]
pub struct ReportSlot {
    latest: Mutex<Option<LastExtraction>>,
}

impl ReportSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored extraction. Last writer wins.
    pub fn store(&self, filename: impl Into<String>, result: ExtractionResult) {
        let filename = filename.into();
        log::debug!(
            "Storing report for {} ({} slide(s))",
            filename,
            result.slide_count()
        );
        *self.lock() = Some(LastExtraction { filename, result });
    }

    /// A copy of the stored extraction, if any.
    pub fn latest(&self) -> Option<LastExtraction> {
        self.lock().clone()
    }

    /// Drop the stored extraction.
    pub fn clear(&self) {
        self.lock().take();
    }

    /// Render the stored extraction as a report.
    ///
    /// Returns `None` when nothing is stored or the stored result has no
    /// slides, in which case there is nothing worth downloading.
    pub fn render(&self, formatter: &ReportFormatter, timestamp: NaiveDateTime) -> Option<Report> {
        let guard = self.lock();
        let last = guard.as_ref().filter(|last| !last.result.is_empty())?;
        Some(formatter.render(&last.filename, &last.result, timestamp))
    }

    // The slot only holds plain data, so a panic in another holder cannot
    // leave it half-written.
    fn lock(&self) -> MutexGuard<'_, Option<LastExtraction>> {
        self.latest.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
