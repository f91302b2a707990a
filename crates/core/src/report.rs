//! Plain-text report output.
//!
//! Renders extracted descriptions as a downloadable text file: two header
//! lines naming the file and the generation time, then one block per slide
//! with a bulleted list of descriptions, each block followed by a blank line.

use crate::types::{ExtractionResult, Report};
use chrono::{Local, NaiveDateTime};

/// Glyph preceding the "Report for" header (U+1F4C4, page facing up).
const FILE_GLYPH: &str = "\u{1F4C4}";

/// Glyph preceding the "Generated" header (U+1F551, clock face two oclock).
const CLOCK_GLYPH: &str = "\u{1F551}";

/// Timestamp layout used in the "Generated" header.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formatter for description reports.
#[derive(Debug, Clone, Default)]
pub struct ReportFormatter;

impl ReportFormatter {
    /// Create a new formatter.
    pub fn new() -> Self {
        Self
    }

    /// Format an extraction result into report text.
    ///
    /// `timestamp` is local wall-clock time.
    ///
    /// # Example output
    /// ```text
    /// 📄 Report for: deck.pptx
    /// 🕑 Generated: 2024-03-09 14:05:00
    ///
    /// Slide 1:
    ///   - (No description)
    ///   - Chart
    ///
    /// ```
    pub fn format(
        &self,
        filename: &str,
        result: &ExtractionResult,
        timestamp: NaiveDateTime,
    ) -> String {
        let mut lines = vec![
            format!("{} Report for: {}", FILE_GLYPH, filename),
            format!(
                "{} Generated: {}",
                CLOCK_GLYPH,
                timestamp.format(TIMESTAMP_FORMAT)
            ),
            String::new(),
        ];

        for slide in &result.slides {
            lines.push(format!("Slide {}:", slide.index));
            for description in &slide.descriptions {
                lines.push(format!("  - {}", description));
            }
            lines.push(String::new());
        }

        lines.join("\n")
    }

    /// Format using the current local time.
    pub fn format_now(&self, filename: &str, result: &ExtractionResult) -> String {
        self.format(filename, result, Local::now().naive_local())
    }

    /// Render a complete downloadable report.
    pub fn render(
        &self,
        filename: &str,
        result: &ExtractionResult,
        timestamp: NaiveDateTime,
    ) -> Report {
        Report {
            file_name: report_file_name(filename),
            content: self.format(filename, result, timestamp),
        }
    }
}

/// Download name for the report of `filename`.
pub fn report_file_name(filename: &str) -> String {
    format!("report_{}.txt", filename)
}
