//! Domain types for representing extracted image descriptions.

use serde::{Deserialize, Serialize};

/// Placeholder used when a picture carries no `descr` attribute, or an empty one.
pub const NO_DESCRIPTION: &str = "(No description)";

/// Descriptions collected from every slide of one presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Slides in ascending index order.
    pub slides: Vec<SlideResult>,
}

impl ExtractionResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next slide.
    pub fn add_slide(&mut self, slide: SlideResult) {
        self.slides.push(slide);
    }

    /// True if the presentation had no slide members.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Number of slides scanned.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Total number of descriptions across all slides.
    pub fn description_count(&self) -> usize {
        self.slides.iter().map(|s| s.descriptions.len()).sum()
    }

    /// Number of collected entries that fell back to [`NO_DESCRIPTION`].
    pub fn missing_description_count(&self) -> usize {
        self.slides
            .iter()
            .flat_map(|s| s.descriptions.iter())
            .filter(|d| d.as_str() == NO_DESCRIPTION)
            .count()
    }
}

/// Descriptions found on a single slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideResult {
    /// 1-based slide index, assigned by numeric slide order.
    #[serde(rename = "slide")]
    pub index: usize,

    /// One entry per non-visual drawing properties node, in document order.
    pub descriptions: Vec<String>,
}

impl SlideResult {
    /// Create a slide result.
    pub fn new(index: usize, descriptions: Vec<String>) -> Self {
        Self {
            index,
            descriptions,
        }
    }
}

/// The most recent successful extraction, as held by a [`crate::ReportSlot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastExtraction {
    /// Name of the uploaded file.
    pub filename: String,

    pub result: ExtractionResult,
}

/// A rendered, downloadable report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Suggested download name, e.g. `report_deck.pptx.txt`.
    pub file_name: String,

    /// Plain-text report body.
    pub content: String,
}

/// Check whether an uploaded file name is accepted for extraction.
///
/// Only the `.pptx` suffix is checked; the comparison is case-sensitive.
pub fn is_supported_upload(filename: &str) -> bool {
    filename.ends_with(".pptx")
}
