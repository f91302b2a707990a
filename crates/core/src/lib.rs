//! Core domain types, error taxonomy, report formatting, and the
//! last-report slot for PowerPoint image description extraction.

pub mod error;
pub mod report;
pub mod slot;
pub mod types;

pub use error::{Error, Result};
pub use report::{report_file_name, ReportFormatter, TIMESTAMP_FORMAT};
pub use slot::ReportSlot;
pub use types::{
    is_supported_upload, ExtractionResult, LastExtraction, Report, SlideResult, NO_DESCRIPTION,
};
