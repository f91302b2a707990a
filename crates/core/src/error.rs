//! Error types for image description extraction.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting descriptions from a presentation.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read an input file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// The buffer is not a readable ZIP container, or one of its members
    /// could not be decompressed.
    #[error("Invalid or corrupted archive: {0}")]
    InvalidArchive(String),

    /// A slide member is not well-formed XML. Aborts the whole extraction.
    #[error("Malformed slide XML in '{member}': {message}")]
    MalformedSlideXml { member: String, message: String },

    /// The archive contains no slide members.
    #[error("No slides found in archive")]
    NoSlidesFound,

    /// The uploaded file name does not carry the `.pptx` extension.
    #[error("Only .pptx files are supported: {0}")]
    UnsupportedUpload(String),
}

impl Error {
    /// Build a [`Error::MalformedSlideXml`] for the given member.
    pub fn malformed(member: impl Into<String>, message: impl ToString) -> Self {
        Self::MalformedSlideXml {
            member: member.into(),
            message: message.to_string(),
        }
    }
}
