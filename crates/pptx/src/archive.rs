//! ZIP container access for in-memory PPTX buffers.

use alttext_core::{Error, Result};
use std::io::{Cursor, Read};
use zip::ZipArchive;

/// An opened PPTX container borrowed from an in-memory buffer.
///
/// The archive is released when this value is dropped, so every exit path
/// out of the extraction pipeline gives the buffer back.
pub struct SlideArchive<'a> {
    archive: ZipArchive<Cursor<&'a [u8]>>,
}

impl<'a> SlideArchive<'a> {
    /// Open `bytes` as a ZIP archive.
    pub fn open(bytes: &'a [u8]) -> Result<Self> {
        let archive = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| Error::InvalidArchive(format!("Failed to open ZIP: {}", e)))?;
        Ok(Self { archive })
    }

    /// Number of members in the archive.
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archive.len() == 0
    }

    /// Member paths in central directory order.
    pub fn member_paths(&mut self) -> Result<Vec<String>> {
        (0..self.archive.len())
            .map(|i| {
                self.archive
                    .by_index_raw(i)
                    .map(|file| file.name().to_string())
                    .map_err(|e| Error::InvalidArchive(format!("Failed to read entry {}: {}", i, e)))
            })
            .collect()
    }

    /// Read and decompress one member.
    pub fn read_member(&mut self, path: &str) -> Result<Vec<u8>> {
        let mut file = self.archive.by_name(path).map_err(|e| {
            Error::InvalidArchive(format!("File not found in archive '{}': {}", path, e))
        })?;

        let mut content = Vec::new();
        file.read_to_end(&mut content)
            .map_err(|e| Error::InvalidArchive(format!("Failed to read '{}': {}", path, e)))?;

        Ok(content)
    }
}
