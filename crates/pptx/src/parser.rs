//! PPTX description extraction pipeline.

use crate::archive::SlideArchive;
use crate::collector::collect_slide;
use crate::locator::locate_slides;
use crate::markup::{find_nv_props, NamespaceMap};
use alttext_core::{Error, ExtractionResult, Result};

/// Extracts picture descriptions from PPTX (Office Open XML) files.
#[derive(Debug, Clone, Default)]
pub struct PptxParser {
    namespaces: NamespaceMap,
}

impl PptxParser {
    /// Create a new parser using the standard PresentationML namespaces.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different namespace map.
    pub fn with_namespaces(mut self, namespaces: NamespaceMap) -> Self {
        self.namespaces = namespaces;
        self
    }

    pub fn namespaces(&self) -> &NamespaceMap {
        &self.namespaces
    }

    /// Extract descriptions from an in-memory PPTX file.
    ///
    /// Slides are numbered 1..N in numeric order of their part names. An
    /// archive without slide parts yields an empty result. Any archive or
    /// XML failure aborts the whole extraction; partial results are never
    /// returned.
    pub fn extract(&self, bytes: &[u8]) -> Result<ExtractionResult> {
        let result = self.extract_inner(bytes);
        if let Err(ref e) = result {
            log::error!("Error occurred while extracting descriptions: {}", e);
        }
        result
    }

    fn extract_inner(&self, bytes: &[u8]) -> Result<ExtractionResult> {
        let mut archive = SlideArchive::open(bytes)?;

        let slide_paths = match locate_slides(archive.member_paths()?) {
            Ok(paths) => paths,
            Err(Error::NoSlidesFound) => {
                log::info!("Found 0 slide(s) to scan");
                return Ok(ExtractionResult::new());
            }
            Err(e) => return Err(e),
        };
        log::info!("Found {} slide(s) to scan", slide_paths.len());

        let mut result = ExtractionResult::new();
        for (idx, slide_path) in slide_paths.iter().enumerate() {
            let content = archive.read_member(slide_path)?;
            let nodes = find_nv_props(&content, slide_path, &self.namespaces)?;
            log::debug!(
                "Slide {} ({}): {} cNvPr node(s)",
                idx + 1,
                slide_path,
                nodes.len()
            );
            result.add_slide(collect_slide(idx + 1, &nodes));
        }

        Ok(result)
    }
}

/// Extract descriptions with the default [`PptxParser`].
pub fn extract_descriptions(bytes: &[u8]) -> Result<ExtractionResult> {
    PptxParser::new().extract(bytes)
}
