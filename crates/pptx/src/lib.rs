//! PPTX (Office Open XML) backend for image description extraction.
//!
//! Opens .pptx files (ZIP archives of XML parts), orders the slide parts
//! numerically, and collects the `descr` attribute of every `p:cNvPr`
//! element on each slide.

pub mod archive;
pub mod collector;
pub mod locator;
pub mod markup;
pub mod parser;

pub use markup::{NamespaceMap, DRAWING_NS, PRESENTATION_NS};
pub use parser::{extract_descriptions, PptxParser};
