//! Turns matched `p:cNvPr` nodes into per-slide descriptions.

use crate::markup::NvDrawingProps;
use alttext_core::{SlideResult, NO_DESCRIPTION};

/// The description for one node: its `descr` value, or [`NO_DESCRIPTION`]
/// when the attribute is missing or empty.
pub fn description_for(node: &NvDrawingProps) -> String {
    match node.descr.as_deref() {
        Some(descr) if !descr.is_empty() => descr.to_string(),
        _ => NO_DESCRIPTION.to_string(),
    }
}

/// Collect one description per node, in the given order.
///
/// Nothing is filtered or deduplicated.
pub fn collect_slide(index: usize, nodes: &[NvDrawingProps]) -> SlideResult {
    let descriptions = nodes.iter().map(description_for).collect();
    SlideResult::new(index, descriptions)
}
