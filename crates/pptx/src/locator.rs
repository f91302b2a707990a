//! Slide member selection and numeric ordering.

use alttext_core::{Error, Result};
use std::cmp::Ordering;

/// Path prefix shared by all slide parts.
pub const SLIDE_PREFIX: &str = "ppt/slides/slide";

/// Extension of slide parts. Excludes `_rels/*.xml.rels` siblings.
pub const SLIDE_EXTENSION: &str = ".xml";

/// Sort key built from every ASCII digit in a path, in path order.
///
/// Compared as an unbounded unsigned integer, so keys never overflow and
/// `slide10` sorts after `slide9`. A path without digits has key zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideKey {
    // Significant digits only: no leading zeros.
    digits: String,
}

impl SlideKey {
    /// Build the key for a member path.
    pub fn from_path(path: &str) -> Self {
        let all: String = path.chars().filter(|c| c.is_ascii_digit()).collect();
        let digits = all.trim_start_matches('0').to_string();
        Self { digits }
    }
}

impl Ord for SlideKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

impl PartialOrd for SlideKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// True if `path` names a slide part.
pub fn is_slide_member(path: &str) -> bool {
    path.starts_with(SLIDE_PREFIX) && path.ends_with(SLIDE_EXTENSION)
}

/// Select slide members from `paths` and order them by [`SlideKey`].
///
/// Members with equal keys keep their discovery order. Returns
/// [`Error::NoSlidesFound`] if no path qualifies.
pub fn locate_slides<I, S>(paths: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut slides: Vec<(SlideKey, String)> = paths
        .into_iter()
        .filter(|p| is_slide_member(p.as_ref()))
        .map(|p| {
            let path = p.as_ref().to_string();
            (SlideKey::from_path(&path), path)
        })
        .collect();

    if slides.is_empty() {
        return Err(Error::NoSlidesFound);
    }

    // `sort_by` is stable.
    slides.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(slides.into_iter().map(|(_, path)| path).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_not_lexical_order() {
        let ordered = locate_slides([
            "ppt/slides/slide2.xml",
            "ppt/slides/slide10.xml",
            "ppt/slides/slide1.xml",
        ])
        .unwrap();
        assert_eq!(
            ordered,
            vec![
                "ppt/slides/slide1.xml",
                "ppt/slides/slide2.xml",
                "ppt/slides/slide10.xml",
            ]
        );
    }

    #[test]
    fn test_filters_non_slide_members() {
        let ordered = locate_slides([
            "[Content_Types].xml",
            "ppt/presentation.xml",
            "ppt/slides/_rels/slide1.xml.rels",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/slides/slide1.xml",
            "ppt/notesSlides/notesSlide1.xml",
            "ppt/media/image1.png",
        ])
        .unwrap();
        assert_eq!(ordered, vec!["ppt/slides/slide1.xml"]);
    }

    #[test]
    fn test_no_slides() {
        assert!(matches!(
            locate_slides(["ppt/presentation.xml", "docProps/app.xml"]),
            Err(Error::NoSlidesFound)
        ));
        assert!(matches!(
            locate_slides(Vec::<String>::new()),
            Err(Error::NoSlidesFound)
        ));
    }

    #[test]
    fn test_equal_keys_keep_discovery_order() {
        // Both concatenate to "12".
        let ordered = locate_slides([
            "ppt/slides/slide12.xml",
            "ppt/slides/slide1-2.xml",
            "ppt/slides/slide3.xml",
        ])
        .unwrap();
        assert_eq!(
            ordered,
            vec![
                "ppt/slides/slide3.xml",
                "ppt/slides/slide12.xml",
                "ppt/slides/slide1-2.xml",
            ]
        );
    }

    #[test]
    fn test_key_concatenates_all_digits() {
        assert_eq!(
            SlideKey::from_path("ppt/slides/slide3.xml"),
            SlideKey::from_path("3")
        );
        assert!(SlideKey::from_path("ppt/slides/slide1a5.xml") > SlideKey::from_path("slide14"));
        assert_eq!(SlideKey::from_path("slide007"), SlideKey::from_path("slide7"));
    }

    #[test]
    fn test_key_without_digits_sorts_first() {
        assert_eq!(SlideKey::from_path("ppt/slides/slide.xml"), SlideKey::from_path("0"));
        assert!(SlideKey::from_path("ppt/slides/slide.xml") < SlideKey::from_path("slide1"));
    }

    #[test]
    fn test_key_does_not_overflow() {
        let huge = format!("ppt/slides/slide{}.xml", "9".repeat(60));
        let bigger = format!("ppt/slides/slide1{}.xml", "0".repeat(60));
        assert!(SlideKey::from_path(&huge) < SlideKey::from_path(&bigger));
    }
}
