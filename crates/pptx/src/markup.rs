//! Namespace-aware scanning of slide XML for non-visual drawing properties.
//!
//! Every drawn object on a slide (`p:pic`, `p:sp`, `p:graphicFrame`, ...)
//! carries a `p:cNvPr` element whose `descr` attribute holds the alt text.
//! Elements are matched on their resolved namespace URI, not on the prefix
//! used in the document, so `<x:cNvPr>` with `x` bound to the presentation
//! namespace matches and `<a:cNvPr>` bound elsewhere does not.

use alttext_core::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;

/// PresentationML main namespace.
pub const PRESENTATION_NS: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";

/// DrawingML main namespace.
pub const DRAWING_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";

/// Local name of the non-visual drawing properties element.
const NV_PROPS_ELEMENT: &[u8] = b"cNvPr";

/// Namespace aliases used when scanning slides.
///
/// Only the presentation namespace takes part in matching. The drawing
/// namespace is carried so the alias table matches the one PowerPoint
/// documents declare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceMap {
    /// URI bound to the `p` alias.
    pub presentation: String,

    /// URI bound to the `a` alias.
    pub drawing: String,
}

impl Default for NamespaceMap {
    fn default() -> Self {
        Self {
            presentation: PRESENTATION_NS.to_string(),
            drawing: DRAWING_NS.to_string(),
        }
    }
}

impl NamespaceMap {
    /// `(alias, uri)` pairs.
    pub fn aliases(&self) -> [(&'static str, &str); 2] {
        [("p", self.presentation.as_str()), ("a", self.drawing.as_str())]
    }

    fn is_presentation(&self, ns: &[u8]) -> bool {
        ns == self.presentation.as_bytes()
    }
}

/// Attributes of one matched `p:cNvPr` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NvDrawingProps {
    /// Shape id (`id`).
    pub id: Option<String>,

    /// Shape name (`name`), e.g. "Picture 3".
    pub name: Option<String>,

    /// Alt text (`descr`), XML-unescaped.
    pub descr: Option<String>,
}

/// Parse one slide part and return its `p:cNvPr` nodes in document order.
///
/// `member` is only used to label errors. Any well-formedness problem
/// (syntax error, mismatched or unclosed element, unbound prefix, missing
/// or repeated root) is reported as [`Error::MalformedSlideXml`].
pub fn find_nv_props(
    xml: &[u8],
    member: &str,
    namespaces: &NamespaceMap,
) -> Result<Vec<NvDrawingProps>> {
    let mut reader = NsReader::from_reader(xml);
    let mut buf = Vec::new();
    let mut nodes = Vec::new();

    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        let (ns, event) = match reader.read_resolved_event_into(&mut buf) {
            Ok(resolved) => resolved,
            Err(e) => return Err(malformed(member, &reader, e)),
        };

        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                if depth == 0 {
                    if seen_root {
                        return Err(Error::malformed(member, "multiple root elements"));
                    }
                    seen_root = true;
                }

                if let ResolveResult::Unknown(prefix) = &ns {
                    return Err(Error::malformed(
                        member,
                        format!(
                            "unbound namespace prefix '{}'",
                            String::from_utf8_lossy(prefix)
                        ),
                    ));
                }

                if let ResolveResult::Bound(Namespace(uri)) = ns {
                    if namespaces.is_presentation(uri)
                        && e.local_name().as_ref() == NV_PROPS_ELEMENT
                    {
                        let node = read_props(e, member)?;
                        log::trace!("{}: matched cNvPr {:?}", member, node.name);
                        nodes.push(node);
                    }
                }

                if matches!(event, Event::Start(_)) {
                    depth += 1;
                }
            }
            Event::End(_) => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| Error::malformed(member, "unexpected closing tag"))?;
            }
            Event::Text(ref t) if depth == 0 => {
                if !t.iter().all(u8::is_ascii_whitespace) {
                    return Err(Error::malformed(member, "text outside the root element"));
                }
            }
            Event::Eof => break,
            _ => {}
        }

        buf.clear();
    }

    if !seen_root {
        return Err(Error::malformed(member, "document has no root element"));
    }
    if depth != 0 {
        return Err(Error::malformed(
            member,
            format!("{} element(s) left unclosed", depth),
        ));
    }

    Ok(nodes)
}

fn read_props(element: &BytesStart<'_>, member: &str) -> Result<NvDrawingProps> {
    let mut props = NvDrawingProps::default();

    for attr in element.attributes() {
        let attr = attr.map_err(|e| Error::malformed(member, e))?;
        let slot = match attr.key.as_ref() {
            b"id" => &mut props.id,
            b"name" => &mut props.name,
            b"descr" => &mut props.descr,
            _ => continue,
        };
        let value = attr
            .unescape_value()
            .map_err(|e| Error::malformed(member, e))?;
        *slot = Some(value.into_owned());
    }

    Ok(props)
}

fn malformed(member: &str, reader: &NsReader<&[u8]>, err: quick_xml::Error) -> Error {
    log::error!(
        "XML error in {} at byte {}: {}",
        member,
        reader.buffer_position(),
        err
    );
    Error::malformed(
        member,
        format!("{} (at byte {})", err, reader.buffer_position()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::slide_xml;

    fn scan(xml: &str) -> Result<Vec<NvDrawingProps>> {
        find_nv_props(xml.as_bytes(), "ppt/slides/slide1.xml", &NamespaceMap::default())
    }

    fn descrs(xml: &str) -> Vec<Option<String>> {
        scan(xml).unwrap().into_iter().map(|n| n.descr).collect()
    }

    #[test]
    fn test_matches_in_document_order() {
        let xml = slide_xml(
            r#"<p:pic><p:nvPicPr><p:cNvPr id="4" name="Picture 3" descr="A person smiling"/></p:nvPicPr></p:pic>
               <p:sp><p:nvSpPr><p:cNvPr id="5" name="Title 1"></p:cNvPr></p:nvSpPr></p:sp>
               <p:pic><p:nvPicPr><p:cNvPr id="6" name="Picture 5" descr="Chart"/></p:nvPicPr></p:pic>"#,
        );

        let nodes = scan(&xml).unwrap();
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0].id.as_deref(), Some("4"));
        assert_eq!(nodes[0].name.as_deref(), Some("Picture 3"));
        assert_eq!(nodes[0].descr.as_deref(), Some("A person smiling"));
        assert_eq!(nodes[1].descr, None);
        assert_eq!(nodes[2].descr.as_deref(), Some("Chart"));
    }

    #[test]
    fn test_ignores_other_namespaces() {
        let xml = slide_xml(
            r#"<p:pic><p:nvPicPr><p:cNvPr id="1" descr="kept"/></p:nvPicPr></p:pic>
               <a:cNvPr id="2" descr="drawing namespace"/>
               <x:cNvPr xmlns:x="urn:example:other" descr="unrelated"/>
               <cNvPr descr="no namespace"/>"#,
        );
        assert_eq!(descrs(&xml), vec![Some("kept".to_string())]);
    }

    #[test]
    fn test_matches_by_uri_not_prefix() {
        let xml = format!(
            r#"<?xml version="1.0"?>
<pres:sld xmlns:pres="{ns}"><pres:cSld><pres:spTree>
  <pres:cNvPr descr="renamed prefix"/>
  <cNvPr xmlns="{ns}" descr="default namespace"/>
</pres:spTree></pres:cSld></pres:sld>"#,
            ns = PRESENTATION_NS
        );
        assert_eq!(
            descrs(&xml),
            vec![
                Some("renamed prefix".to_string()),
                Some("default namespace".to_string())
            ]
        );
    }

    #[test]
    fn test_unescapes_attribute_values() {
        let xml = slide_xml(r#"<p:cNvPr descr="Fish &amp; chips &#x2014; &quot;menu&quot;"/>"#);
        assert_eq!(
            descrs(&xml),
            vec![Some("Fish & chips \u{2014} \"menu\"".to_string())]
        );
    }

    #[test]
    fn test_keeps_whitespace_and_empty_values() {
        let xml = slide_xml(r#"<p:cNvPr descr="  padded  "/><p:cNvPr descr=""/>"#);
        assert_eq!(
            descrs(&xml),
            vec![Some("  padded  ".to_string()), Some(String::new())]
        );
    }

    #[test]
    fn test_slide_without_shapes() {
        assert!(scan(&slide_xml("")).unwrap().is_empty());
    }

    #[test]
    fn test_mismatched_tags_are_malformed() {
        let xml = slide_xml("<p:pic></p:sp>");
        let err = scan(&xml).unwrap_err();
        match err {
            Error::MalformedSlideXml { member, .. } => assert_eq!(member, "ppt/slides/slide1.xml"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unclosed_root_is_malformed() {
        let xml = format!(r#"<p:sld xmlns:p="{}"><p:cSld>"#, PRESENTATION_NS);
        assert!(matches!(scan(&xml), Err(Error::MalformedSlideXml { .. })));
    }

    #[test]
    fn test_truncated_tag_is_malformed() {
        let xml = format!(r#"<p:sld xmlns:p="{}"><p:cNvPr descr="cut"#, PRESENTATION_NS);
        assert!(matches!(scan(&xml), Err(Error::MalformedSlideXml { .. })));
    }

    #[test]
    fn test_unbound_prefix_is_malformed() {
        assert!(matches!(
            scan(r#"<p:sld><p:cNvPr descr="x"/></p:sld>"#),
            Err(Error::MalformedSlideXml { .. })
        ));
    }

    #[test]
    fn test_empty_document_is_malformed() {
        assert!(matches!(scan(""), Err(Error::MalformedSlideXml { .. })));
        assert!(matches!(
            scan(r#"<?xml version="1.0"?>"#),
            Err(Error::MalformedSlideXml { .. })
        ));
    }

    #[test]
    fn test_trailing_content_is_malformed() {
        let xml = slide_xml("") + "<p:sld/>";
        assert!(matches!(scan(&xml), Err(Error::MalformedSlideXml { .. })));
        let xml = slide_xml("") + "trailing";
        assert!(matches!(scan(&xml), Err(Error::MalformedSlideXml { .. })));
    }

    #[test]
    fn test_aliases() {
        let namespaces = NamespaceMap::default();
        assert_eq!(
            namespaces.aliases(),
            [("p", PRESENTATION_NS), ("a", DRAWING_NS)]
        );
    }
}
