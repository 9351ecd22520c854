//! The three XML payloads of an XMind 2.0 workbook.

use std::fmt::Write;

use crate::error::SerializationError;
use crate::models::OutlineNode;

use super::{ids::TopicIds, topic::write_topic};

pub const CONTENT_PATH: &str = "content.xml";
pub const STYLES_PATH: &str = "styles.xml";
pub const MANIFEST_PATH: &str = "META-INF/manifest.xml";
pub const META_INF_DIR: &str = "META-INF/";

pub const CONTENT_NS: &str = "urn:xmind:xmap:xmlns:content:2.0";
pub const STYLE_NS: &str = "urn:xmind:xmap:xmlns:style:2.0";
pub const MANIFEST_NS: &str = "urn:xmind:xmap:xmlns:manifest:1.0";

const SHEET_TITLE: &str = "Sheet 1";

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;

/// Fixed default style so readers never hit a missing style reference.
pub const STYLES_XML: &str = r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<xmap-styles xmlns="urn:xmind:xmap:xmlns:style:2.0" version="2.0">
  <styles>
    <style id="default" type="topic">
      <topic-properties background-color="#FFFFFF" border-line-color="#000000" border-line-width="1pt" line-color="#000000" shape-class="org.xmind.topicShape.roundedRect"/>
      <text-properties color="#000000" font-family="Arial" font-size="12pt"/>
    </style>
  </styles>
</xmap-styles>"##;

pub const MANIFEST_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<manifest xmlns="urn:xmind:xmap:xmlns:manifest:1.0">
  <file-entry full-path="content.xml" media-type="text/xml"/>
  <file-entry full-path="styles.xml" media-type="text/xml"/>
  <file-entry full-path="META-INF/" media-type=""/>
</manifest>"#;

/// Builds `content.xml`: one sheet wrapping the root topic.
pub fn content_xml(root: &OutlineNode, ids: &mut TopicIds) -> Result<String, SerializationError> {
    let sheet_id = ids.next_id()?;
    let mut out = String::from(XML_DECL);

    write!(
        out,
        concat!(
            r#"<xmap-content xmlns="{ns}" "#,
            r#"xmlns:fo="http://www.w3.org/1999/XSL/Format" "#,
            r#"xmlns:svg="http://www.w3.org/2000/svg" "#,
            r#"xmlns:xhtml="http://www.w3.org/1999/xhtml" "#,
            r#"xmlns:xlink="http://www.w3.org/1999/xlink" version="2.0">"#,
        ),
        ns = CONTENT_NS
    )?;
    write!(out, r#"<sheet id="{sheet_id}">"#)?;
    write_topic(&mut out, root, ids)?;
    write!(out, "<title>{SHEET_TITLE}</title>")?;
    out.push_str("</sheet></xmap-content>");

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_wraps_root_in_one_sheet() {
        let root = OutlineNode::new("Root");
        let xml = content_xml(&root, &mut TopicIds::new()).unwrap();

        let doc = roxmltree::Document::parse(&xml).unwrap();
        let top = doc.root_element();
        assert_eq!(top.tag_name().name(), "xmap-content");
        assert_eq!(top.tag_name().namespace(), Some(CONTENT_NS));
        assert_eq!(top.attribute("version"), Some("2.0"));

        let sheets: Vec<_> = top.children().filter(|n| n.is_element()).collect();
        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].tag_name().name(), "sheet");
    }

    #[test]
    fn test_sheet_id_differs_from_root_topic_id() {
        let xml = content_xml(&OutlineNode::new("Root"), &mut TopicIds::new()).unwrap();

        let doc = roxmltree::Document::parse(&xml).unwrap();
        let sheet = doc
            .descendants()
            .find(|n| n.has_tag_name((CONTENT_NS, "sheet")))
            .unwrap();
        let topic = sheet
            .children()
            .find(|n| n.has_tag_name((CONTENT_NS, "topic")))
            .unwrap();
        assert_ne!(sheet.attribute("id"), topic.attribute("id"));
    }

    #[test]
    fn test_static_documents_are_well_formed() {
        let styles = roxmltree::Document::parse(STYLES_XML).unwrap();
        assert_eq!(styles.root_element().tag_name().namespace(), Some(STYLE_NS));

        let manifest = roxmltree::Document::parse(MANIFEST_XML).unwrap();
        assert_eq!(
            manifest.root_element().tag_name().namespace(),
            Some(MANIFEST_NS)
        );
        let paths: Vec<_> = manifest
            .descendants()
            .filter_map(|n| n.attribute("full-path"))
            .collect();
        assert_eq!(paths, vec![CONTENT_PATH, STYLES_PATH, META_INF_DIR]);
    }
}
