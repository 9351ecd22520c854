use std::fmt::Write;

use crate::error::SerializationError;
use crate::models::OutlineNode;

use super::{escape::escape_xml, ids::TopicIds};

/// Title written for nodes whose title is empty
pub const UNTITLED: &str = "Untitled";

/// Renders a node and its descendants as an XMind `<topic>` element.
///
/// Each topic gets a fresh id from `ids`. Labels and children keep their
/// order.
pub fn serialize_topic(
    node: &OutlineNode,
    ids: &mut TopicIds,
) -> Result<String, SerializationError> {
    let mut out = String::new();
    write_topic(&mut out, node, ids)?;
    Ok(out)
}

pub fn write_topic(
    out: &mut String,
    node: &OutlineNode,
    ids: &mut TopicIds,
) -> Result<(), SerializationError> {
    let id = ids.next_id()?;
    let title = if node.title.is_empty() {
        UNTITLED
    } else {
        &node.title
    };

    write!(out, r#"<topic id="{id}">"#)?;
    write!(out, "<title>{}</title>", escape_xml(title))?;

    if !node.labels.is_empty() {
        out.push_str("<labels>");
        for label in &node.labels {
            write!(out, "<label>{}</label>", escape_xml(label))?;
        }
        out.push_str("</labels>");
    }

    if !node.children.is_empty() {
        out.push_str(r#"<children><topics type="attached">"#);
        for child in &node.children {
            write_topic(out, child, ids)?;
        }
        out.push_str("</topics></children>");
    }

    out.push_str("</topic>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strip_ids(xml: &str) -> String {
        let re = regex::Regex::new(r#"id="[^"]*""#).unwrap();
        re.replace_all(xml, r#"id="_""#).into_owned()
    }

    #[test]
    fn test_leaf_topic() {
        let xml = serialize_topic(&OutlineNode::new("Leaf"), &mut TopicIds::new()).unwrap();
        assert_eq!(strip_ids(&xml), r#"<topic id="_"><title>Leaf</title></topic>"#);
    }

    #[test]
    fn test_labels_and_children() {
        let node = OutlineNode::new("Root").with_children(vec![
            OutlineNode::new("A").with_labels(["x", "y"]),
            OutlineNode::new("B"),
        ]);

        let xml = serialize_topic(&node, &mut TopicIds::new()).unwrap();

        assert_eq!(
            strip_ids(&xml),
            concat!(
                r#"<topic id="_"><title>Root</title>"#,
                r#"<children><topics type="attached">"#,
                r#"<topic id="_"><title>A</title><labels><label>x</label><label>y</label></labels></topic>"#,
                r#"<topic id="_"><title>B</title></topic>"#,
                r#"</topics></children></topic>"#,
            )
        );
    }

    #[test]
    fn test_every_topic_gets_an_id() {
        let node = OutlineNode::new("R").with_children(vec![
            OutlineNode::new("A").with_children(vec![OutlineNode::new("A1")]),
            OutlineNode::new("B"),
        ]);
        let mut ids = TopicIds::new();

        let xml = serialize_topic(&node, &mut ids).unwrap();

        assert_eq!(ids.issued(), 4);
        assert_eq!(xml.matches("<topic id=").count(), 4);
    }

    #[test]
    fn test_empty_title_falls_back() {
        let node = OutlineNode::new("").with_labels(["tag"]);
        let xml = serialize_topic(&node, &mut TopicIds::new()).unwrap();
        assert!(xml.contains("<title>Untitled</title>"));
    }

    #[test]
    fn test_title_and_labels_are_escaped() {
        let node = OutlineNode::new("a<b").with_labels(["x&y"]);
        let xml = serialize_topic(&node, &mut TopicIds::new()).unwrap();
        assert!(xml.contains("<title>a&lt;b</title>"));
        assert!(xml.contains("<label>x&amp;y</label>"));
    }

    #[test]
    fn test_id_failure_propagates() {
        let node = OutlineNode::new("R").with_children(vec![OutlineNode::new("A")]);
        let mut ids = TopicIds::with_generator(|| "dup".to_string());

        let result = serialize_topic(&node, &mut ids);

        assert!(matches!(
            result,
            Err(SerializationError::IdsExhausted { .. })
        ));
    }
}
