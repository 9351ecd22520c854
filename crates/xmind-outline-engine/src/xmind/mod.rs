//! # XMind Serialization
//!
//! Renders an [`OutlineNode`](crate::models::OutlineNode) tree as an XMind 2.0
//! workbook.
//!
//! - **`escape`**: total XML text escaping
//! - **`ids`**: `TopicIds`, the per-document identifier allocator
//! - **`topic`**: recursive `<topic>` rendering
//! - **`documents`**: `content.xml`, `styles.xml` and the manifest
//! - **`archive`**: zip packaging of the three documents

pub mod archive;
pub mod documents;
pub mod escape;
pub mod ids;
pub mod topic;

pub use archive::assemble;
pub use escape::escape_xml;
pub use ids::TopicIds;
pub use topic::serialize_topic;
