pub mod outline_node;

pub use outline_node::OutlineNode;
