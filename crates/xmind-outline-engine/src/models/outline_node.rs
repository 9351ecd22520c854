/// One item of an outline: a title, optional labels and nested children.
///
/// Depth is not stored; it only exists while parsing as the indentation level
/// of the source line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutlineNode {
    pub title: String,
    pub labels: Vec<String>,
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            labels: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_children(mut self, children: Vec<OutlineNode>) -> Self {
        self.children = children;
        self
    }

    /// Number of nodes in this subtree, including `self`
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(OutlineNode::node_count).sum::<usize>()
    }

    /// Number of labels across this subtree
    pub fn label_count(&self) -> usize {
        self.labels.len()
            + self
                .children
                .iter()
                .map(OutlineNode::label_count)
                .sum::<usize>()
    }

    /// Levels in the subtree; a leaf has height 1
    pub fn height(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(OutlineNode::height)
            .max()
            .unwrap_or(0)
    }

    /// Pre-order traversal of this subtree
    pub fn iter(&self) -> impl Iterator<Item = &OutlineNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}
