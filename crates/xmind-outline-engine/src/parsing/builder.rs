use crate::models::OutlineNode;

use super::{classify::LineClass, labels::split_labels};

#[derive(Debug)]
struct Frame {
    level: usize,
    node: OutlineNode,
}

/// Phase 2 of outline parsing: places classified lines into a tree.
///
/// The stack holds the chain of open ancestors keyed by indentation level.
/// A frame's node is attached to its parent when the frame is popped, so
/// siblings land in source order.
#[derive(Debug, Default)]
pub struct OutlineBuilder {
    stack: Vec<Frame>,
    dropped: usize,
}

impl OutlineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: &LineClass) {
        if line.is_blank {
            return;
        }

        let (title, labels) = split_labels(line.content);
        let node = OutlineNode {
            title,
            labels,
            children: Vec::new(),
        };

        if line.level == 0 {
            if let Some(previous) = self.collapse() {
                log::debug!(
                    "root {:?} replaced by {:?}, discarding {} node(s)",
                    previous.title,
                    node.title,
                    previous.node_count()
                );
            }
            self.stack.push(Frame { level: 0, node });
            return;
        }

        while self
            .stack
            .last()
            .is_some_and(|frame| frame.level >= line.level)
        {
            self.pop_into_parent();
        }

        if self.stack.first().is_none_or(|bottom| bottom.level > 0) {
            // No root yet: this subtree is built but never attached.
            self.dropped += 1;
            log::debug!("dropping line {:?} with no root above it", node.title);
        }

        self.stack.push(Frame {
            level: line.level,
            node,
        });
    }

    /// Lines that could not attach to any root, orphan descendants included
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Closes every open frame and returns the root, if one was seen.
    pub fn finish(mut self) -> Option<OutlineNode> {
        self.collapse()
    }

    /// Pops the top frame, attaching it to the frame beneath.
    ///
    /// Returns the frame only when there is nothing beneath it.
    fn pop_into_parent(&mut self) -> Option<Frame> {
        let frame = self.stack.pop()?;
        match self.stack.last_mut() {
            Some(parent) => {
                parent.node.children.push(frame.node);
                None
            }
            None => Some(frame),
        }
    }

    fn collapse(&mut self) -> Option<OutlineNode> {
        while self.stack.len() > 1 {
            self.pop_into_parent();
        }
        let bottom = self.pop_into_parent()?;
        (bottom.level == 0).then_some(bottom.node)
    }
}
