use std::collections::HashSet;

use uuid::Uuid;

use crate::error::SerializationError;

const MAX_ATTEMPTS: usize = 8;

/// Allocates element identifiers for one document.
///
/// Every id handed out is remembered so none repeats within the document.
/// A fresh allocator is created per compile; nothing is shared between calls.
#[derive(Debug)]
pub struct TopicIds {
    issued: HashSet<String>,
    generate: fn() -> String,
}

impl Default for TopicIds {
    fn default() -> Self {
        Self::new()
    }
}

impl TopicIds {
    pub fn new() -> Self {
        Self::with_generator(random_id)
    }

    /// Allocator backed by a custom id source.
    pub fn with_generator(generate: fn() -> String) -> Self {
        Self {
            issued: HashSet::new(),
            generate,
        }
    }

    pub fn next_id(&mut self) -> Result<String, SerializationError> {
        for _ in 0..MAX_ATTEMPTS {
            let id = (self.generate)();
            if self.issued.insert(id.clone()) {
                return Ok(id);
            }
        }
        Err(SerializationError::IdsExhausted {
            attempts: MAX_ATTEMPTS,
        })
    }

    pub fn issued(&self) -> usize {
        self.issued.len()
    }
}

/// 128 random bits as 32 lowercase hex digits
fn random_id() -> String {
    Uuid::new_v4().simple().to_string()
}
