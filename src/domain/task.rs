use crate::domain::{id::ItemId, sequence::Identified};
use serde::{Deserialize, Serialize};

/// A card on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: ItemId,
    pub text: String,
}

impl Task {
    /// Creates a new task with the given ID and text
    pub fn new(id: impl Into<ItemId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Replaces the text, keeping the id
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Identified for Task {
    fn id(&self) -> &ItemId {
        &self.id
    }
}
