use crate::domain::{drag::DragItem, id::ItemId};
use serde::{Deserialize, Serialize};

/// Every state transition the board accepts
///
/// On the wire an action looks like
/// `{"type": "MOVE_LIST", "payload": {"dragIndex": 0, "hoverIndex": 2}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    SetDraggedItem(Option<DragItem>),
    AddList(String),
    #[serde(rename_all = "camelCase")]
    AddTask { text: String, list_id: ItemId },
    #[serde(rename_all = "camelCase")]
    MoveList { drag_index: usize, hover_index: usize },
    #[serde(rename_all = "camelCase")]
    MoveTask {
        drag_index: usize,
        hover_index: usize,
        source_column: ItemId,
        target_column: ItemId,
    },
}

impl Action {
    /// Wire tags of every known action, in variant declaration order
    pub const TYPES: [&'static str; 5] = [
        "SET_DRAGGED_ITEM",
        "ADD_LIST",
        "ADD_TASK",
        "MOVE_LIST",
        "MOVE_TASK",
    ];

    fn tag_index(&self) -> usize {
        match self {
            Self::SetDraggedItem(_) => 0,
            Self::AddList(_) => 1,
            Self::AddTask { .. } => 2,
            Self::MoveList { .. } => 3,
            Self::MoveTask { .. } => 4,
        }
    }

    /// Wire tag of this action
    pub fn kind(&self) -> &'static str {
        Self::TYPES[self.tag_index()]
    }

    pub fn is_known_type(tag: &str) -> bool {
        Self::TYPES.iter().any(|known| *known == tag)
    }
}
