use crate::domain::id::ItemId;
use serde::{Deserialize, Serialize};

/// What the user is currently dragging, set on drag start and cleared on drag end
///
/// Only `type` and `id` are required on the wire; the gesture layer may add the
/// origin index, the card text and, for tasks, the source column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DragItem {
    #[serde(rename_all = "camelCase")]
    List {
        id: ItemId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Task {
        id: ItemId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        source_column_id: Option<ItemId>,
    },
}

/// Which kind of entity a drag gesture carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    List,
    Task,
}

impl DragItem {
    /// A list drag carrying only its id
    pub fn list(id: impl Into<ItemId>) -> Self {
        Self::List {
            id: id.into(),
            index: None,
            text: None,
        }
    }

    /// A task drag carrying its id and the column it was picked up from
    pub fn task(id: impl Into<ItemId>, source_column_id: impl Into<ItemId>) -> Self {
        Self::Task {
            id: id.into(),
            index: None,
            text: None,
            source_column_id: Some(source_column_id.into()),
        }
    }

    pub fn id(&self) -> &ItemId {
        match self {
            Self::List { id, .. } | Self::Task { id, .. } => id,
        }
    }

    pub fn kind(&self) -> DragKind {
        match self {
            Self::List { .. } => DragKind::List,
            Self::Task { .. } => DragKind::Task,
        }
    }

    /// Column the dragged task was picked up from; `None` for lists
    pub fn source_column_id(&self) -> Option<&ItemId> {
        match self {
            Self::List { .. } => None,
            Self::Task {
                source_column_id, ..
            } => source_column_id.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_item_accessors() {
        let list = DragItem::List {
            id: "0".into(),
            index: Some(0),
            text: Some("New Features".to_string()),
        };
        assert_eq!(list.kind(), DragKind::List);
        assert_eq!(list.id().as_str(), "0");
        assert!(list.source_column_id().is_none());

        let task = DragItem::Task {
            id: "c0".into(),
            index: Some(0),
            text: Some("Queued".to_string()),
            source_column_id: Some("0".into()),
        };
        assert_eq!(task.kind(), DragKind::Task);
        assert_eq!(task.source_column_id().map(ItemId::as_str), Some("0"));
    }

    #[test]
    fn test_drag_item_wire_shape() {
        let json = r#"{
            "type": "TASK",
            "id": "c3",
            "index": 0,
            "text": "Fix me",
            "sourceColumnId": "2"
        }"#;

        let item: DragItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind(), DragKind::Task);
        assert_eq!(item.source_column_id().map(ItemId::as_str), Some("2"));

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["type"], "TASK");
        assert_eq!(value["sourceColumnId"], "2");
    }

    #[test]
    fn test_drag_item_minimal_wire_shape() {
        let list: DragItem = serde_json::from_str(r#"{ "type": "LIST", "id": "0" }"#).unwrap();
        assert_eq!(list, DragItem::list("0"));

        let task: DragItem = serde_json::from_str(r#"{ "type": "TASK", "id": "c0" }"#).unwrap();
        assert_eq!(task.kind(), DragKind::Task);
        assert_eq!(task.id().as_str(), "c0");
        assert!(task.source_column_id().is_none());

        let task: DragItem =
            serde_json::from_str(r#"{ "type": "TASK", "id": "c0", "sourceColumnId": "0" }"#)
                .unwrap();
        assert_eq!(task, DragItem::task("c0", "0"));
    }

    #[test]
    fn test_drag_item_omits_absent_fields() {
        let value = serde_json::to_value(DragItem::list("3")).unwrap();
        assert_eq!(value, serde_json::json!({ "type": "LIST", "id": "3" }));
    }
}
