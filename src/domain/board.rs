use crate::{
    domain::{
        drag::{DragItem, DragKind},
        id::ItemId,
        sequence::{find_item_index_by_id, Identified},
        task::Task,
    },
    error::{BoardError, Result},
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A kanban column holding an ordered sequence of tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: ItemId,
    pub text: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl List {
    pub fn new(id: impl Into<ItemId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            tasks: Vec::new(),
        }
    }

    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }
}

impl Identified for List {
    fn id(&self) -> &ItemId {
        &self.id
    }
}

/// Board configuration: the snapshot a session starts from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    pub lists: Vec<List>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Default Board".to_string(),
            lists: vec![
                List::new("0", "New Features")
                    .with_task(Task::new("c0", "Queued Features or Tasks to do")),
                List::new("1", "Running Tasks")
                    .with_task(Task::new("c2", "Features/Tasks under development")),
                List::new("2", "Fix & Upgrade")
                    .with_task(Task::new("c3", "Any task which fails and required to fix")),
                List::new("3", "Done and Deployed").with_task(Task::new(
                    "c4",
                    "Deployed on Production and Feature running live and fine",
                )),
            ],
        }
    }
}

impl BoardConfig {
    /// Parses and validates a seed snapshot from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that list ids are unique and task ids are unique within each list
    pub fn validate(&self) -> Result<()> {
        let mut list_ids = HashSet::new();
        for list in &self.lists {
            if !list_ids.insert(list.id.as_str()) {
                return Err(BoardError::DuplicateId(list.id.to_string()));
            }

            let mut task_ids = HashSet::new();
            for task in &list.tasks {
                if !task_ids.insert(task.id.as_str()) {
                    return Err(BoardError::DuplicateId(task.id.to_string()));
                }
            }
        }
        Ok(())
    }
}

/// Board state: every list plus the drag-in-progress marker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub dragged_item: Option<DragItem>,
    pub lists: Vec<List>,
}

impl AppState {
    /// Builds the initial state from a validated configuration
    pub fn from_config(config: &BoardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::seeded(config))
    }

    /// Initial state for an already validated configuration
    pub(crate) fn seeded(config: &BoardConfig) -> Self {
        Self {
            dragged_item: None,
            lists: config.lists.clone(),
        }
    }

    pub fn list_index(&self, id: &str) -> Option<usize> {
        find_item_index_by_id(&self.lists, id)
    }

    pub fn list(&self, id: &str) -> Option<&List> {
        self.list_index(id).map(|index| &self.lists[index])
    }

    /// Total number of tasks across all lists
    pub fn task_count(&self) -> usize {
        self.lists.iter().map(|list| list.tasks.len()).sum()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged_item.is_some()
    }

    pub fn is_dragging_list(&self) -> bool {
        self.dragged_item
            .as_ref()
            .is_some_and(|item| item.kind() == DragKind::List)
    }
}
