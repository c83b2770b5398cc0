//! # Kanban State
//!
//! Centralized state container for a drag-and-drop kanban board.
//!
//! This crate provides the board data model, the closed set of actions that
//! mutate it, and the reordering rules behind dragging lists and tasks,
//! without any dependency on a specific UI or gesture layer.

pub mod domain;
pub mod error;
pub mod state;
pub mod store;

// Re-export commonly used types
pub use domain::{
    board::{AppState, BoardConfig, List},
    drag::{DragItem, DragKind},
    id::{IdGenerator, ItemId, RandomIds, SequentialIds},
    task::Task,
};
pub use error::{BoardError, Result};
pub use state::{action::Action, reducer::app_state_reducer};
pub use store::BoardStore;
