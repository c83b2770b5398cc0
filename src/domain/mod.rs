pub mod board;
pub mod drag;
pub mod id;
pub mod sequence;
pub mod task;

pub use board::{AppState, BoardConfig, List};
pub use drag::{DragItem, DragKind};
pub use id::{IdGenerator, ItemId, RandomIds, SequentialIds};
pub use sequence::{find_item_index_by_id, move_item, Identified};
pub use task::Task;
