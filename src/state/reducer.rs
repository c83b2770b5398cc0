use crate::{
    domain::{
        board::{AppState, List},
        id::IdGenerator,
        sequence::{find_item_index_by_id, move_item},
        task::Task,
    },
    error::{BoardError, Result},
    state::action::Action,
};

/// Computes the state that follows `action`
///
/// `state` is never modified. On error nothing is returned but the error, so a
/// caller holding `state` keeps a consistent board.
///
/// # Errors
/// * `ListNotFound` when `ADD_TASK` or `MOVE_TASK` names a list that does not exist
/// * `IndexOutOfRange` when a drag or hover index falls outside its sequence
pub fn app_state_reducer(
    state: &AppState,
    action: &Action,
    ids: &mut dyn IdGenerator,
) -> Result<AppState> {
    match action {
        Action::SetDraggedItem(item) => Ok(AppState {
            dragged_item: item.clone(),
            ..state.clone()
        }),

        Action::AddList(text) => {
            let mut lists = state.lists.clone();
            lists.push(List::new(ids.generate(), text.clone()));
            Ok(AppState {
                lists,
                ..state.clone()
            })
        }

        Action::AddTask { text, list_id } => {
            let target = lookup_list(state, list_id.as_str())?;

            let mut lists = state.lists.clone();
            lists[target].tasks.push(Task::new(ids.generate(), text.clone()));
            Ok(AppState {
                lists,
                ..state.clone()
            })
        }

        Action::MoveList {
            drag_index,
            hover_index,
        } => Ok(AppState {
            lists: move_item(&state.lists, *drag_index, *hover_index)?,
            ..state.clone()
        }),

        Action::MoveTask {
            drag_index,
            hover_index,
            source_column,
            target_column,
        } => {
            let source = lookup_list(state, source_column.as_str())?;
            let target = lookup_list(state, target_column.as_str())?;

            let mut lists = state.lists.clone();
            if source == target {
                lists[source].tasks =
                    move_item(&state.lists[source].tasks, *drag_index, *hover_index)?;
            } else {
                let source_len = lists[source].tasks.len();
                if *drag_index >= source_len {
                    return Err(BoardError::IndexOutOfRange {
                        index: *drag_index,
                        len: source_len,
                    });
                }
                let target_len = lists[target].tasks.len();
                if *hover_index > target_len {
                    return Err(BoardError::IndexOutOfRange {
                        index: *hover_index,
                        len: target_len,
                    });
                }

                let task = lists[source].tasks.remove(*drag_index);
                lists[target].tasks.insert(*hover_index, task);
            }

            Ok(AppState {
                lists,
                ..state.clone()
            })
        }
    }
}

fn lookup_list(state: &AppState, id: &str) -> Result<usize> {
    find_item_index_by_id(&state.lists, id)
        .ok_or_else(|| BoardError::ListNotFound(id.to_string()))
}
