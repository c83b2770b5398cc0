use crate::{
    domain::id::ItemId,
    error::{BoardError, Result},
};

/// Anything addressed by an [`ItemId`] inside an ordered sequence
pub trait Identified {
    fn id(&self) -> &ItemId;
}

/// Finds the position of the first item whose id equals `id`
///
/// Returns `None` when nothing matches.
///
/// # Examples
/// ```
/// use kanban_state::domain::sequence::find_item_index_by_id;
/// use kanban_state::domain::Task;
///
/// let tasks = vec![Task::new("a", "First"), Task::new("b", "Second")];
///
/// assert_eq!(find_item_index_by_id(&tasks, "b"), Some(1));
/// assert_eq!(find_item_index_by_id(&tasks, "z"), None);
/// ```
pub fn find_item_index_by_id<T: Identified>(items: &[T], id: &str) -> Option<usize> {
    items.iter().position(|item| item.id().as_str() == id)
}

/// Returns a new sequence with the item at `from` moved to `to`
///
/// The item is removed first and `to` is interpreted against the shortened
/// sequence. A `to` at or past the end of the shortened sequence places the
/// item last. `items` itself is left untouched.
///
/// # Errors
/// `IndexOutOfRange` if `from >= len` or `to > len`.
///
/// # Examples
/// ```
/// use kanban_state::domain::sequence::move_item;
///
/// let letters = vec!['A', 'B', 'C', 'D'];
///
/// assert_eq!(move_item(&letters, 0, 3).unwrap(), vec!['B', 'C', 'D', 'A']);
/// assert_eq!(move_item(&letters, 3, 0).unwrap(), vec!['D', 'A', 'B', 'C']);
/// ```
pub fn move_item<T: Clone>(items: &[T], from: usize, to: usize) -> Result<Vec<T>> {
    let len = items.len();
    if from >= len {
        return Err(BoardError::IndexOutOfRange { index: from, len });
    }
    if to > len {
        return Err(BoardError::IndexOutOfRange { index: to, len });
    }

    let mut moved = items.to_vec();
    let item = moved.remove(from);
    let to = to.min(moved.len());
    moved.insert(to, item);
    Ok(moved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Task;
    use proptest::prelude::*;

    fn letters() -> Vec<char> {
        vec!['A', 'B', 'C', 'D']
    }

    #[test]
    fn test_find_item_index_by_id() {
        let tasks = vec![Task::new("a", "A"), Task::new("b", "B")];

        assert_eq!(find_item_index_by_id(&tasks, "a"), Some(0));
        assert_eq!(find_item_index_by_id(&tasks, "b"), Some(1));
    }

    #[test]
    fn test_find_item_index_by_id_missing() {
        let tasks = vec![Task::new("a", "A"), Task::new("b", "B")];
        assert_eq!(find_item_index_by_id(&tasks, "z"), None);

        let empty: Vec<Task> = Vec::new();
        assert_eq!(find_item_index_by_id(&empty, "a"), None);
    }

    #[test]
    fn test_find_item_index_by_id_returns_first_match() {
        let tasks = vec![
            Task::new("x", "First"),
            Task::new("y", "Other"),
            Task::new("x", "Second"),
        ];
        assert_eq!(find_item_index_by_id(&tasks, "x"), Some(0));
    }

    #[test]
    fn test_move_item_forward_and_back() {
        assert_eq!(move_item(&letters(), 0, 3).unwrap(), vec!['B', 'C', 'D', 'A']);
        assert_eq!(move_item(&letters(), 3, 0).unwrap(), vec!['D', 'A', 'B', 'C']);
        assert_eq!(move_item(&letters(), 1, 2).unwrap(), vec!['A', 'C', 'B', 'D']);
    }

    #[test]
    fn test_move_item_same_index_is_noop() {
        assert_eq!(move_item(&letters(), 1, 1).unwrap(), letters());
    }

    #[test]
    fn test_move_item_to_len_clamps_to_end() {
        // Last item moved "past" the shortened sequence stays last
        assert_eq!(move_item(&letters(), 3, 4).unwrap(), letters());
        assert_eq!(move_item(&letters(), 0, 4).unwrap(), vec!['B', 'C', 'D', 'A']);
    }

    #[test]
    fn test_move_item_does_not_mutate_input() {
        let original = letters();
        let _ = move_item(&original, 0, 2).unwrap();
        assert_eq!(original, letters());
    }

    #[test]
    fn test_move_item_out_of_range() {
        assert!(matches!(
            move_item(&letters(), 4, 0),
            Err(BoardError::IndexOutOfRange { index: 4, len: 4 })
        ));
        assert!(matches!(
            move_item(&letters(), 0, 5),
            Err(BoardError::IndexOutOfRange { index: 5, len: 4 })
        ));

        let empty: Vec<char> = Vec::new();
        assert!(move_item(&empty, 0, 0).is_err());
    }

    proptest! {
        #[test]
        fn prop_self_move_is_identity(
            items in prop::collection::vec(any::<u8>(), 1..20),
            seed in any::<usize>()
        ) {
            let index = seed % items.len();
            prop_assert_eq!(move_item(&items, index, index).unwrap(), items);
        }

        #[test]
        fn prop_move_preserves_elements(
            items in prop::collection::vec(any::<u8>(), 1..20),
            a in any::<usize>(),
            b in any::<usize>()
        ) {
            let from = a % items.len();
            let to = b % (items.len() + 1);
            let moved = move_item(&items, from, to).unwrap();

            prop_assert_eq!(moved.len(), items.len());

            // Everything except the moved item keeps its relative order
            let mut rest = items.clone();
            let item = rest.remove(from);
            let mut moved_rest = moved.clone();
            moved_rest.remove(to.min(rest.len()));
            prop_assert_eq!(moved_rest, rest);
            prop_assert_eq!(moved[to.min(items.len() - 1)], item);
        }
    }
}
