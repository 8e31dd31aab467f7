//! Collection Helpers
//!
//! Pure splicing over the todo collection. Every helper leaves its input
//! untouched and returns a fresh `Vec`; callers publish the replacement
//! wholesale so prior snapshots are discarded, never mutated in place.

use crate::todo::Todo;

/// First synthetic id. Server-assigned ids live far below this, so
/// locally fabricated todos can never shadow a real one.
pub const SYNTHETIC_ID_BASE: u32 = 1_000_000;

/// Whether the collection holds a todo with this id
pub fn contains(todos: &[Todo], id: u32) -> bool {
    todos.iter().any(|t| t.id == id)
}

/// Copy with the completion flag of `id` flipped.
/// Returns the new collection and the new flag value.
pub fn toggled(todos: &[Todo], id: u32) -> Option<(Vec<Todo>, bool)> {
    let idx = todos.iter().position(|t| t.id == id)?;
    let mut next = todos.to_vec();
    let completed = !next[idx].completed;
    next[idx].completed = completed;
    Some((next, completed))
}

/// Copy with the title of `id` replaced
pub fn retitled(todos: &[Todo], id: u32, title: &str) -> Option<Vec<Todo>> {
    let idx = todos.iter().position(|t| t.id == id)?;
    let mut next = todos.to_vec();
    next[idx].title = title.to_string();
    Some(next)
}

/// Copy with the todo of `id` removed
pub fn without(todos: &[Todo], id: u32) -> Option<Vec<Todo>> {
    let idx = todos.iter().position(|t| t.id == id)?;
    let mut next = todos.to_vec();
    next.remove(idx);
    Some(next)
}

/// Copy with `todo` at the front
pub fn prepended(todos: &[Todo], todo: Todo) -> Vec<Todo> {
    let mut next = Vec::with_capacity(todos.len() + 1);
    next.push(todo);
    next.extend_from_slice(todos);
    next
}

/// Copy with the whole `batch` at the front, batch order preserved
pub fn prepended_batch(todos: &[Todo], batch: Vec<Todo>) -> Vec<Todo> {
    let mut next = batch;
    next.reserve(todos.len());
    next.extend_from_slice(todos);
    next
}

/// Fabricate `count` incomplete todos with sequential ids from `first_id`
/// and sequential generated titles. `first_id` must come from the
/// synthetic id counter, at or above [`SYNTHETIC_ID_BASE`].
pub fn synthetic_batch(first_id: u32, count: u32) -> Vec<Todo> {
    debug_assert!(first_id >= SYNTHETIC_ID_BASE);
    (0..count)
        .map(|k| Todo::new(first_id + k, format!("to do {}", first_id - SYNTHETIC_ID_BASE + k)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todos() -> Vec<Todo> {
        vec![
            Todo::new(1, "one"),
            Todo::new(2, "two"),
            Todo::new(3, "three"),
        ]
    }

    #[test]
    fn test_toggled_flips_only_target() {
        let todos = make_todos();
        let (next, completed) = toggled(&todos, 2).unwrap();
        assert!(completed);
        assert!(next[1].completed);
        assert!(!next[0].completed);
        assert!(!next[2].completed);
        // input untouched
        assert!(!todos[1].completed);
    }

    #[test]
    fn test_toggled_back_and_forth() {
        let todos = make_todos();
        let (once, _) = toggled(&todos, 1).unwrap();
        let (twice, completed) = toggled(&once, 1).unwrap();
        assert!(!completed);
        assert_eq!(twice, todos);
    }

    #[test]
    fn test_retitled_replaces_title() {
        let todos = make_todos();
        let next = retitled(&todos, 3, "renamed").unwrap();
        assert_eq!(next[2].title, "renamed");
        assert_eq!(todos[2].title, "three");
    }

    #[test]
    fn test_without_removes_exactly_one() {
        let todos = make_todos();
        let next = without(&todos, 2).unwrap();
        assert_eq!(next.len(), 2);
        assert!(!contains(&next, 2));
        assert!(contains(&next, 1));
        assert!(contains(&next, 3));
    }

    #[test]
    fn test_missing_id_yields_none() {
        let todos = make_todos();
        assert!(toggled(&todos, 99).is_none());
        assert!(retitled(&todos, 99, "x").is_none());
        assert!(without(&todos, 99).is_none());
    }

    #[test]
    fn test_prepended_puts_new_todo_first() {
        let todos = make_todos();
        let next = prepended(&todos, Todo::new(4, "four"));
        assert_eq!(next.len(), 4);
        assert_eq!(next[0].id, 4);
        assert_eq!(next[1].id, 1);
    }

    #[test]
    fn test_synthetic_batch_is_sequential_and_disjoint() {
        let batch = synthetic_batch(SYNTHETIC_ID_BASE, 3);
        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0].id, SYNTHETIC_ID_BASE);
        assert_eq!(batch[2].id, SYNTHETIC_ID_BASE + 2);
        assert_eq!(batch[0].title, "to do 0");
        assert_eq!(batch[2].title, "to do 2");
        assert!(batch.iter().all(|t| !t.completed));
    }

    #[test]
    fn test_prepended_batch_keeps_batch_order() {
        let todos = make_todos();
        let batch = synthetic_batch(SYNTHETIC_ID_BASE + 10, 2);
        let next = prepended_batch(&todos, batch);
        assert_eq!(next.len(), 5);
        assert_eq!(next[0].id, SYNTHETIC_ID_BASE + 10);
        assert_eq!(next[1].id, SYNTHETIC_ID_BASE + 11);
        assert_eq!(next[2].id, 1);
    }
}
