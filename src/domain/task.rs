use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a task, derived from its creation time in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single checklist item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

/// Commands accepted by the task list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskCommand {
    Add(String),
    Toggle(TaskId),
    Delete(TaskId),
}

/// Ordered checklist (insertion order is display order)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
    last_id: u64,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starter checklist shown on a fresh launch
    pub fn with_samples() -> Self {
        let mut list = Self::new();
        for (text, completed) in [
            ("Review React components", true),
            ("Write documentation", false),
            ("Deploy to production", false),
        ] {
            if let Some(id) = list.add(text) {
                if completed {
                    list.toggle(id);
                }
            }
        }
        list
    }

    /// Apply a command, consuming and returning the list
    pub fn apply(mut self, command: TaskCommand) -> Self {
        match command {
            TaskCommand::Add(text) => {
                self.add(&text);
            }
            TaskCommand::Toggle(id) => {
                self.toggle(id);
            }
            TaskCommand::Delete(id) => {
                self.delete(id);
            }
        }
        self
    }

    /// Append a task. Whitespace-only text is ignored.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = self.next_id();
        self.tasks.push(Task {
            id,
            text: text.to_string(),
            completed: false,
        });
        Some(id)
    }

    /// Flip the completed flag. Returns false if the id is unknown.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Remove a task, keeping the order of the rest. Returns false if the id is unknown.
    pub fn delete(&mut self, id: TaskId) -> bool {
        match self.tasks.iter().position(|t| t.id == id) {
            Some(index) => {
                self.tasks.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Completion ratio as a percentage; 0 for an empty list
    pub fn progress_percent(&self) -> f64 {
        if self.tasks.is_empty() {
            return 0.0;
        }
        self.completed_count() as f64 / self.tasks.len() as f64 * 100.0
    }

    /// Millisecond timestamp, bumped past the previous id if the clock hasn't moved
    fn next_id(&mut self) -> TaskId {
        let now = u64::try_from(Local::now().timestamp_millis()).unwrap_or(0);
        let id = now.max(self.last_id + 1);
        self.last_id = id;
        TaskId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(list: &TaskList) -> Vec<&str> {
        list.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_add_trims_and_appends() {
        let mut list = TaskList::new();
        let id = list.add("  Buy milk  ").unwrap();
        assert_eq!(list.len(), 1);
        let task = list.get(0).unwrap();
        assert_eq!(task.id, id);
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn test_add_whitespace_is_noop() {
        let mut list = TaskList::with_samples();
        let before = list.clone();
        assert_eq!(list.add("  "), None);
        assert_eq!(list.add(""), None);
        assert_eq!(list.add("\t\n"), None);
        assert_eq!(list, before);
    }

    #[test]
    fn test_ids_unique_and_increasing() {
        let mut list = TaskList::new();
        let ids: Vec<TaskId> = (0..50)
            .map(|i| list.add(&format!("task {}", i)).unwrap())
            .collect();
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut list = TaskList::new();
        list.add("a");
        list.add("b");
        list.add("c");
        assert_eq!(texts(&list), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_double_toggle_restores_flag() {
        let mut list = TaskList::new();
        let id = list.add("write tests").unwrap();
        assert!(list.toggle(id));
        assert!(list.get(0).unwrap().completed);
        assert!(list.toggle(id));
        assert!(!list.get(0).unwrap().completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut list = TaskList::with_samples();
        let before = list.clone();
        assert!(!list.toggle(TaskId(1)));
        assert_eq!(list, before);
    }

    #[test]
    fn test_delete_keeps_relative_order() {
        let mut list = TaskList::new();
        list.add("a");
        let b = list.add("b").unwrap();
        list.add("c");
        assert!(list.delete(b));
        assert_eq!(texts(&list), vec!["a", "c"]);
    }

    #[test]
    fn test_delete_unknown_id_leaves_list_identical() {
        let mut list = TaskList::with_samples();
        let before = list.clone();
        assert!(!list.delete(TaskId(7)));
        assert_eq!(list, before);
    }

    #[test]
    fn test_progress() {
        let mut list = TaskList::new();
        assert_eq!(list.progress_percent(), 0.0);

        let a = list.add("a").unwrap();
        list.add("b");
        list.add("c");
        list.add("d");
        list.toggle(a);
        assert_eq!(list.completed_count(), 1);
        assert_eq!(list.progress_percent(), 25.0);

        list.delete(a);
        assert_eq!(list.completed_count(), 0);
        assert_eq!(list.progress_percent(), 0.0);
    }

    #[test]
    fn test_samples() {
        let list = TaskList::with_samples();
        assert_eq!(
            texts(&list),
            vec!["Review React components", "Write documentation", "Deploy to production"]
        );
        assert_eq!(list.completed_count(), 1);
    }

    #[test]
    fn test_apply_sequence_keeps_counts_bounded() {
        let mut list = TaskList::new();
        let mut known = Vec::new();
        for step in 0..60u64 {
            let command = match step % 5 {
                0 | 1 => TaskCommand::Add(format!("item {}", step)),
                2 | 3 => match known.get(step as usize % known.len().max(1)) {
                    Some(id) => TaskCommand::Toggle(*id),
                    None => TaskCommand::Toggle(TaskId(step)),
                },
                _ => match known.first() {
                    Some(id) => TaskCommand::Delete(*id),
                    None => TaskCommand::Delete(TaskId(step)),
                },
            };
            list = list.apply(command);
            known = list.iter().map(|t| t.id).collect();

            assert!(list.completed_count() <= list.len());
            let pct = list.progress_percent();
            assert!((0.0..=100.0).contains(&pct));
            if list.is_empty() {
                assert_eq!(pct, 0.0);
            }
        }
    }
}
