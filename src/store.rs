use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{Result, TaskError};
use crate::model::{sample_tasks, Task};

/// Store handle shared between the screens.
pub type SharedTaskStore = Arc<RwLock<TaskStore>>;

/// In-memory tasks in insertion order.
#[derive(Clone, Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    show_completed: bool,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the sample tasks.
    pub fn with_samples() -> Self {
        Self::from_tasks(sample_tasks())
    }

    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut store = Self::new();
        for task in tasks {
            store.add(task);
        }
        store
    }

    pub fn shared(self) -> SharedTaskStore {
        Arc::new(RwLock::new(self))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    /// Insert a task. A task with the same id is replaced in place.
    pub fn add(&mut self, task: Task) {
        match self.position(&task.id) {
            Some(index) => {
                log::debug!("replacing task {}", task.id);
                self.tasks[index] = task;
            }
            None => {
                log::debug!("adding task {}", task.id);
                self.tasks.push(task);
            }
        }
    }

    pub fn remove(&mut self, id: &str) -> Result<Task> {
        let index = self
            .position(id)
            .ok_or_else(|| TaskError::UnknownTask(id.to_owned()))?;
        log::debug!("removing task {id}");
        Ok(self.tasks.remove(index))
    }

    pub fn update(&mut self, task: Task) -> Result<()> {
        let index = self
            .position(&task.id)
            .ok_or_else(|| TaskError::UnknownTask(task.id.clone()))?;
        log::debug!("updating task {}", task.id);
        self.tasks[index] = task;
        Ok(())
    }

    /// Flip the completion flag, returning the new value.
    pub fn toggle_completed(&mut self, id: &str) -> Result<bool> {
        let index = self
            .position(id)
            .ok_or_else(|| TaskError::UnknownTask(id.to_owned()))?;
        let task = &mut self.tasks[index];
        task.completed = !task.completed;
        log::debug!("task {id} completed: {}", task.completed);
        Ok(task.completed)
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn show_completed(&self) -> bool {
        self.show_completed
    }

    pub fn set_show_completed(&mut self, show_completed: bool) {
        log::debug!("show completed tasks: {show_completed}");
        self.show_completed = show_completed;
    }

    /// Snapshot of the tasks the list shows, in insertion order.
    pub fn visible(&self) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| self.show_completed || !task.completed)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, completed: bool) -> Task {
        Task {
            name: format!("task {id}"),
            completed,
            ..Task::with_id(id)
        }
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|task| task.id.as_str()).collect()
    }

    #[test]
    fn visible_hides_completed_by_default() {
        let mut store = TaskStore::from_tasks([task("a", false), task("b", true), task("c", false)]);
        assert_eq!(ids(&store.visible()), ["a", "c"]);

        store.set_show_completed(true);
        assert_eq!(ids(&store.visible()), ["a", "b", "c"]);
    }

    #[test]
    fn update_keeps_position() {
        let mut store = TaskStore::from_tasks([task("a", false), task("b", false)]);
        let mut changed = task("a", false);
        changed.name = "renamed".into();

        store.update(changed).unwrap();
        assert_eq!(ids(&store.visible()), ["a", "b"]);
        assert_eq!(store.get("a").unwrap().name, "renamed");
    }

    #[test]
    fn unknown_ids_are_errors() {
        let mut store = TaskStore::new();
        assert_eq!(
            store.remove("nope"),
            Err(TaskError::UnknownTask("nope".into()))
        );
        assert_eq!(
            store.update(task("nope", false)),
            Err(TaskError::UnknownTask("nope".into()))
        );
        assert!(store.toggle_completed("nope").is_err());
    }

    #[test]
    fn add_replaces_same_id() {
        let mut store = TaskStore::new();
        store.add(task("a", false));
        store.add(task("a", true));
        assert_eq!(store.len(), 1);
        assert!(store.get("a").unwrap().completed);
    }

    #[test]
    fn toggle_and_remove() {
        let mut store = TaskStore::from_tasks([task("a", false)]);
        assert_eq!(store.toggle_completed("a"), Ok(true));
        assert!(store.visible().is_empty());

        let removed = store.remove("a").unwrap();
        assert_eq!(removed.id, "a");
        assert!(store.is_empty());
    }

    #[test]
    fn samples_start_hiding_completed() {
        let store = TaskStore::with_samples();
        assert_eq!(store.len(), 18);
        assert_eq!(store.visible().len(), 11);
    }
}
