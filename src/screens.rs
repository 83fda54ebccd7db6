//! The two screens of the app: the task list and the task editor.

pub mod edit;
pub mod list;

pub use edit::{EditorOutcome, TaskEditor};
pub use list::{task_table, ListAction, Navigation, TaskList};
