use chrono::ParseError;

/// Errors of the task model and store.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TaskError {
    /// No task with this id is in the store.
    #[error("no task with id `{0}`")]
    UnknownTask(String),

    /// A due date that is not an ISO calendar date.
    #[error("invalid due date `{input}`, expected YYYY-MM-DD")]
    InvalidDueDate {
        input: String,
        #[source]
        source: ParseError,
    },

    #[error("a task needs a name")]
    EmptyName,
}

pub type Result<T, E = TaskError> = std::result::Result<T, E>;
