use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{Result, TaskError};

/// Format used to show and enter due dates.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub completed: bool,
}

impl Task {
    /// An empty task with a fresh random id.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4().to_string())
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            description: String::new(),
            due_date: None,
            priority: Priority::Low,
            completed: false,
        }
    }

    /// Check what the store expects of a task before saving it.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(TaskError::EmptyName);
        }
        Ok(())
    }
}

impl Default for Task {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a due date as typed into the editor. Blank input clears it.
pub fn parse_due_date(input: &str) -> Result<Option<NaiveDate>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(input, DUE_DATE_FORMAT)
        .map(Some)
        .map_err(|source| TaskError::InvalidDueDate {
            input: input.to_owned(),
            source,
        })
}

pub fn format_due_date(due_date: Option<NaiveDate>) -> String {
    due_date
        .map(|date| date.format(DUE_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

fn seed(
    id: &str,
    name: &str,
    description: &str,
    due_date: Option<(i32, u32, u32)>,
    priority: Priority,
    completed: bool,
) -> Task {
    Task {
        id: id.to_owned(),
        name: name.to_owned(),
        description: description.to_owned(),
        due_date: due_date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
        priority,
        completed,
    }
}

/// The tasks a fresh store starts with.
pub fn sample_tasks() -> Vec<Task> {
    use Priority::*;

    vec![
        seed(
            "1",
            "Finish Kotlin project",
            "Complete the development of the Kotlin multiplatform project.",
            Some((2024, 10, 13)),
            High,
            false,
        ),
        seed(
            "2",
            "Prepare for CELPIP exam",
            "Review materials and practice speaking, listening, and writing tasks for the CELPIP exam.",
            Some((2024, 10, 20)),
            High,
            true,
        ),
        seed(
            "3",
            "Sunday school lesson planning",
            "Prepare Galatians study materials and lesson plan for Sunday school.",
            Some((2024, 10, 13)),
            Medium,
            true,
        ),
        seed(
            "4",
            "Research Machine Learning frameworks",
            "Explore and compare different machine learning frameworks for business project.",
            None,
            Medium,
            false,
        ),
        seed(
            "5",
            "Buy groceries for food",
            "Purchase essentials for the week: fruits, vegetables, and snacks.",
            None,
            Low,
            true,
        ),
        seed(
            "6",
            "Review Apache Hive presentation",
            "Rehearse the presentation slides and prepare for potential questions.",
            Some((2024, 10, 10)),
            Medium,
            true,
        ),
        seed(
            "7",
            "Update LMS migration proposal",
            "Refine the 'eCentennial of Tomorrow' business plan for the LMS upgrade project.",
            Some((2024, 10, 12)),
            High,
            false,
        ),
        seed(
            "8",
            "Complete NVV statement assignment",
            "Finalize and submit the NVV statement for the Business & Entrepreneurship course.",
            Some((2024, 10, 11)),
            High,
            true,
        ),
        seed(
            "9",
            "Conduct ClickHouse datastore analysis",
            "Evaluate the efficiency and features of ClickHouse for high-performance analytics.",
            None,
            High,
            false,
        ),
        seed(
            "10",
            "Design UI for delivery app",
            "Create a user-friendly interface for the driverless point-to-point delivery app.",
            Some((2024, 10, 25)),
            Medium,
            false,
        ),
        seed(
            "11",
            "Team meeting for business venture",
            "Discuss and finalize the lean canvas analysis for instant delivery service.",
            None,
            Medium,
            false,
        ),
        seed(
            "12",
            "Submit expense report",
            "File the business expenses report for the last quarter.",
            Some((2024, 10, 11)),
            Low,
            true,
        ),
        seed(
            "13",
            "Organize project documents",
            "Arrange and categorize important project-related documents in the cloud storage.",
            Some((2024, 10, 19)),
            Low,
            false,
        ),
        seed(
            "14",
            "Prepare sermon for Sunday service",
            "Write and practice the sermon for this Sunday's church service, focusing on faith and works.",
            Some((2024, 10, 20)),
            High,
            false,
        ),
        seed(
            "15",
            "Review Kotlin Multiplatform codebase",
            "Go through the codebase to ensure it's optimized and follows best practices.",
            Some((2024, 10, 17)),
            Medium,
            false,
        ),
        seed(
            "16",
            "Follow up with Centennial College cafeteria survey",
            "Check the results and feedback of the meal and snack ordering survey at the Progress campus.",
            Some((2024, 10, 16)),
            Low,
            false,
        ),
        seed(
            "17",
            "Finalize vision statement",
            "Complete the vision statement for the business venture plan 'Instant Point-to-Point Delivery.'",
            Some((2024, 10, 13)),
            High,
            true,
        ),
        seed(
            "18",
            "Book appointment with financial advisor",
            "Set up a meeting to discuss financial strategies for the new business venture.",
            Some((2024, 10, 22)),
            Medium,
            false,
        ),
    ]
}
