//! Single-field partial updates for `PUT /todos/{id}`.
//!
//! A body may name several fields but only one is written: the first of
//! status, priority, category, todo text and due date that is present.

use crate::error::ValidationError;
use crate::filter::Column;
use crate::types::TodoPayload;
use crate::validate::normalize_date;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoUpdate {
    Status(String),
    Priority(String),
    Category(String),
    Todo(String),
    /// Canonical `yyyy-MM-dd` once selected.
    DueDate(String),
}

type Rule = fn(&TodoPayload) -> Option<TodoUpdate>;

const RULES: [Rule; 5] = [
    |payload| payload.status.clone().map(TodoUpdate::Status),
    |payload| payload.priority.clone().map(TodoUpdate::Priority),
    |payload| payload.category.clone().map(TodoUpdate::Category),
    |payload| payload.todo.clone().map(TodoUpdate::Todo),
    |payload| payload.due_date.clone().map(TodoUpdate::DueDate),
];

impl TodoUpdate {
    pub fn select(payload: &TodoPayload) -> Result<Self, ValidationError> {
        let update = RULES
            .iter()
            .find_map(|rule| rule(payload))
            .ok_or(ValidationError::NothingToUpdate)?;

        match update {
            TodoUpdate::DueDate(raw) => normalize_date(&raw)
                .map(TodoUpdate::DueDate)
                .ok_or(ValidationError::DueDate),
            other => Ok(other),
        }
    }

    pub const fn column(&self) -> Column {
        match self {
            TodoUpdate::Status(_) => Column::Status,
            TodoUpdate::Priority(_) => Column::Priority,
            TodoUpdate::Category(_) => Column::Category,
            TodoUpdate::Todo(_) => Column::Todo,
            TodoUpdate::DueDate(_) => Column::DueDate,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            TodoUpdate::Status(value)
            | TodoUpdate::Priority(value)
            | TodoUpdate::Category(value)
            | TodoUpdate::Todo(value)
            | TodoUpdate::DueDate(value) => value,
        }
    }

    /// Field name used in the `"<label> Updated"` response.
    pub const fn label(&self) -> &'static str {
        match self {
            TodoUpdate::Status(_) => "Status",
            TodoUpdate::Priority(_) => "Priority",
            TodoUpdate::Category(_) => "Category",
            TodoUpdate::Todo(_) => "Todo",
            TodoUpdate::DueDate(_) => "Due Date",
        }
    }
}
