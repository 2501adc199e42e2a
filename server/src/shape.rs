//! Stored rows and their wire form.

use sqlx::FromRow;
use todo_core::Todo;

/// A row of the `todo` table as SQLite returns it.
#[derive(Debug, Clone, FromRow)]
pub(crate) struct TodoRow {
    pub id: i64,
    pub todo: String,
    pub priority: String,
    pub status: String,
    pub category: String,
    pub due_date: String,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo {
            id: row.id,
            todo: row.todo,
            priority: row.priority,
            status: row.status,
            category: row.category,
            due_date: row.due_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_date_column_becomes_camel_case() {
        let row = TodoRow {
            id: 4,
            todo: "Read a book".to_string(),
            priority: "MEDIUM".to_string(),
            status: "IN PROGRESS".to_string(),
            category: "LEARNING".to_string(),
            due_date: "2024-05-01".to_string(),
        };
        let json = serde_json::to_value(Todo::from(row)).unwrap();
        assert_eq!(json["dueDate"], "2024-05-01");
        assert!(json.get("due_date").is_none());
        assert_eq!(json["status"], "IN PROGRESS");
    }
}
