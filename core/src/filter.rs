//! Which `WHERE` clause a `GET /todos` query selects.
//!
//! Exactly one rule applies: the first in [`RULES`] whose fields are all
//! present. Anything else in the query is ignored, so `category`,
//! `priority` and `search_q` together filter by category and priority only.

use crate::types::TodoQuery;

/// Columns of the `todo` table. Statements name columns only through this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    Todo,
    Priority,
    Status,
    Category,
    DueDate,
}

impl Column {
    pub const fn as_str(self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Todo => "todo",
            Column::Priority => "priority",
            Column::Status => "status",
            Column::Category => "category",
            Column::DueDate => "due_date",
        }
    }
}

/// One term of a filter. Values are always bound, never spliced into SQL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Equals(Column, String),
    Contains(Column, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoFilter {
    StatusAndPriority { status: String, priority: String },
    CategoryAndStatus { category: String, status: String },
    CategoryAndPriority { category: String, priority: String },
    Status(String),
    Priority(String),
    Search(String),
    Category(String),
    All,
}

type Rule = fn(&TodoQuery) -> Option<TodoFilter>;

/// Evaluated top to bottom; the first `Some` wins.
const RULES: [Rule; 7] = [
    status_and_priority,
    category_and_status,
    category_and_priority,
    status_only,
    priority_only,
    search_only,
    category_only,
];

fn status_and_priority(query: &TodoQuery) -> Option<TodoFilter> {
    Some(TodoFilter::StatusAndPriority {
        status: query.status.clone()?,
        priority: query.priority.clone()?,
    })
}

fn category_and_status(query: &TodoQuery) -> Option<TodoFilter> {
    Some(TodoFilter::CategoryAndStatus {
        category: query.category.clone()?,
        status: query.status.clone()?,
    })
}

fn category_and_priority(query: &TodoQuery) -> Option<TodoFilter> {
    Some(TodoFilter::CategoryAndPriority {
        category: query.category.clone()?,
        priority: query.priority.clone()?,
    })
}

fn status_only(query: &TodoQuery) -> Option<TodoFilter> {
    query.status.clone().map(TodoFilter::Status)
}

fn priority_only(query: &TodoQuery) -> Option<TodoFilter> {
    query.priority.clone().map(TodoFilter::Priority)
}

fn search_only(query: &TodoQuery) -> Option<TodoFilter> {
    query.search_q.clone().map(TodoFilter::Search)
}

fn category_only(query: &TodoQuery) -> Option<TodoFilter> {
    query.category.clone().map(TodoFilter::Category)
}

impl TodoFilter {
    pub fn select(query: &TodoQuery) -> Self {
        RULES
            .iter()
            .find_map(|rule| rule(query))
            .unwrap_or(TodoFilter::All)
    }

    /// Terms joined with `AND`. Empty for [`TodoFilter::All`].
    pub fn conditions(&self) -> Vec<Condition> {
        use Condition::{Contains, Equals};

        match self {
            TodoFilter::StatusAndPriority { status, priority } => vec![
                Equals(Column::Status, status.clone()),
                Equals(Column::Priority, priority.clone()),
            ],
            TodoFilter::CategoryAndStatus { category, status } => vec![
                Equals(Column::Category, category.clone()),
                Equals(Column::Status, status.clone()),
            ],
            TodoFilter::CategoryAndPriority { category, priority } => vec![
                Equals(Column::Category, category.clone()),
                Equals(Column::Priority, priority.clone()),
            ],
            TodoFilter::Status(status) => vec![Equals(Column::Status, status.clone())],
            TodoFilter::Priority(priority) => vec![Equals(Column::Priority, priority.clone())],
            TodoFilter::Search(text) => vec![Contains(Column::Todo, text.clone())],
            TodoFilter::Category(category) => vec![Equals(Column::Category, category.clone())],
            TodoFilter::All => Vec::new(),
        }
    }
}
