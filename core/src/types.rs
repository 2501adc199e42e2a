//! Domain DTOs for the todo API.
//!
//! # Design
//! Field values travel as raw strings on the wire and in the `todo` table.
//! The enumerations exist to check membership and to build typed inserts;
//! storage never enforces them, so rows are read back as plain strings and
//! request payloads keep every field optional until a validator has run.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validate::normalize_date;

macro_rules! literal_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $literal:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $literal)]
                $variant,
            )+
        }

        impl $name {
            /// Every accepted value, in the order the API documents them.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $literal,)+
                }
            }

            /// Exact, case-sensitive lookup of a wire literal.
            pub fn parse(raw: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|value| value.as_str() == raw)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

literal_enum!(
    /// How urgent a todo is.
    Priority {
        High => "HIGH",
        Medium => "MEDIUM",
        Low => "LOW",
    }
);

literal_enum!(
    /// Which area of life a todo belongs to.
    Category {
        Work => "WORK",
        Home => "HOME",
        Learning => "LEARNING",
    }
);

literal_enum!(
    /// Progress of a todo. The literals contain spaces on the wire.
    Status {
        ToDo => "TO DO",
        InProgress => "IN PROGRESS",
        Done => "DONE",
    }
);

/// A todo as returned by the API. Field order is the serialized order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub todo: String,
    pub priority: String,
    pub status: String,
    pub category: String,
    #[serde(rename = "dueDate")]
    pub due_date: String,
}

/// Body accepted by `POST /todos` and `PUT /todos/{id}`.
///
/// Every field is optional here: inserts check completeness afterwards and
/// updates apply only the highest-precedence field present.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub todo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, rename = "dueDate", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

/// A complete, checked todo ready for insertion. `due_date` is canonical
/// `yyyy-MM-dd`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTodo {
    pub id: i64,
    pub todo: String,
    pub priority: Priority,
    pub status: Status,
    pub category: Category,
    #[serde(rename = "dueDate")]
    pub due_date: String,
}

impl TryFrom<TodoPayload> for NewTodo {
    type Error = ValidationError;

    fn try_from(payload: TodoPayload) -> Result<Self, Self::Error> {
        let id = payload.id.ok_or(ValidationError::MissingField("id"))?;
        let todo = payload.todo.ok_or(ValidationError::MissingField("todo"))?;
        let priority = payload
            .priority
            .ok_or(ValidationError::MissingField("priority"))?;
        let status = payload.status.ok_or(ValidationError::MissingField("status"))?;
        let category = payload
            .category
            .ok_or(ValidationError::MissingField("category"))?;
        let due_date = payload
            .due_date
            .ok_or(ValidationError::MissingField("dueDate"))?;

        Ok(Self {
            id,
            todo,
            priority: Priority::parse(&priority).ok_or(ValidationError::Priority)?,
            status: Status::parse(&status).ok_or(ValidationError::Status)?,
            category: Category::parse(&category).ok_or(ValidationError::Category)?,
            due_date: normalize_date(&due_date).ok_or(ValidationError::DueDate)?,
        })
    }
}

/// Query string accepted by `GET /todos`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl TodoQuery {
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_q = Some(text.into());
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category.as_str().to_string());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority.as_str().to_string());
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status.as_str().to_string());
        self
    }
}
