//! SQLite access for the `todo` table.
//!
//! # Design
//! A single connection is shared by every request, matching one handle to
//! one database file. Values are always bound; the only identifiers spliced
//! into statements come from [`Column`].

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite};
use todo_core::{Column, Condition, NewTodo, Todo, TodoFilter, TodoUpdate};

use crate::shape::TodoRow;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS todo (
        id INTEGER PRIMARY KEY,
        todo TEXT NOT NULL,
        priority TEXT NOT NULL,
        status TEXT NOT NULL,
        category TEXT NOT NULL,
        due_date TEXT NOT NULL
    )";

const SELECT_TODOS: &str = "SELECT id, todo, priority, status, category, due_date FROM todo";

const SELECT_BY_ID: &str =
    "SELECT id, todo, priority, status, category, due_date FROM todo WHERE id = ?";

const SELECT_BY_DUE_DATE: &str = "SELECT id, todo, priority, status, category, due_date \
     FROM todo WHERE due_date = ? ORDER BY id";

#[derive(Debug, Clone)]
pub struct TodoStore {
    pool: SqlitePool,
}

impl TodoStore {
    /// Opens `url`, creating the database file when it does not exist.
    /// `sqlite::memory:` gives a private database living as long as the store.
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    /// Creates the `todo` table if it is missing. Existing tables are left as is.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    pub async fn list(&self, filter: &TodoFilter) -> Result<Vec<Todo>, sqlx::Error> {
        let mut builder = QueryBuilder::<Sqlite>::new(SELECT_TODOS);
        for (index, condition) in filter.conditions().into_iter().enumerate() {
            builder.push(if index == 0 { " WHERE " } else { " AND " });
            match condition {
                Condition::Equals(column, value) => {
                    builder.push(column.as_str()).push(" = ").push_bind(value);
                }
                Condition::Contains(column, value) => {
                    builder
                        .push(column.as_str())
                        .push(" LIKE '%' || ")
                        .push_bind(value)
                        .push(" || '%'");
                }
            }
        }
        builder.push(" ORDER BY id");

        let rows = builder
            .build_query_as::<TodoRow>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Todo::from).collect())
    }

    pub async fn find(&self, id: i64) -> Result<Option<Todo>, sqlx::Error> {
        let row = sqlx::query_as::<_, TodoRow>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Todo::from))
    }

    /// `due_date` must already be canonical; matching is exact.
    pub async fn by_due_date(&self, due_date: &str) -> Result<Vec<Todo>, sqlx::Error> {
        let rows = sqlx::query_as::<_, TodoRow>(SELECT_BY_DUE_DATE)
            .bind(due_date)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Todo::from).collect())
    }

    pub async fn insert(&self, todo: &NewTodo) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO todo (id, todo, priority, status, category, due_date) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(todo.id)
        .bind(&todo.todo)
        .bind(todo.priority.as_str())
        .bind(todo.status.as_str())
        .bind(todo.category.as_str())
        .bind(&todo.due_date)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Writes one column of one row. Returns whether the row existed.
    pub async fn update(&self, id: i64, update: &TodoUpdate) -> Result<bool, sqlx::Error> {
        let mut builder = QueryBuilder::<Sqlite>::new("UPDATE todo SET ");
        builder
            .push(update.column().as_str())
            .push(" = ")
            .push_bind(update.value())
            .push(" WHERE ")
            .push(Column::Id.as_str())
            .push(" = ")
            .push_bind(id);

        let result = builder.build().execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Returns the number of rows removed; zero is not an error.
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todo WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
