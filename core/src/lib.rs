//! Domain core for the todo service.
//!
//! # Overview
//! Everything here is free of I/O: the enumerated field values and their
//! validators, date normalization, the precedence tables that turn a query
//! or an update body into exactly one storage operation, and a client that
//! builds and parses HTTP exchanges without touching the network.
//!
//! # Design
//! - The server and the client share these types, so the plain-text error
//!   bodies and the `dueDate` wire name are defined once.
//! - [`TodoFilter`] and [`TodoUpdate`] are chosen from ordered rule tables;
//!   the first matching rule wins and later fields are ignored.
//! - Values are carried as strings and bound as statement parameters by the
//!   store; columns are named only through [`Column`].

pub mod client;
pub mod error;
pub mod filter;
pub mod http;
pub mod types;
pub mod update;
pub mod validate;

pub use client::TodoClient;
pub use error::{ApiError, ValidationError};
pub use filter::{Column, Condition, TodoFilter};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Category, NewTodo, Priority, Status, Todo, TodoPayload, TodoQuery};
pub use update::TodoUpdate;
pub use validate::{normalize_date, validate_agenda_date, Validate};
