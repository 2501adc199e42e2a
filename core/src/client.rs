//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. Each route has a `build_*` method
//! producing an `HttpRequest` and a `parse_*` method consuming the matching
//! `HttpResponse`. Write routes answer with plain text, so their parse
//! methods return the confirmation message.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewTodo, Todo, TodoPayload, TodoQuery};

#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_todos(&self, query: &TodoQuery) -> Result<HttpRequest, ApiError> {
        let path = self.with_query("/todos", query)?;
        Ok(HttpRequest::without_body(HttpMethod::Get, path))
    }

    pub fn build_get_todo(&self, id: i64) -> HttpRequest {
        HttpRequest::without_body(HttpMethod::Get, format!("{}/todos/{id}", self.base_url))
    }

    pub fn build_agenda(&self, date: &str) -> Result<HttpRequest, ApiError> {
        let path = self.with_query("/agenda", &[("date", date)])?;
        Ok(HttpRequest::without_body(HttpMethod::Get, path))
    }

    pub fn build_create_todo(&self, input: &NewTodo) -> Result<HttpRequest, ApiError> {
        let body = to_json(input)?;
        Ok(HttpRequest::with_json(
            HttpMethod::Post,
            format!("{}/todos", self.base_url),
            body,
        ))
    }

    pub fn build_update_todo(&self, id: i64, input: &TodoPayload) -> Result<HttpRequest, ApiError> {
        let body = to_json(input)?;
        Ok(HttpRequest::with_json(
            HttpMethod::Put,
            format!("{}/todos/{id}", self.base_url),
            body,
        ))
    }

    pub fn build_delete_todo(&self, id: i64) -> HttpRequest {
        HttpRequest::without_body(HttpMethod::Delete, format!("{}/todos/{id}", self.base_url))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        parse_json(response)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response)
    }

    pub fn parse_agenda(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        parse_json(response)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<String, ApiError> {
        parse_text(response)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<String, ApiError> {
        parse_text(response)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<String, ApiError> {
        parse_text(response)
    }

    fn with_query<Q: Serialize + ?Sized>(&self, route: &str, query: &Q) -> Result<String, ApiError> {
        let encoded = serde_urlencoded::to_string(query)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        if encoded.is_empty() {
            Ok(format!("{}{route}", self.base_url))
        } else {
            Ok(format!("{}{route}?{encoded}", self.base_url))
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

fn parse_text(response: HttpResponse) -> Result<String, ApiError> {
    check_status(&response)?;
    Ok(response.body)
}

/// Every route answers 200 on success.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    match response.status {
        200 => Ok(()),
        400 => Err(ApiError::BadRequest(response.body.clone())),
        404 => Err(ApiError::NotFound),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Priority, Status};

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:3000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_todos_without_filters() {
        let req = client().build_list_todos(&TodoQuery::default()).unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/todos");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_list_todos_encodes_filters() {
        let query = TodoQuery::default()
            .with_status(Status::InProgress)
            .with_priority(Priority::High);
        let req = client().build_list_todos(&query).unwrap();
        assert_eq!(
            req.path,
            "http://localhost:3000/todos?priority=HIGH&status=IN+PROGRESS"
        );
    }

    #[test]
    fn build_agenda_carries_date() {
        let req = client().build_agenda("2024-3-5").unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/agenda?date=2024-3-5");
    }

    #[test]
    fn build_get_todo_uses_numeric_id() {
        let req = client().build_get_todo(42);
        assert_eq!(req.path, "http://localhost:3000/todos/42");
    }

    #[test]
    fn build_create_todo_sends_every_field() {
        let input = NewTodo {
            id: 1,
            todo: "Buy milk".to_string(),
            priority: Priority::Low,
            status: Status::ToDo,
            category: Category::Home,
            due_date: "2024-03-05".to_string(),
        };
        let req = client().build_create_todo(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.header("Content-Type"), Some("application/json"));
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["id"], 1);
        assert_eq!(body["status"], "TO DO");
        assert_eq!(body["dueDate"], "2024-03-05");
    }

    #[test]
    fn build_update_todo_omits_absent_fields() {
        let input = TodoPayload {
            status: Some("DONE".to_string()),
            ..TodoPayload::default()
        };
        let req = client().build_update_todo(7, &input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/todos/7");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "status": "DONE" }));
    }

    #[test]
    fn build_delete_todo_has_no_body() {
        let req = client().build_delete_todo(7);
        assert_eq!(req.method, HttpMethod::Delete);
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_todos_success() {
        let body = r#"[{"id":1,"todo":"Test","priority":"LOW","status":"DONE","category":"HOME","dueDate":"2024-03-05"}]"#;
        let todos = client().parse_list_todos(response(200, body)).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].due_date, "2024-03-05");
    }

    #[test]
    fn parse_get_todo_not_found() {
        let err = client().parse_get_todo(response(404, "Todo Not Found")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_create_todo_bad_request_keeps_message() {
        let err = client()
            .parse_create_todo(response(400, "Invalid Todo Priority"))
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(ref msg) if msg == "Invalid Todo Priority"));
    }

    #[test]
    fn parse_update_todo_returns_confirmation() {
        let msg = client()
            .parse_update_todo(response(200, "Status Updated"))
            .unwrap();
        assert_eq!(msg, "Status Updated");
    }

    #[test]
    fn parse_delete_todo_server_error() {
        let err = client()
            .parse_delete_todo(response(500, "Internal Server Error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_agenda_bad_json() {
        let err = client().parse_agenda(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:3000/");
        let req = client.build_delete_todo(1);
        assert_eq!(req.path, "http://localhost:3000/todos/1");
    }
}
