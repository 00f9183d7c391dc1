//! Todo HTTP handlers.
//!
//! ```text
//! GET  /            list page
//! POST /add         create from form field "todo", redirect to /
//! GET  /edit/{id}   pre-filled edit form
//! POST /edit/{id}   overwrite task text, redirect to /
//! GET  /check/{id}  toggle done, redirect to /
//! GET  /delete/{id} remove, redirect to /
//! ```
//!
//! Every handler resolves the caller identity, performs exactly one
//! repository operation, and propagates the identity-cookie side effect on
//! the response it builds. Id-scoped operations surface `NotFound` as 404
//! regardless of whether the row is missing or owned by someone else.

use actix_web::http::{header, StatusCode};
use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;

use crate::domain::{TaskText, TodoId};
use crate::inbound::http::identity::Identity;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{self, EditPage, IndexPage};
use crate::inbound::http::ApiResult;

/// Form payload shared by the add and edit endpoints.
#[derive(Debug, Deserialize)]
pub struct TodoForm {
    pub todo: String,
}

fn html_page(identity: &Identity, body: String) -> HttpResponse {
    let mut builder = HttpResponse::Ok();
    builder.content_type(header::ContentType::html());
    if let Some(cookie) = identity.issue_cookie() {
        builder.cookie(cookie);
    }
    builder.body(body)
}

fn redirect_to_index(identity: &Identity, status: StatusCode) -> HttpResponse {
    let mut builder = HttpResponse::build(status);
    builder.insert_header((header::LOCATION, "/"));
    if let Some(cookie) = identity.issue_cookie() {
        builder.cookie(cookie);
    }
    builder.finish()
}

/// Render the caller's todo list.
#[get("/")]
pub async fn index(identity: Identity, state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let todos = state.todos.list(identity.token()).await?;
    let body = views::render(&IndexPage { todos: &todos })?;
    Ok(html_page(&identity, body))
}

/// Create a todo from the submitted form.
///
/// Blank text (empty after trimming) is a silent no-op; the client is
/// redirected to the list either way.
#[post("/add")]
pub async fn add(
    identity: Identity,
    state: web::Data<HttpState>,
    form: web::Form<TodoForm>,
) -> ApiResult<HttpResponse> {
    if let Some(task) = TaskText::new(&form.todo) {
        state.todos.create(identity.token(), &task).await?;
    }
    Ok(redirect_to_index(&identity, StatusCode::SEE_OTHER))
}

/// Render the edit form pre-filled with the current task text.
#[get("/edit/{id}")]
pub async fn edit_form(
    identity: Identity,
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = TodoId::new(path.into_inner());
    let todo = state.todos.find(identity.token(), id).await?;
    let body = views::render(&EditPage { todo: &todo })?;
    Ok(html_page(&identity, body))
}

/// Overwrite the task text.
///
/// The submitted text is stored verbatim, without the trimming applied on
/// creation.
#[post("/edit/{id}")]
pub async fn edit_submit(
    identity: Identity,
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    form: web::Form<TodoForm>,
) -> ApiResult<HttpResponse> {
    let id = TodoId::new(path.into_inner());
    state
        .todos
        .update_task(identity.token(), id, &form.todo)
        .await?;
    Ok(redirect_to_index(&identity, StatusCode::SEE_OTHER))
}

/// Toggle the done flag.
#[get("/check/{id}")]
pub async fn check(
    identity: Identity,
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = TodoId::new(path.into_inner());
    state.todos.toggle_done(identity.token(), id).await?;
    Ok(redirect_to_index(&identity, StatusCode::FOUND))
}

/// Delete the todo permanently.
#[get("/delete/{id}")]
pub async fn delete(
    identity: Identity,
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = TodoId::new(path.into_inner());
    state.todos.delete(identity.token(), id).await?;
    Ok(redirect_to_index(&identity, StatusCode::FOUND))
}
