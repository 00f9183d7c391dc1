//! Server-side views rendered with Askama.
//!
//! Templates are presentation only; handlers pass fully resolved domain
//! data in and receive an HTML string back. Render failures indicate a
//! template bug and surface as internal errors.

use askama::Template;

use crate::domain::{DomainError, Todo};

/// Todo list page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    pub todos: &'a [Todo],
}

/// Pre-filled edit form for one todo.
#[derive(Template)]
#[template(path = "edit.html")]
pub struct EditPage<'a> {
    pub todo: &'a Todo,
}

/// Render a template, mapping failures to a domain-internal error.
pub fn render<T: Template>(template: &T) -> Result<String, DomainError> {
    template
        .render()
        .map_err(|error| DomainError::internal(format!("template rendering failed: {error}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OwnerToken, TodoId};

    fn todo(id: i32, task: &str, done: bool) -> Todo {
        Todo {
            id: TodoId::new(id),
            owner: OwnerToken::mint(),
            task: task.to_owned(),
            done,
        }
    }

    #[test]
    fn index_lists_tasks_with_action_links() {
        let todos = vec![todo(1, "buy milk", false), todo(2, "water plants", true)];
        let html = render(&IndexPage { todos: &todos }).expect("render index");

        assert!(html.contains("buy milk"));
        assert!(html.contains("/check/1"));
        assert!(html.contains("/edit/2"));
        assert!(html.contains("/delete/2"));
        // Completed tasks are struck through, pending ones are not.
        assert!(html.contains("<s>water plants</s>"));
        assert!(!html.contains("<s>buy milk</s>"));
    }

    #[test]
    fn index_escapes_task_markup() {
        let todos = vec![todo(1, "<script>alert(1)</script>", false)];
        let html = render(&IndexPage { todos: &todos }).expect("render index");
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn edit_form_prefills_task_text() {
        let item = todo(7, "buy milk", false);
        let html = render(&EditPage { todo: &item }).expect("render edit");
        assert!(html.contains(r#"action="/edit/7""#));
        assert!(html.contains(r#"value="buy milk""#));
    }
}
