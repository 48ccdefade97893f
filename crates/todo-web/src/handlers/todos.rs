//! Todo handlers: add, delete, toggle and complete-all.

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, Path};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Extension;
use todo_core::Flash;

use super::{fail_with, list_path, render};
use crate::params::{parse_index, CompletionForm, TodoForm};
use crate::views::View;
use crate::{Result, Session};

/// POST /lists/{index}/todos - Add a todo from `todo`.
///
/// A rejected name re-renders the list with the error and changes nothing.
pub async fn add(
    Extension(session): Extension<Session>,
    Path(index): Path<String>,
    form: std::result::Result<Form<TodoForm>, FormRejection>,
) -> Result<Response> {
    let index = parse_index("index", &index)?;
    let Form(form) = form?;
    let mut state = session.lock().await;
    let list_id = state.list_id_at(index)?;

    match state.add_todo(list_id, form.name()) {
        Ok(todo_id) => {
            tracing::info!(session = %session.id(), list_id = %list_id, todo_id = %todo_id, "Todo added");
            state.set_flash(Flash::success("The todo was added."));
            Ok(Redirect::to(&list_path(index)).into_response())
        }
        Err(todo_core::Error::Validation(err)) => {
            tracing::debug!(session = %session.id(), error = %err, "Todo name rejected");
            let flash = fail_with(&mut state, &err);
            let list = state.list(list_id)?;
            Ok(render(
                StatusCode::UNPROCESSABLE_ENTITY,
                flash,
                &View::List { index, list },
            ))
        }
        Err(err) => Err(err.into()),
    }
}

/// POST /lists/{index}/todos/{todo_index}/delete - Delete a todo.
///
/// Renders the list directly instead of redirecting.
pub async fn delete(
    Extension(session): Extension<Session>,
    Path((index, todo_index)): Path<(String, String)>,
) -> Result<Response> {
    let index = parse_index("index", &index)?;
    let todo_index = parse_index("todo_index", &todo_index)?;
    let mut state = session.lock().await;

    let list_id = state.list_id_at(index)?;
    let todo_id = state.todo_id_at(list_id, todo_index)?;
    state.delete_todo(list_id, todo_id)?;
    tracing::info!(session = %session.id(), list_id = %list_id, todo_id = %todo_id, "Todo deleted");

    state.set_flash(Flash::success("The todo was deleted."));
    let flash = state.take_flash();
    let list = state.list(list_id)?;
    Ok(render(StatusCode::OK, flash, &View::List { index, list }))
}

/// POST /lists/{index}/todos/{todo_index} - Set a todo's completion from `completed`.
pub async fn toggle(
    Extension(session): Extension<Session>,
    Path((index, todo_index)): Path<(String, String)>,
    form: std::result::Result<Form<CompletionForm>, FormRejection>,
) -> Result<Response> {
    let index = parse_index("index", &index)?;
    let todo_index = parse_index("todo_index", &todo_index)?;
    let Form(form) = form?;
    let completed = form.completed()?;
    let mut state = session.lock().await;

    let list_id = state.list_id_at(index)?;
    let todo_id = state.todo_id_at(list_id, todo_index)?;
    state.set_todo_completed(list_id, todo_id, completed)?;
    tracing::info!(
        session = %session.id(),
        list_id = %list_id,
        todo_id = %todo_id,
        completed,
        "Todo updated"
    );

    let message = if completed {
        "The todo was marked completed."
    } else {
        "The todo was marked uncompleted."
    };
    state.set_flash(Flash::success(message));
    Ok(Redirect::to(&list_path(index)).into_response())
}

/// POST /lists/{index}/complete_all - Mark every todo of a list completed.
pub async fn complete_all(
    Extension(session): Extension<Session>,
    Path(index): Path<String>,
) -> Result<Response> {
    let index = parse_index("index", &index)?;
    let mut state = session.lock().await;

    let list_id = state.list_id_at(index)?;
    state.complete_all(list_id)?;
    tracing::info!(session = %session.id(), list_id = %list_id, "All todos completed");

    state.set_flash(Flash::success("All todos marked complete."));
    Ok(Redirect::to(&list_path(index)).into_response())
}
