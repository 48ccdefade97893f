//! List handlers: overview, create, show, rename and delete.

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, Path};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Extension;
use todo_core::Flash;

use super::{fail_with, list_path, render};
use crate::params::{parse_index, EditListForm, NewListForm};
use crate::views::View;
use crate::{Result, Session};

/// GET /lists - Overview of every list in the session.
pub async fn overview(Extension(session): Extension<Session>) -> Response {
    let mut state = session.lock().await;
    let flash = state.take_flash();
    render(StatusCode::OK, flash, &View::Lists {
        lists: state.lists(),
    })
}

/// GET /lists/new - Form for creating a list.
pub async fn new_form(Extension(session): Extension<Session>) -> Response {
    let mut state = session.lock().await;
    let flash = state.take_flash();
    render(StatusCode::OK, flash, &View::NewList { name: "" })
}

/// POST /lists - Create a list from `list_name`.
///
/// On success redirects to `/lists`; a rejected name re-renders the form
/// with the error and changes nothing.
pub async fn create(
    Extension(session): Extension<Session>,
    form: std::result::Result<Form<NewListForm>, FormRejection>,
) -> Result<Response> {
    let Form(form) = form?;
    let name = form.name();
    let mut state = session.lock().await;

    match state.create_list(name) {
        Ok(list_id) => {
            tracing::info!(session = %session.id(), list_id = %list_id, "List created");
            state.set_flash(Flash::success("The list has been created."));
            Ok(Redirect::to("/lists").into_response())
        }
        Err(todo_core::Error::Validation(err)) => {
            tracing::debug!(session = %session.id(), error = %err, "List name rejected");
            let flash = fail_with(&mut state, &err);
            Ok(render(
                StatusCode::UNPROCESSABLE_ENTITY,
                flash,
                &View::NewList { name },
            ))
        }
        Err(err) => Err(err.into()),
    }
}

/// GET /lists/{index} - One list with its todos.
pub async fn show(
    Extension(session): Extension<Session>,
    Path(index): Path<String>,
) -> Result<Response> {
    let index = parse_index("index", &index)?;
    let mut state = session.lock().await;

    let list_id = state.list_id_at(index)?;
    let flash = state.take_flash();
    let list = state.list(list_id)?;
    Ok(render(StatusCode::OK, flash, &View::List { index, list }))
}

/// GET /lists/{index}/edit - Form for renaming or deleting a list.
pub async fn edit_form(
    Extension(session): Extension<Session>,
    Path(index): Path<String>,
) -> Result<Response> {
    let index = parse_index("index", &index)?;
    let mut state = session.lock().await;

    let list_id = state.list_id_at(index)?;
    let flash = state.take_flash();
    let list = state.list(list_id)?;
    Ok(render(
        StatusCode::OK,
        flash,
        &View::EditList {
            index,
            list,
            name: &list.name,
        },
    ))
}

/// POST /lists/{index} - Rename a list to `new_list_name`.
///
/// Keeping the list's current name is accepted.
pub async fn update(
    Extension(session): Extension<Session>,
    Path(index): Path<String>,
    form: std::result::Result<Form<EditListForm>, FormRejection>,
) -> Result<Response> {
    let index = parse_index("index", &index)?;
    let Form(form) = form?;
    let name = form.name();
    let mut state = session.lock().await;
    let list_id = state.list_id_at(index)?;

    match state.rename_list(list_id, name) {
        Ok(()) => {
            tracing::info!(session = %session.id(), list_id = %list_id, index, "List renamed");
            state.set_flash(Flash::success("The list has been updated."));
            Ok(Redirect::to(&list_path(index)).into_response())
        }
        Err(todo_core::Error::Validation(err)) => {
            tracing::debug!(session = %session.id(), error = %err, "List rename rejected");
            let flash = fail_with(&mut state, &err);
            let list = state.list(list_id)?;
            Ok(render(
                StatusCode::UNPROCESSABLE_ENTITY,
                flash,
                &View::EditList { index, list, name },
            ))
        }
        Err(err) => Err(err.into()),
    }
}

/// POST /lists/{index}/delete - Delete a list.
///
/// Every later list moves down one position.
pub async fn delete(
    Extension(session): Extension<Session>,
    Path(index): Path<String>,
) -> Result<Response> {
    let index = parse_index("index", &index)?;
    let mut state = session.lock().await;

    let list_id = state.list_id_at(index)?;
    let removed = state.delete_list(list_id)?;
    tracing::info!(
        session = %session.id(),
        list_id = %list_id,
        index,
        todos = removed.todos_count(),
        "List deleted"
    );
    state.set_flash(Flash::success("The list has been deleted."));
    Ok(Redirect::to("/lists").into_response())
}
