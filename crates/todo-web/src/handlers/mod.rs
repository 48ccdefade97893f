//! Request handlers.
//!
//! Each handler locks the request's [`Session`](crate::Session) for its
//! whole read-modify-write, resolves positional path indices to stable IDs,
//! and either redirects after a successful mutation or renders a page.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/` | [`index`] |
//! | GET | `/lists` | [`lists::overview`] |
//! | GET | `/lists/new` | [`lists::new_form`] |
//! | POST | `/lists` | [`lists::create`] |
//! | GET | `/lists/{index}` | [`lists::show`] |
//! | GET | `/lists/{index}/edit` | [`lists::edit_form`] |
//! | POST | `/lists/{index}` | [`lists::update`] |
//! | POST | `/lists/{index}/delete` | [`lists::delete`] |
//! | POST | `/lists/{index}/todos` | [`todos::add`] |
//! | POST | `/lists/{index}/todos/{todo_index}` | [`todos::toggle`] |
//! | POST | `/lists/{index}/todos/{todo_index}/delete` | [`todos::delete`] |
//! | POST | `/lists/{index}/complete_all` | [`todos::complete_all`] |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use todo_core::{Flash, SessionState};

use crate::views::{self, View};

pub mod lists;
pub mod todos;

/// GET / - Send visitors to the list overview.
#[allow(clippy::unused_async)]
pub async fn index() -> Redirect {
    Redirect::to("/lists")
}

/// Fallback for unknown paths.
#[allow(clippy::unused_async)]
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        views::error_page(StatusCode::NOT_FOUND, "There is nothing at this address."),
    )
        .into_response()
}

/// Location of a list's detail page.
pub(crate) fn list_path(index: usize) -> String {
    format!("/lists/{index}")
}

/// Render a view, consuming the session's pending flash message.
pub(crate) fn render(status: StatusCode, flash: Option<Flash>, view: &View<'_>) -> Response {
    tracing::trace!(view = view.name(), status = status.as_u16(), "Rendering view");
    (status, views::render(view, flash.as_ref())).into_response()
}

/// Record a validation failure as the error flash and hand it back for rendering.
pub(crate) fn fail_with(state: &mut SessionState, err: &todo_core::ValidationError) -> Option<Flash> {
    state.set_flash(Flash::error(err.to_string()));
    state.take_flash()
}
