//! Notepad CRUD, scoped to the logged-in user.
//!
//! A notepad owned by someone else is indistinguishable from a missing one.

use axum::extract::{Path, State};
use axum::response::Response;
use axum::Form;
use serde::Deserialize;
use tracing::{debug, info};

use notepad_core::{
    CreateNotepadRequest, Error, FieldErrors, NotepadInput, NotepadRepository,
    UpdateNotepadRequest,
};

use crate::error::ApiError;
use crate::handlers::redirect_found;
use crate::session::CurrentUser;
use crate::views::{self, NotepadFormKind};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct NotepadForm {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

/// An id that does not parse names no notepad.
fn parse_notepad_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::NotFound(format!("Notepad not found: {raw}")))
}

impl From<NotepadForm> for NotepadInput {
    fn from(form: NotepadForm) -> Self {
        NotepadInput {
            title: form.title,
            body: form.body,
        }
    }
}

/// `GET /notepad`
pub async fn list_notepads(
    current: CurrentUser,
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    let notepads = state.db.notepads.list(current.id()).await?;
    Ok(views::render(views::notepad_list(
        &current.user.email,
        &notepads,
    )))
}

/// `GET /notepad/create`
pub async fn create_form(current: CurrentUser) -> Response {
    views::render(views::notepad_form(
        &current.user.email,
        NotepadFormKind::Create,
        "",
        "",
        &FieldErrors::default(),
    ))
}

/// `POST /notepad/create`
///
/// Invalid input re-renders the form with 200 and stores nothing.
pub async fn create_notepad(
    current: CurrentUser,
    State(state): State<AppState>,
    Form(form): Form<NotepadForm>,
) -> Result<Response, ApiError> {
    let input = NotepadInput::from(form);
    let valid = match input.validate() {
        Ok(valid) => valid,
        Err(errors) => {
            debug!(
                subsystem = "api",
                component = "notepad",
                op = "create",
                user_id = current.id(),
                "Create rejected by validation"
            );
            return Ok(views::render(views::notepad_form(
                &current.user.email,
                NotepadFormKind::Create,
                input.title.as_deref().unwrap_or(""),
                input.body.as_deref().unwrap_or(""),
                &errors,
            )));
        }
    };

    let id = state
        .db
        .notepads
        .insert(CreateNotepadRequest {
            user_id: current.id(),
            title: valid.title,
            body: valid.body,
        })
        .await?;
    info!(
        subsystem = "api",
        component = "notepad",
        op = "create",
        user_id = current.id(),
        notepad_id = id,
        "Notepad created"
    );
    Ok(redirect_found("/notepad"))
}

/// `GET /notepad/edit/:id`
pub async fn edit_form(
    current: CurrentUser,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_notepad_id(&raw_id)?;
    let notepad = state.db.notepads.fetch(id, current.id()).await?;
    Ok(views::render(views::notepad_form(
        &current.user.email,
        NotepadFormKind::Edit(notepad.id),
        &notepad.title,
        &notepad.body,
        &FieldErrors::default(),
    )))
}

/// `POST /notepad/edit/:id`
///
/// Unknown ids are 404. Otherwise always redirects; invalid input leaves the
/// notepad untouched.
pub async fn edit_notepad(
    current: CurrentUser,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Form(form): Form<NotepadForm>,
) -> Result<Response, ApiError> {
    let id = parse_notepad_id(&raw_id)?;
    if !state.db.notepads.exists(id, current.id()).await? {
        return Err(Error::NotepadNotFound(id).into());
    }

    match NotepadInput::from(form).validate() {
        Ok(valid) => {
            state
                .db
                .notepads
                .update(
                    id,
                    current.id(),
                    UpdateNotepadRequest {
                        title: valid.title,
                        body: valid.body,
                    },
                )
                .await?;
            info!(
                subsystem = "api",
                component = "notepad",
                op = "update",
                user_id = current.id(),
                notepad_id = id,
                "Notepad updated"
            );
        }
        Err(_) => {
            debug!(
                subsystem = "api",
                component = "notepad",
                op = "update",
                user_id = current.id(),
                notepad_id = id,
                "Invalid edit ignored"
            );
        }
    }
    Ok(redirect_found("/notepad"))
}

/// `POST /notepad/delete/:id`
pub async fn delete_notepad(
    current: CurrentUser,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_notepad_id(&raw_id)?;
    state.db.notepads.delete(id, current.id()).await?;
    info!(
        subsystem = "api",
        component = "notepad",
        op = "delete",
        user_id = current.id(),
        notepad_id = id,
        "Notepad deleted"
    );
    Ok(redirect_found("/notepad"))
}
