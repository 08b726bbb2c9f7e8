mod authentication_guard;
mod errors;
mod model;

use std::str::FromStr;
use keepnotes::note_store::{NewNote, Note, NoteId, NoteStore, NoteStoreError, NoteUpdate};
use keepnotes::username_string::UsernameString;
use keepnotes::util::StrExt;
use rocket::http::Status;
use rocket::response::status::Created;
use rocket::serde::json::Json;
use rocket::{catch, catchers, delete, get, post, put, routes, Build, Request, Rocket, State};
use time::OffsetDateTime;
use crate::access_granter::{AccessGranter, LoginResult};
use crate::http::header::WwwAuthenticate;
use crate::http::status::Unauthorized;
use crate::routes::api::authentication_guard::Authenticated;
use crate::routes::api::errors::{ApiError, UnauthorizedResponse};
use crate::routes::api::model::*;

type AccessGranterState = State<Box<dyn AccessGranter>>;
type NoteStoreState = State<Box<dyn NoteStore>>;

#[get("/health")]
fn health() -> Json<HealthResponse> {
    Json(
        HealthResponse {
            status: "ok",
            time: OffsetDateTime::now_utc(),
        }
    )
}

#[post("/auth/register", data = "<request>")]
async fn register(
    request: Json<CredentialsRequest>,
    access_granter: &AccessGranterState,
) -> Result<Created<Json<RegisterResponse>>, ApiError> {
    let CredentialsRequest { username, password } = request.into_inner();
    if username.is_blank() || password.is_empty() {
        return Err(ApiError::MissingCredentials)
    }
    let username = UsernameString::from_str(&username)?;
    let LoginResult { identity, access_token } = access_granter
        .register_user(&username, &password)
        .await?;
    Ok(
        Created::new("/auth/login").body(Json(
            RegisterResponse {
                message: "registered successfully",
                token: access_token,
                user: identity.into(),
            }
        ))
    )
}

#[post("/auth/login", data = "<request>")]
async fn login(
    request: Json<CredentialsRequest>,
    access_granter: &AccessGranterState,
) -> Result<Json<LoginResponse>, ApiError> {
    let CredentialsRequest { username, password } = request.into_inner();
    let LoginResult { identity, access_token } = access_granter
        .login_user(&username, &password)
        .await?;
    Ok(Json(
        LoginResponse {
            token: access_token,
            user: identity.into(),
        }
    ))
}

#[get("/notes")]
async fn list_notes(
    user: Authenticated,
    note_store: &NoteStoreState,
) -> Json<NoteListResponse> {
    Json(note_store.list(user.owner_id()).await.into())
}

#[post("/notes", data = "<input>")]
async fn create_note(
    user: Authenticated,
    input: Json<NewNote>,
    note_store: &NoteStoreState,
) -> Result<Created<Json<Note>>, ApiError> {
    let note = note_store
        .create(user.owner_id(), input.into_inner())
        .await?;
    Ok(Created::new(format!("/notes/{}", note.id)).body(Json(note)))
}

#[get("/notes/<id>")]
async fn get_note(
    user: Authenticated,
    id: &str,
    note_store: &NoteStoreState,
) -> Result<Json<Note>, ApiError> {
    let note = note_store
        .get(user.owner_id(), parse_note_id(id)?)
        .await?;
    Ok(Json(note))
}

#[put("/notes/<id>", data = "<update>")]
async fn update_note(
    user: Authenticated,
    id: &str,
    update: Json<NoteUpdate>,
    note_store: &NoteStoreState,
) -> Result<Json<Note>, ApiError> {
    let note = note_store
        .update(user.owner_id(), parse_note_id(id)?, update.into_inner())
        .await?;
    Ok(Json(note))
}

#[delete("/notes/<id>")]
async fn delete_note(
    user: Authenticated,
    id: &str,
    note_store: &NoteStoreState,
) -> Result<Json<MessageResponse>, ApiError> {
    note_store
        .delete(user.owner_id(), parse_note_id(id)?)
        .await?;
    Ok(Json(MessageResponse { message: "deleted" }))
}

// an id that can't be parsed can't belong to any note
fn parse_note_id(id: &str) -> Result<NoteId, ApiError> {
    NoteId::from_str(id).map_err(|_| NoteStoreError::NotFound.into())
}

#[catch(400)]
fn bad_request() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("invalid JSON"))
}

#[catch(401)]
fn unauthorized(request: &Request) -> UnauthorizedResponse {
    UnauthorizedResponse {
        body: Json(ErrorResponse::new("unauthorized")),
        www_authenticate: WwwAuthenticate(*request.local_cache(|| None::<Unauthorized>)),
    }
}

#[catch(422)]
fn unprocessable_entity() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("invalid JSON"))
}

#[catch(default)]
fn default_catcher(status: Status, _request: &Request) -> (Status, Json<ErrorResponse>) {
    let reason = status.reason_lossy().to_lowercase();
    (status, Json(ErrorResponse::new(reason)))
}

pub trait ApiRocketBuildExt {
    fn install_keepnotes_api(self) -> Self;
}

impl ApiRocketBuildExt for Rocket<Build> {
    fn install_keepnotes_api(self) -> Self {
        self
            .mount(
                "/",
                routes![
                    health,
                    register,
                    login,
                    list_notes,
                    create_note,
                    get_note,
                    update_note,
                    delete_note,
                ],
            )
            .register(
                "/",
                catchers![
                    bad_request,
                    unauthorized,
                    unprocessable_entity,
                    default_catcher,
                ],
            )
    }
}
