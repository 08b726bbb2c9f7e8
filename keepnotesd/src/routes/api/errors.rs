use keepnotes::note_store::NoteStoreError;
use keepnotes::username_string::UsernameParseError;
use log::error;
use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::{Request, Response};
use thiserror::Error;
use crate::access_granter::AccessGranterError;
use crate::http::header::WwwAuthenticate;
use crate::routes::api::model::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("username and password required")]
    MissingCredentials,

    #[error(transparent)]
    InvalidUsername(#[from] UsernameParseError),

    #[error(transparent)]
    AccessGranter(#[from] AccessGranterError),

    #[error(transparent)]
    NoteStore(#[from] NoteStoreError),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::MissingCredentials
            | ApiError::InvalidUsername(_) => Status::BadRequest,

            ApiError::AccessGranter(e) => match e {
                AccessGranterError::HeaderFormatError
                | AccessGranterError::InvalidToken(_)
                | AccessGranterError::InvalidCredentials => Status::Unauthorized,
                AccessGranterError::UsernameTaken => Status::Conflict,
                AccessGranterError::CredentialStoreError(_)
                | AccessGranterError::AccessTokenIssueError(_) => Status::InternalServerError,
            },

            ApiError::NoteStore(e) => match e {
                NoteStoreError::NotFound => Status::NotFound,
                NoteStoreError::Forbidden => Status::Forbidden,
                NoteStoreError::EmptyTitle => Status::BadRequest,
                NoteStoreError::TooBig => Status::PayloadTooLarge,
            },
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        let message = if status == Status::InternalServerError {
            error!("{} {} failed: {self}", request.method(), request.uri());
            "internal error".to_owned()
        } else {
            self.to_string()
        };
        Response::build_from(Json(ErrorResponse::new(message)).respond_to(request)?)
            .status(status)
            .ok()
    }
}

#[derive(rocket::Responder)]
#[response(status = 401)]
pub struct UnauthorizedResponse {
    pub body: Json<ErrorResponse>,
    pub www_authenticate: WwwAuthenticate,
}
