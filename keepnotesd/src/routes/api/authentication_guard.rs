use async_trait::async_trait;
use keepnotes::access_token::Claims;
use log::{debug, error};
use rocket::Request;
use rocket::http::Status;
use rocket::http::hyper::header;
use rocket::request::{FromRequest, Outcome};
use uuid::Uuid;
use crate::access_granter::{AccessGranter, AccessGranterError};
use crate::http::status::Unauthorized;

/// A request carrying a valid bearer token.
///
/// On failure the request is answered by the 401 catcher, which reads the
/// reason from the request-local cache.
#[derive(Debug)]
pub struct Authenticated(pub Claims);

impl Authenticated {
    pub fn owner_id(&self) -> Uuid {
        self.0.owner_id
    }
}

#[async_trait]
impl<'r> FromRequest<'r> for Authenticated {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let Some(auth_header) = request.headers().get_one(header::AUTHORIZATION.as_str()) else {
            debug!("no authorization header for {}", request.uri());
            return Outcome::Error((Status::Unauthorized, ()));
        };
        let Some(access_granter) = request.rocket().state::<Box<dyn AccessGranter>>() else {
            error!("access granter is not set up");
            return Outcome::Error((Status::InternalServerError, ()));
        };
        match access_granter.check_user_access(auth_header).await {
            Ok(claims) => Outcome::Success(Authenticated(claims)),
            Err(e) => {
                let reason = match e {
                    AccessGranterError::HeaderFormatError => Unauthorized::InvalidRequest,
                    _ => Unauthorized::InvalidToken,
                };
                request.local_cache(|| Some(reason));
                Outcome::Error((Status::Unauthorized, ()))
            },
        }
    }
}
