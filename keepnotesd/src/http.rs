pub mod header {
    use rocket::http::Header;
    use crate::http::status::Unauthorized;

    pub struct WwwAuthenticate(pub Option<Unauthorized>);

    impl From<WwwAuthenticate> for Header<'static> {
        fn from(value: WwwAuthenticate) -> Self {
            Header::new(
                "WWW-Authenticate",
                match value.0 {
                    Some(error) => format!(
                        "Bearer realm=\"keepnotes\", error=\"{}\"",
                        error.to_error_type(),
                    ),
                    None => "Bearer realm=\"keepnotes\"".to_owned(),
                },
            )
        }
    }
}

pub mod status {
    /// Bearer token error codes.
    ///
    /// A request without credentials carries no error code at all.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub enum Unauthorized {
        InvalidRequest,
        InvalidToken,
    }

    impl Unauthorized {
        pub fn to_error_type(&self) -> &'static str {
            match self {
                Unauthorized::InvalidRequest => "invalid_request",
                Unauthorized::InvalidToken => "invalid_token",
            }
        }
    }
}
