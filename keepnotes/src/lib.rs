pub mod config;
pub mod clock;
pub mod rng;
pub mod util;
mod lib_constants;
pub mod bin_constants;
pub mod hasher;
pub mod username_string;
pub mod logging;
pub mod credential_store;
pub mod access_token;
pub mod note_store;
