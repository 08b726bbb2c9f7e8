pub mod access_granter;
pub mod app_setup;
pub mod cli;
pub mod http;
mod routes;

use figment::Figment;
use rocket::{Build, Rocket};
use crate::app_setup::AppSetupFairing;

/// Builds the daemon on top of an already layered configuration.
pub fn build_rocket(figment: Figment) -> Rocket<Build> {
    rocket::custom(figment).attach(AppSetupFairing)
}
