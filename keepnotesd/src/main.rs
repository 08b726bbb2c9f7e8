use std::path::Path;
use clap::{crate_name, Parser};
use figment::Figment;
use keepnotes::access_token::TokenSecret;
use keepnotes::bin_constants::DEFAULT_CONFIG_FILE;
use keepnotes::config::figment::FigmentExt;
use keepnotes::error_exit;
use keepnotes::logging::init_logging;
use keepnotesd::build_rocket;
use keepnotesd::cli::CliConfig;
use log::info;

fn main() {
    init_logging();

    let cli_config = CliConfig::parse();

    if let Some(ref path) = cli_config.write_token_secret {
        if let Err(e) = TokenSecret::generate().write_to_file(path) {
            error_exit!("failed to write token secret to {}: {e}", path.display())
        }
        info!("token secret written to {}", path.display());
        return;
    }

    info!("{} starting up", crate_name!());

    let config_file = match cli_config.config_file {
        Some(ref config_file) => {
            if !config_file.exists() {
                error_exit!(
                    "configuration file at {} does not exist",
                    config_file.display(),
                )
            }
            Some(config_file.as_path())
        },
        None => Some(Path::new(DEFAULT_CONFIG_FILE))
            .filter(|default| default.exists()),
    };
    let mut figment = Figment::from(rocket::Config::default())
        .setup_app_config(config_file);
    if let Some(port) = cli_config.port {
        figment = figment.merge(("port", port));
    }

    let result = rocket::execute(build_rocket(figment).launch());
    if let Err(e) = result {
        error_exit!("failed to launch rocket: {e}");
    }
}
