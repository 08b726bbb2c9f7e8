use async_trait::async_trait;
use keepnotes::access_token::{ProductionAccessTokenService, TokenSecret};
use keepnotes::config::app_config::AppConfig;
use keepnotes::credential_store::ProductionCredentialStore;
use keepnotes::hasher::{ProductionHasher, ProductionHasherConfig};
use keepnotes::note_store::{NoteStore, ProductionNoteStore};
use log::{error, info, warn};
use rocket::fairing::{Fairing, Info};
use rocket::{Build, Rocket};
use crate::access_granter::{AccessGranter, ProductionAccessGranter};
use crate::routes::ApiRocketBuildExt;

pub struct AppSetupFairing;

macro_rules! ok_or_bail {
    ($rocket:ident, $expr:expr, |$e:ident| $error_logger:expr) => ({
        match $expr {
            std::result::Result::Ok(ok) => ok,
            std::result::Result::Err(e) => {
                let $e = e;
                $error_logger;
                return std::result::Result::Err($rocket);
            },
        }
    });
}

#[async_trait]
impl Fairing for AppSetupFairing {
    fn info(&self) -> Info {
        use rocket::fairing::Kind;
        Info {
            name: "app setup",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(
        &self,
        rocket: Rocket<Build>,
    ) -> rocket::fairing::Result {
        let config: AppConfig = ok_or_bail!(
            rocket,
            rocket.figment().extract(),
            |e| {
                for e in e {
                    error!("{e}");
                }
                info!("finishing due to a config parse error");
            }
        );

        let token_ttl = ok_or_bail!(
            rocket,
            config.token_ttl(),
            |e| error!("invalid configuration: {e}")
        );

        let hasher_config = ok_or_bail!(
            rocket,
            ProductionHasherConfig::try_from(config.hasher_config.clone()),
            |e| error!("invalid hasher configuration: {e}")
        );
        let credential_store = ProductionCredentialStore::new(
            ProductionHasher::new(hasher_config)
        );

        let token_secret = match config.token_secret_file {
            Some(ref path) => ok_or_bail!(
                rocket,
                TokenSecret::read_from_file(path),
                |e| error!("failed reading the token secret from {}: {e}", path.display())
            ),
            None => {
                warn!("no token_secret_file configured, issued tokens will not survive a restart");
                TokenSecret::generate()
            },
        };
        let access_token_service = ok_or_bail!(
            rocket,
            ProductionAccessTokenService::new(&token_secret),
            |e| error!("could not initialize access token service: {e}")
        );

        let access_granter: Box<dyn AccessGranter> = Box::new(
            ProductionAccessGranter::new(
                credential_store,
                access_token_service,
                token_ttl,
            )
        );
        let note_store: Box<dyn NoteStore> = Box::new(
            ProductionNoteStore::new(config.note_limits())
        );

        Ok(
            rocket
                .manage(access_granter)
                .manage(note_store)
                .manage(config)
                .install_keepnotes_api()
        )
    }
}
