use std::path::Path;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use crate::bin_constants::APP_CONFIG_ENV_PREFIX;
use crate::config::app_config::AppConfig;

pub trait FigmentExt {
    fn setup_app_config(
        self,
        config_file: Option<impl AsRef<Path>>,
    ) -> Figment;
}

impl FigmentExt for Figment {
    fn setup_app_config(
        self,
        config_file: Option<impl AsRef<Path>>,
    ) -> Figment {
        let figment = self.merge(Serialized::defaults(AppConfig::default()));
        let figment = match config_file {
            Some(config_file) => figment.merge(Toml::file_exact(config_file)),
            None => figment,
        };
        figment.merge(Env::prefixed(APP_CONFIG_ENV_PREFIX).global())
    }
}

#[cfg(test)]
mod tests {
    use figment::Jail;
    use super::*;

    #[test]
    fn defaults_without_file() {
        Jail::expect_with(|_| {
            let config: AppConfig = Figment::new()
                .setup_app_config(None::<&Path>)
                .extract()?;
            assert_eq!(config, AppConfig::default());
            Ok(())
        });
    }

    #[test]
    fn file_and_env_override_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "keepnotes.toml",
                r#"
                    access_token_ttl = 60
                    max_note_title_len = 10

                    [hasher_config]
                    argon2_t_cost = 3
                "#,
            )?;
            jail.set_env("KEEPNOTES_ACCESS_TOKEN_TTL", "120");
            let config: AppConfig = Figment::new()
                .setup_app_config(Some("keepnotes.toml"))
                .extract()?;
            assert_eq!(config.access_token_ttl, 120);
            assert_eq!(config.max_note_title_len, 10);
            assert_eq!(config.hasher_config.argon2_t_cost, 3);
            assert_eq!(
                config.hasher_config.argon2_m_cost,
                AppConfig::default().hasher_config.argon2_m_cost,
            );
            Ok(())
        });
    }
}
