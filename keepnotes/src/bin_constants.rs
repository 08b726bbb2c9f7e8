pub const DEFAULT_CONFIG_FILE: &str = "/etc/keepnotes/keepnotes.toml";
pub const APP_CONFIG_ENV_PREFIX: &str = "KEEPNOTES_";
