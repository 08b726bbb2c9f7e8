pub mod app_config;
pub mod hasher_config;
pub mod figment;
