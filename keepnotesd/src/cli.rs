use std::path::PathBuf;
use clap::Parser;

#[derive(Clone, Debug, Eq, Parser, PartialEq)]
#[command(version, author, about)]
pub struct CliConfig {
    /// Defaults to /etc/keepnotes/keepnotes.toml when that file exists
    #[arg(long)]
    pub config_file: Option<PathBuf>,

    #[arg(long)]
    pub port: Option<u16>,

    /// Write a fresh random token secret to the file and exit
    #[arg(long, value_name = "PATH")]
    pub write_token_secret: Option<PathBuf>,
}
