use clap::Parser;
use crate::config::enums::cluster_mode::ClusterMode;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create config.toml file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Run as master or worker, overriding the configured mode.
    #[arg(long, value_enum)]
    pub mode: Option<ClusterMode>,
    #[arg(long, default_value = "config.toml")]
    pub config: String,
}
