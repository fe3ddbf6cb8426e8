use std::env;

use clap::Parser;
use common::{
    env::check_assets,
    theme::{self, Format},
    utils::logging,
};
use dotenvy::dotenv;
use tracing::info;

/// Print the resolved white-label branding profile.
#[derive(Parser, Debug)]
#[command(name = "branding")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Rendering to print on stdout
    #[arg(value_enum, default_value_t = Format::Json)]
    format: Format,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenv().ok();
    logging::init_logging_from_env();

    let cfg = configs::load_or_default(&configs::config_path())?;
    let profile = configs::install(cfg.branding_profile())?;
    info!(app_name = %profile.app_name, format = ?cli.format, "rendering branding");

    let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());
    check_assets(&static_dir, profile).await;

    print!("{}", theme::render(cli.format, profile)?);
    Ok(())
}
