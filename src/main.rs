//! Lead Agent - terminal front-end for AI-assisted lead generation
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use tracing::{info, warn};

use leadagent_app::config::{self, Backend, Settings};
use leadagent_app::ConfiguredServices;

/// Lead Agent - analyze a product, pick leads, send an outreach sequence
#[derive(Parser, Debug)]
#[command(name = "leadagent")]
#[command(about = "Terminal front-end for AI-assisted B2B lead generation", long_about = None)]
struct Args {
    /// Path to config.toml (default: <config dir>/lead-agent/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override service.base_url from the config file
    #[arg(long, value_name = "URL")]
    service_url: Option<String>,

    /// Use the built-in stub for every service (no network)
    #[arg(long)]
    stub: bool,

    /// Write the default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Err(e) = leadagent_core::logging::init() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let config_path = match args.config.clone().or_else(config::default_config_path) {
        Some(path) => path,
        None if args.init_config => {
            return Err(eyre!("No config directory on this platform; pass --config"))
        }
        None => PathBuf::from("config.toml"),
    };

    if args.init_config {
        if config::init_config_file(&config_path)? {
            println!("Created {}", config_path.display());
        } else {
            println!("Config already exists at {}", config_path.display());
        }
        return Ok(());
    }

    let settings = resolve_settings(&args, &config_path)?;
    let services = ConfiguredServices::from_settings(&settings)?;

    leadagent_tui::run(settings, services).await?;
    Ok(())
}

/// An explicit `--config` must load cleanly; the default location falls
/// back to built-in settings.
fn resolve_settings(args: &Args, config_path: &std::path::Path) -> Result<Settings> {
    let mut settings = if args.config.is_some() {
        config::load_settings_strict(config_path)?
    } else {
        config::load_settings(config_path)
    };

    if let Some(url) = &args.service_url {
        info!("Overriding service.base_url with {}", url);
        settings.service.base_url = url.clone();
        config::validate(&settings)?;
    }

    if args.stub {
        warn!("--stub: every service runs against the built-in stub");
        settings.analysis.backend = Backend::Stub;
        settings.leads.backend = Backend::Stub;
        settings.send.backend = Backend::Stub;
    }

    Ok(settings)
}
