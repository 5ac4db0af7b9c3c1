//! Entry point for the portfolio site.
//!
//! Parses arguments, installs logging and the site configuration, then
//! launches the Dioxus desktop window.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use folio_core::SiteConfig;
use folio_logging::{FolioSubscriberBuilder, LogConfig};

use folio_site::components::App;
use folio_site::settings;

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "folio-site")]
#[command(about = "Portfolio site for Richie Kosasih")]
struct Args {
    /// Path to a JSON site configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override where the theme preference is stored
    #[arg(long)]
    prefs: Option<PathBuf>,

    /// Verbose pretty console logging
    #[arg(long)]
    dev: bool,

    /// Also write JSONL logs to this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("loading site config from {}", path.display()))?,
        None => SiteConfig::default(),
    };
    if let Some(prefs) = args.prefs {
        config.preferences_path = Some(prefs);
    }

    let mut log_config = if args.dev {
        LogConfig::development()
    } else {
        LogConfig::site(config.log_level.as_str())
    };
    if let Some(dir) = args.log_dir {
        log_config = log_config.with_log_dir(dir);
    }
    let _guard = FolioSubscriberBuilder::new()
        .with_config(log_config)
        .try_init()
        .context("installing the log subscriber")?;

    tracing::info!(
        prefs = %config.resolved_preferences_path().display(),
        "Starting portfolio site"
    );

    let title = config.window_title.clone();
    settings::install(config);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(title)
                        .with_inner_size(LogicalSize::new(1280, 860))
                        .with_resizable(true),
                )
                .with_custom_head(format!(
                    r#"
                    <link rel="preconnect" href="https://fonts.googleapis.com">
                    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@300;400;600;700&family=Poppins:wght@600;700;800&display=swap" rel="stylesheet">
                    <style>{}</style>
                    "#,
                    STYLES_CSS
                )),
        )
        .launch(App);

    tracing::info!("Portfolio site closed");
    Ok(())
}
