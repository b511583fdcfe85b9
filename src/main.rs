mod app;
mod config;
mod input;
mod sprite;
mod themes;
mod tui;

use anyhow::Context;
use clap::Parser;
use sprite::{SpriteSheet, SKELETON_LAYOUT};
use std::path::PathBuf;

/// A skeleton that walks, idles and attacks in your terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Config file (defaults to <config dir>/spritewalk/spritewalk.json)
    #[arg(long)]
    config: Option<PathBuf>,
    /// PNG sprite sheet to use instead of the embedded one
    #[arg(long)]
    sheet: Option<PathBuf>,
    /// Start with the stage filling the whole terminal
    #[arg(long)]
    fullscreen: bool,
    #[arg(long, default_value = "spritewalk.log")]
    log_file: PathBuf,
    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // The terminal belongs to the TUI, so logs go to a file.
    let log_file = std::fs::File::create(&args.log_file)
        .with_context(|| format!("Could not create log file {}", args.log_file.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
    log::info!("spritewalk starting");

    let mut config = config::load_config(args.config.as_deref());
    if args.fullscreen {
        config.fullscreen = true;
    }
    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let sheet = match &args.sheet {
        Some(path) => {
            log::info!("Loading sprite sheet from {}", path.display());
            SpriteSheet::from_path(path, &SKELETON_LAYOUT)
        }
        None => SpriteSheet::embedded(&SKELETON_LAYOUT),
    }
    .context("Failed to load the sprite sheet")?;
    let (sheet_width, sheet_height) = sheet.dimensions();
    log::info!("Sprite sheet ready: {}x{}", sheet_width, sheet_height);

    tui::run_tui(config, sheet)
        .await
        .context("Terminal session failed")?;

    log::info!("spritewalk exited cleanly");
    Ok(())
}
