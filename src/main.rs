#![allow(non_snake_case)]

mod app;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("kinetic")
    })
}

/// Kinetic Gallery - interactive showcase of the kinetic components
#[derive(Parser, Debug)]
#[command(name = "kinetic-gallery")]
#[command(about = "Kinetic Gallery - tilt, typewriter, counter and theme showcase")]
struct Args {
    /// Data directory for the persisted theme and kinetic.json
    #[arg(short, long)]
    data_dir: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if let Some(dir) = args.data_dir {
        let _ = DATA_DIR.set(dir);
    }

    tracing::info!("Starting gallery with data dir: {:?}", get_data_dir());

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Kinetic Gallery")
            .with_inner_size(dioxus::desktop::LogicalSize::new(960.0, 820.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
