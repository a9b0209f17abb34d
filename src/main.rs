#![windows_subsystem = "windows"]

use anyhow::Result;
use fraudform::{config::Config, gui};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    // Environment endpoint; the GUI applies any saved override on top
    let config = Config::from_env();
    gui::launch(config)?;

    Ok(())
}
