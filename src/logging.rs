//! Log output goes to a file: stdout belongs to the raw-mode screen.

use std::fs::File;
use std::io;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE: &str = "inquiry.log";

pub fn init() -> io::Result<()> {
    let file = File::create(LOG_FILE)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("inquiry=info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
