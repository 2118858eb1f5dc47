use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;

/// Where log lines go.
///
/// While the alternate screen is up anything written to stderr would
/// scribble over the UI, so the interactive mode logs to a file.
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

pub fn init_logging(target: LogTarget<'_>, debug: bool) -> Result<()> {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    installed.map_err(|e| eyre!("Failed to install logger: {e}"))
}
