use clap::Parser;
use color_eyre::Result;
use klik_menu::app::App;
use klik_menu::cli::CliArgs;
use klik_menu::config::init_app_config;
use klik_menu::logging::{init_logging, LogTarget};
use klik_menu::{event, terminal};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    args.apply_env_overrides();

    // Setup error handling
    color_eyre::install()?;

    let config = init_app_config();
    let mut app = App::new(config.source.clone());

    // Check if we're running in a terminal
    if args.headless || !is_terminal() {
        init_logging(LogTarget::Stderr, config.debug)?;
        return event::run_headless(&mut app, args.json).await;
    }

    init_logging(LogTarget::File(&config.log_file), config.debug)?;
    info!("Starting klik-menu with source {}", config.source);

    // Setup terminal
    let mut terminal = terminal::setup()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app).await;

    // Restore terminal
    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
