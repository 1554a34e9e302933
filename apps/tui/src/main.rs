mod app;
mod event;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use color_eyre::Result;
use funding_leaderboard::loader::{load_dashboard, logo_presence};
use funding_leaderboard::logging::{self, LogTarget};
use funding_leaderboard::{CliArgs, Settings};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    let (settings, fallbacks) = Settings::from_env();

    let interactive = !args.headless && is_terminal();
    logging::init(
        &LogTarget::choose(interactive, args.log_file.clone()),
        settings.debug,
    )?;
    for error in &fallbacks {
        warn!(%error, "falling back to the default setting");
    }

    let dashboard = load_dashboard(&settings.data_path).await?;

    if !interactive {
        return event::run_headless(&dashboard, args.json);
    }

    let logos = logo_presence(dashboard.records(), &settings.logo_root).await;
    let mut app = App::new(dashboard, logos, &settings);

    let mut terminal = terminal::setup()?;
    let result = event::run(&mut terminal, &mut app);
    terminal::cleanup(true, true);

    info!("terminal restored");
    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
