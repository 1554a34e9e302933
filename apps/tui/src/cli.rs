use clap::{CommandFactory, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "funding_leaderboard", version, about = "Funding Growth Leaderboard TUI")]
pub struct CliArgs {
    /// Path to the leaderboard data.json
    #[arg(long, value_name = "PATH")]
    pub data: Option<String>,

    /// Directory that holds the logos/ folder
    #[arg(long = "logo-root", value_name = "PATH")]
    pub logo_root: Option<String>,

    /// Print the leaderboard report and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless report as JSON
    #[arg(long)]
    pub json: bool,

    /// Rank search results by fuzzy score instead of substring match
    #[arg(long)]
    pub fuzzy: bool,

    /// Seconds for one full pass of the ticker
    #[arg(long = "ticker-seconds", value_name = "N")]
    pub ticker_seconds: Option<u64>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Write logs to a file instead of stderr
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(data) = &self.data {
            std::env::set_var("DATA_PATH", data);
        }
        if let Some(root) = &self.logo_root {
            std::env::set_var("LOGO_ROOT", root);
        }
        if let Some(seconds) = self.ticker_seconds {
            std::env::set_var("TICKER_SECONDS", seconds.to_string());
        }
        if self.fuzzy {
            std::env::set_var("FUZZY_SEARCH", "1");
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}
