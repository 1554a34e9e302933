use color_eyre::Result;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

/// Where log lines go. The dashboard owns the terminal while it runs, so
/// interactive sessions log to a file or nowhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Discard,
}

impl LogTarget {
    pub fn choose(interactive: bool, log_file: Option<PathBuf>) -> Self {
        match (log_file, interactive) {
            (Some(path), _) => Self::File(path),
            (None, true) => Self::Discard,
            (None, false) => Self::Stderr,
        }
    }
}

fn default_directive(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

/// Installs the global subscriber. `RUST_LOG` wins over `--debug`.
pub fn init(target: &LogTarget, debug: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));
    let builder = fmt::Subscriber::builder().with_env_filter(filter);

    match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = File::create(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Discard => builder.with_writer(std::io::sink).try_init(),
    }
    .map_err(|error| color_eyre::eyre::eyre!("Failed to initialise logging: {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interactive_sessions_never_log_to_stderr() {
        assert_eq!(LogTarget::choose(true, None), LogTarget::Discard);
        assert_eq!(LogTarget::choose(false, None), LogTarget::Stderr);
        assert_eq!(
            LogTarget::choose(true, Some(PathBuf::from("run.log"))),
            LogTarget::File(PathBuf::from("run.log"))
        );
    }

    #[test]
    fn debug_raises_default_level() {
        assert_eq!(default_directive(true), "debug");
        assert_eq!(default_directive(false), "info");
    }
}
