pub mod auth;
pub mod config;
pub mod history;
pub mod pr;
pub mod session;
pub mod stats;
pub mod workout;

use std::io::{BufRead, Write};
use std::rc::Rc;

use wodlog_core::{AppContext, AppParts, Config, Haptics};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Terminal bell as haptic feedback.
struct BellHaptics;

impl Haptics for BellHaptics {
    fn pulse(&self) {
        let mut stderr = std::io::stderr();
        let _ = stderr.write_all(b"\x07");
        let _ = stderr.flush();
    }
}

/// Load the configuration and bring up the application context.
pub fn open_context() -> Result<AppContext, Box<dyn std::error::Error>> {
    let config = Config::load()?;
    tracing::debug!(database = %config.storage.database_file, "opening application context");
    let parts = AppParts {
        haptics: Rc::new(BellHaptics),
        ..AppParts::from_config(&config)?
    };
    Ok(AppContext::init(config, parts))
}

pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Ask a yes/no question on stderr and read the answer from stdin.
pub fn confirm(question: &str) -> Result<bool, std::io::Error> {
    eprint!("{question} [y/N] ");
    std::io::stderr().flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

pub fn format_local(at: &chrono::DateTime<chrono::Utc>) -> String {
    at.with_timezone(&chrono::Local)
        .format("%d %b %Y %H:%M")
        .to_string()
}
