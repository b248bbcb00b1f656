// Environment-driven configuration.
//
// All knobs come from env vars; a .env file is loaded at startup via
// dotenvy. Nothing here is secret and everything has a sensible default
// except the data path, which subcommands may also take as an argument.

use std::env;

use anyhow::Result;

/// Central configuration loaded from environment variables.
pub struct Config {
    /// Default CSV path used when a subcommand doesn't name one
    /// (ENGAUGE_DATA_PATH).
    pub data_path: Option<String>,
    /// Default ranking truncation for terminal reports (ENGAUGE_TOP_N,
    /// default 5).
    pub top_n: usize,
    /// Where the markdown report is written (ENGAUGE_REPORT_PATH).
    pub report_path: String,
}

impl Config {
    /// Load configuration from environment variables. Unset or
    /// unparseable optional vars fall back to their defaults.
    pub fn load() -> Self {
        let top_n = env::var("ENGAUGE_TOP_N")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(5);

        Self {
            data_path: env::var("ENGAUGE_DATA_PATH").ok(),
            top_n,
            report_path: env::var("ENGAUGE_REPORT_PATH")
                .unwrap_or_else(|_| "output/engauge-report.md".to_string()),
        }
    }

    /// Resolve the CSV path from an explicit argument or the environment.
    /// Call this before any operation that ingests data.
    pub fn resolve_data_path(&self, arg: Option<String>) -> Result<String> {
        match arg.or_else(|| self.data_path.clone()) {
            Some(path) => Ok(path),
            None => anyhow::bail!(
                "No input file given. Pass a CSV path or set ENGAUGE_DATA_PATH in your .env."
            ),
        }
    }
}
