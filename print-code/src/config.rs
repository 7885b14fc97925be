//! Runtime configuration loaded from environment variables

use chrono_tz::Tz;

use crate::error::{PrintCodeError, PrintCodeResult};

/// Accepted paper widths (columns)
pub const MIN_PAPER_WIDTH: usize = 16;
pub const MAX_PAPER_WIDTH: usize = 96;

const DEFAULT_TIMEZONE: &str = "Europe/Madrid";

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_dir: Option<String>,
    /// 58mm = 32, 80mm = 48
    pub paper_width: usize,
    pub timezone: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            paper_width: std::env::var("PAPER_WIDTH")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(48),
            timezone: std::env::var("PRINT_TIMEZONE")
                .unwrap_or_else(|_| DEFAULT_TIMEZONE.into()),
        }
    }

    pub fn validate(&self) -> PrintCodeResult<()> {
        if !(MIN_PAPER_WIDTH..=MAX_PAPER_WIDTH).contains(&self.paper_width) {
            return Err(PrintCodeError::InvalidConfig(format!(
                "PAPER_WIDTH must be within {MIN_PAPER_WIDTH}..={MAX_PAPER_WIDTH}, got {}",
                self.paper_width
            )));
        }
        self.tz()?;
        Ok(())
    }

    /// Parsed ticket timezone
    pub fn tz(&self) -> PrintCodeResult<Tz> {
        self.timezone.parse().map_err(|_| {
            PrintCodeError::InvalidConfig(format!("unknown PRINT_TIMEZONE: {}", self.timezone))
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            log_dir: None,
            paper_width: 48,
            timezone: DEFAULT_TIMEZONE.into(),
        }
    }
}
