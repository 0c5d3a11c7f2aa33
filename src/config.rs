use anyhow::{anyhow, Result};
use std::env;

/// Settings for the planner surface, loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Timezone id seeded as the second selection on startup.
    pub default_timezone: String,
    /// Display label for the seeded default selection.
    pub default_label: String,
    /// Initial base hour in `[0, 24)`, fractional part is minutes.
    pub base_hour: f64,
}

impl Config {
    /// Loads configuration from environment variables, applying defaults
    /// for anything unset or blank.
    pub fn from_env() -> Result<Self> {
        let default_timezone = env::var("PLANNER_DEFAULT_TIMEZONE")
            .unwrap_or_else(|_| "America/New_York".to_string());
        let default_timezone = if default_timezone.trim().is_empty() {
            "America/New_York".to_string()
        } else {
            default_timezone
        };

        let default_label = env::var("PLANNER_DEFAULT_LABEL")
            .unwrap_or_else(|_| "New York".to_string());

        let base_hour_str = env::var("PLANNER_BASE_HOUR")
            .unwrap_or_else(|_| "9".to_string());
        let base_hour: f64 = base_hour_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid PLANNER_BASE_HOUR"))?;

        if !(0.0..24.0).contains(&base_hour) {
            return Err(anyhow!("PLANNER_BASE_HOUR must be in [0, 24)"));
        }

        Ok(Config {
            default_timezone,
            default_label,
            base_hour,
        })
    }
}
