use serde::{Deserialize, Serialize};

const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// `[logging]` section. `level` is a tracing filter: a bare level such as
/// `debug`, or comma-separated `target=level` directives.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    pub fn has_valid_level(&self) -> bool {
        !self.level.trim().is_empty()
            && self.level.split(',').all(|directive| {
                let level = directive.rsplit('=').next().unwrap_or(directive);
                LEVELS.contains(&level.trim().to_ascii_lowercase().as_str())
            })
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
