use crate::logger::{error::LoggerError, format::LoggerFormat, level::LoggerLevel};

/// Environment variable selecting `text` or `json` output.
pub const ENV_LOG_FORMAT: &str = "KATA_LOG_FORMAT";
/// Environment variable holding the filter directive.
pub const ENV_LOG_LEVEL: &str = "KATA_LOG_LEVEL";

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    pub level: LoggerLevel,
    pub with_targets: bool,
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        let use_color = !cfg!(test) && atty::is(atty::Stream::Stderr);
        Self {
            format: LoggerFormat::Text,
            level: LoggerLevel::default(),
            with_targets: true,
            use_color,
        }
    }
}

impl LoggerConfig {
    /// Defaults overridden by `KATA_LOG_FORMAT` / `KATA_LOG_LEVEL` when set.
    pub fn from_env() -> Result<Self, LoggerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, LoggerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            cfg.format = format.parse()?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            cfg.level = LoggerLevel::new(level)?;
        }
        Ok(cfg)
    }
}
