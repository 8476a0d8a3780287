use anyhow::Context;

pub const ENV_SHORT_DELAY_MS: &str = "KATA_SHORT_DELAY_MS";
pub const ENV_LONG_DELAY_MS: &str = "KATA_LONG_DELAY_MS";
pub const ENV_INTERRUPT_AFTER_MS: &str = "KATA_INTERRUPT_AFTER_MS";

/// Durations driving the delay part of the demo, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Sleep that runs to completion.
    pub short_delay_ms: i64,
    /// Sleep that gets interrupted.
    pub long_delay_ms: i64,
    /// When the long sleep is interrupted.
    pub interrupt_after_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            short_delay_ms: 50,
            long_delay_ms: 5_000,
            interrupt_after_ms: 10,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(v) = lookup(ENV_SHORT_DELAY_MS) {
            cfg.short_delay_ms = v
                .trim()
                .parse()
                .with_context(|| format!("{ENV_SHORT_DELAY_MS}={v}"))?;
        }
        if let Some(v) = lookup(ENV_LONG_DELAY_MS) {
            cfg.long_delay_ms = v
                .trim()
                .parse()
                .with_context(|| format!("{ENV_LONG_DELAY_MS}={v}"))?;
        }
        if let Some(v) = lookup(ENV_INTERRUPT_AFTER_MS) {
            cfg.interrupt_after_ms = v
                .trim()
                .parse()
                .with_context(|| format!("{ENV_INTERRUPT_AFTER_MS}={v}"))?;
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let cfg = DemoConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg, DemoConfig::default());
    }

    #[test]
    fn overrides_from_env() {
        let cfg = DemoConfig::from_lookup(|key| match key {
            ENV_LONG_DELAY_MS => Some(" 250 ".to_string()),
            ENV_INTERRUPT_AFTER_MS => Some("5".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(cfg.short_delay_ms, 50);
        assert_eq!(cfg.long_delay_ms, 250);
        assert_eq!(cfg.interrupt_after_ms, 5);
    }

    #[test]
    fn rejects_non_numeric() {
        let err = DemoConfig::from_lookup(|key| {
            (key == ENV_SHORT_DELAY_MS).then(|| "soon".to_string())
        })
        .unwrap_err();
        assert!(err.to_string().contains(ENV_SHORT_DELAY_MS));
    }
}
