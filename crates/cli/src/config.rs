//! CLI configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Configuration shared by every subcommand.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// Seed for reproducible dice. `None` uses the thread-local generator.
    pub dice_seed: Option<u64>,
    pub log: LogConfig,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `AIDECAMP_DICE_SEED` - Seed for reproducible rolls (default: unseeded)
    /// - `AIDECAMP_LOG_DIR` - Also write logs to `<dir>/aidecamp.log` (default: off)
    /// - `AIDECAMP_LOG_ANSI` - Colored stderr logs (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.dice_seed = read_env(&lookup, "AIDECAMP_DICE_SEED");

        config.log.dir = lookup("AIDECAMP_LOG_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        if let Some(ansi) = read_env_bool(&lookup, "AIDECAMP_LOG_ANSI") {
            config.log.ansi = ansi;
        }

        config
    }
}

/// Logging output configuration.
#[derive(Clone, Debug)]
pub struct LogConfig {
    pub dir: Option<PathBuf>,
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: None,
            ansi: true,
        }
    }
}

fn read_env<T>(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

fn read_env_bool(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<bool> {
    match lookup(key)?.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
