//! Demo configuration structures and loaders.
use std::env;
use std::str::FromStr;

/// Time deltas ticked when nothing else is configured.
pub const DEFAULT_TICKS: [f32; 2] = [0.1, 0.3];

/// Delta separating the two parallel branches of the demo tree.
pub const DEFAULT_THRESHOLD: f32 = 0.2;

/// Configuration for a demo run.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoConfig {
    /// Time deltas, one tick per entry.
    pub ticks: Vec<f32>,
    /// Branch threshold compared against the delta by the demo conditions.
    pub threshold: f32,
    /// Suppress the per-action stdout lines.
    pub quiet: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            ticks: DEFAULT_TICKS.to_vec(),
            threshold: DEFAULT_THRESHOLD,
            quiet: false,
        }
    }
}

impl DemoConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `FBT_TICKS` - Comma separated time deltas (default: `0.1,0.3`)
    /// - `FBT_THRESHOLD` - Branch threshold (default: 0.2)
    /// - `FBT_QUIET` - Suppress action output (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = env::var("FBT_TICKS") {
            match parse_ticks(&raw) {
                Some(ticks) if !ticks.is_empty() => config.ticks = ticks,
                _ => tracing::warn!(value = %raw, "ignoring malformed FBT_TICKS"),
            }
        }

        if let Some(threshold) = read_env::<f32>("FBT_THRESHOLD") {
            config.threshold = threshold;
        }

        if let Some(quiet) = read_env::<bool>("FBT_QUIET") {
            config.quiet = quiet;
        }

        config
    }
}

/// Parses a comma separated list of deltas. Returns `None` if any entry is
/// not a number.
pub fn parse_ticks(raw: &str) -> Option<Vec<f32>> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| entry.parse().ok())
        .collect()
}

fn read_env<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|value| value.trim().parse().ok())
}
