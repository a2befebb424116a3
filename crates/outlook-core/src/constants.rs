//! Constants shared by the scoring, aggregation, and rendering layers.

/// Persisted verdict for a positive classification.
pub const VERDICT_HIGH: &str = "High Chance of Success";

/// Persisted verdict for a negative classification.
pub const VERDICT_LOW: &str = "Low Chance of Success";

/// Rule-based fallback: label 1 iff the mean of the four metrics is at least this.
pub const FALLBACK_PASS_MEAN: f64 = 50.0;

/// History color band: scores at or below this are `red`.
pub const BAND_LOW_MAX: f64 = 40.0;

/// History color band: scores above `BAND_LOW_MAX` and at or below this are `brown`.
pub const BAND_MID_MAX: f64 = 70.0;

/// Fixed value axis for single-record and history charts.
pub const CHART_AXIS_MIN: f64 = 0.0;
pub const CHART_AXIS_MAX: f64 = 100.0;

/// Accepted metric range when range enforcement is enabled.
pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

/// Decimal places kept for the history average.
pub const AVERAGE_DECIMALS: i32 = 2;

/// Feature order expected by the classifier and written into artifacts.
pub const FEATURE_NAMES: [&str; 4] = ["attendance", "internal", "assignment", "final"];

/// Artifact format understood by this build.
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// Default artifact location, relative to the working directory.
pub const DEFAULT_ARTIFACT_PATH: &str = "model.json";

/// Default SQLite database location.
pub const DEFAULT_DB_PATH: &str = "outlook.db";

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "outlook.toml";

/// Environment variable overriding the log filter.
pub const LOG_ENV_VAR: &str = "OUTLOOK_LOG";
