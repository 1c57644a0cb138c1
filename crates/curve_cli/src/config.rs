//! curvefit configuration management.
//!
//! Settings come from built-in defaults, an optional TOML file, `CURVEFIT_*`
//! environment variables and command-line flags, in increasing precedence.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "curvefit.toml";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// curvefit configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Number of random points generated when no input file is given
    #[serde(default = "default_num_points")]
    pub num_points: usize,

    /// Points generated strictly inside each gap
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Interpolation method name; parsed when the run starts
    #[serde(default = "default_method")]
    pub method: String,

    /// Directory receiving the output point files
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Extension of the output point files, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Random coordinates are drawn from `[0, coordinate_range)`
    #[serde(default = "default_coordinate_range")]
    pub coordinate_range: u32,

    /// Seed for random input; entropy when unset
    #[serde(default)]
    pub seed: Option<u64>,

    /// Plotter command line; the two output paths are appended
    #[serde(default = "default_plot_command")]
    pub plot_command: String,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_num_points() -> usize {
    5
}

fn default_samples() -> usize {
    3
}

fn default_method() -> String {
    "spline".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("out")
}

fn default_extension() -> String {
    "dat".to_string()
}

fn default_coordinate_range() -> u32 {
    10
}

fn default_plot_command() -> String {
    "python plot_interpolation.py".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            num_points: default_num_points(),
            samples: default_samples(),
            method: default_method(),
            output_dir: default_output_dir(),
            extension: default_extension(),
            coordinate_range: default_coordinate_range(),
            seed: None,
            plot_command: default_plot_command(),
            log_level: default_log_level(),
        }
    }
}

/// Values given on the command line; `None` keeps the configured value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `-n, --num-points`
    pub num_points: Option<usize>,
    /// `-s, --samples`
    pub samples: Option<usize>,
    /// `-m, --method`
    pub method: Option<String>,
    /// `-o, --output-dir`
    pub output_dir: Option<PathBuf>,
    /// `--seed`
    pub seed: Option<u64>,
    /// `-v, --verbose` forces the debug level
    pub verbose: bool,
}

impl Overrides {
    /// Apply the flags that were given on top of `config`.
    pub fn apply(self, mut config: CliConfig) -> CliConfig {
        if let Some(num_points) = self.num_points {
            config.num_points = num_points;
        }
        if let Some(samples) = self.samples {
            config.samples = samples;
        }
        if let Some(method) = self.method {
            config.method = method;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.verbose {
            config.log_level = "debug".to_string();
        }
        config
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))
    }

    /// Load the given file, or [`DEFAULT_CONFIG_FILE`] if it exists, or defaults.
    ///
    /// A file named explicitly must exist; the default file is optional.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Apply `CURVEFIT_*` environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up by environment variable name.
    ///
    /// Values that fail to parse are ignored with a warning.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("CURVEFIT_NUM_POINTS") {
            self.num_points = parse_or_keep("CURVEFIT_NUM_POINTS", &value, self.num_points);
        }

        if let Some(value) = lookup("CURVEFIT_SAMPLES") {
            self.samples = parse_or_keep("CURVEFIT_SAMPLES", &value, self.samples);
        }

        if let Some(method) = lookup("CURVEFIT_METHOD") {
            self.method = method;
        }

        if let Some(output_dir) = lookup("CURVEFIT_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(output_dir);
        }

        if let Some(value) = lookup("CURVEFIT_SEED") {
            match value.parse() {
                Ok(seed) => self.seed = Some(seed),
                Err(_) => {
                    warn!(key = "CURVEFIT_SEED", value = %value, "Ignoring unparsable override")
                }
            }
        }

        if let Some(plot_command) = lookup("CURVEFIT_PLOT_COMMAND") {
            self.plot_command = plot_command;
        }

        if let Some(log_level) = lookup("CURVEFIT_LOG_LEVEL") {
            self.log_level = log_level;
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if self.extension.is_empty() {
            errors.push("extension cannot be empty".to_string());
        } else if self.extension.contains(['/', '\\', '.']) {
            errors.push(format!(
                "Invalid extension '{}'. Give the extension without dots or separators",
                self.extension
            ));
        }

        if self.coordinate_range == 0 {
            errors.push("coordinate_range must be greater than 0".to_string());
        }

        if self.output_dir.as_os_str().is_empty() {
            errors.push("output_dir cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load, apply environment and command-line overrides, then validate.
    pub fn resolve(path: Option<&Path>, overrides: Overrides) -> crate::Result<Self> {
        let config = overrides.apply(Self::load_or_default(path)?.with_env_override());
        config.validate()?;
        Ok(config)
    }

    /// Path of the file holding the input points.
    pub fn input_path(&self) -> PathBuf {
        self.output_dir.join(format!("input.{}", self.extension))
    }

    /// Path of the file holding inputs interleaved with generated points.
    pub fn interpolation_path(&self) -> PathBuf {
        self.output_dir.join(format!("interpolation.{}", self.extension))
    }
}

fn parse_or_keep(key: &str, value: &str, current: usize) -> usize {
    match value.trim().parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            warn!(key, value, "Ignoring unparsable override");
            current
        }
    }
}

/// Configuration error type
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// IO error reading config file
    Io(String),
    /// Parse error in config file
    Parse(String),
    /// Validation error
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {}", msg),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
            Self::Validation(errors) => write!(f, "Validation errors: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    // ========================================
    // Defaults and file loading
    // ========================================

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.num_points, 5);
        assert_eq!(config.samples, 3);
        assert_eq!(config.method, "spline");
        assert_eq!(config.input_path(), PathBuf::from("out/input.dat"));
        assert_eq!(config.interpolation_path(), PathBuf::from("out/interpolation.dat"));
    }

    #[test]
    fn test_default_config_validates() {
        assert!(CliConfig::default().validate().is_ok());
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curvefit.toml");
        std::fs::write(&path, "samples = 7\nmethod = \"linear\"\nseed = 42\n").unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.samples, 7);
        assert_eq!(config.method, "linear");
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.num_points, 5);
        assert_eq!(config.extension, "dat");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = CliConfig::load_or_default(Some(&dir.path().join("absent.toml")));
        match result {
            Err(ConfigError::Io(msg)) => assert!(msg.contains("absent.toml")),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_unknown_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "sample = 7\n").unwrap();

        match CliConfig::load(&path) {
            Err(ConfigError::Parse(msg)) => assert!(msg.contains("sample")),
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    // ========================================
    // Overrides and precedence
    // ========================================

    #[test]
    fn test_env_override() {
        let config = CliConfig::default().with_overrides_from(env(&[
            ("CURVEFIT_NUM_POINTS", "12"),
            ("CURVEFIT_METHOD", "linear"),
            ("CURVEFIT_SEED", "9"),
            ("CURVEFIT_OUTPUT_DIR", "results"),
        ]));
        assert_eq!(config.num_points, 12);
        assert_eq!(config.method, "linear");
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.output_dir, PathBuf::from("results"));
    }

    #[test]
    fn test_env_override_ignores_unparsable_values() {
        let config = CliConfig::default().with_overrides_from(env(&[
            ("CURVEFIT_SAMPLES", "many"),
            ("CURVEFIT_SEED", "-1"),
        ]));
        assert_eq!(config.samples, 3);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_flags_win_over_env() {
        let from_env =
            CliConfig::default().with_overrides_from(env(&[("CURVEFIT_SAMPLES", "8")]));
        let config = Overrides {
            samples: Some(2),
            verbose: true,
            ..Overrides::default()
        }
        .apply(from_env);

        assert_eq!(config.samples, 2);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.num_points, 5);
    }

    #[test]
    fn test_absent_flags_keep_config() {
        let mut base = CliConfig::default();
        base.seed = Some(3);
        let config = Overrides::default().apply(base.clone());
        assert_eq!(config, base);
    }

    // ========================================
    // Validation
    // ========================================

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = CliConfig::default();
        config.log_level = "loud".to_string();

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].contains("log_level"));
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_unknown_method_is_accepted() {
        let mut config = CliConfig::default();
        config.method = "cubic".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_multiple_errors() {
        let mut config = CliConfig::default();
        config.extension = String::new();
        config.coordinate_range = 0;

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors.iter().any(|e| e.contains("extension")));
                assert!(errors.iter().any(|e| e.contains("coordinate_range")));
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_extension_with_dot() {
        let mut config = CliConfig::default();
        config.extension = ".csv".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_resolve_reports_validation_as_cli_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curvefit.toml");
        std::fs::write(&path, "extension = \"\"\n").unwrap();

        let overrides = Overrides {
            samples: Some(4),
            ..Overrides::default()
        };
        match CliConfig::resolve(Some(&path), overrides) {
            Err(crate::CliError::Config(ConfigError::Validation(errors))) => {
                assert!(errors[0].contains("extension"));
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(err.to_string(), "Validation errors: a; b");
    }
}
