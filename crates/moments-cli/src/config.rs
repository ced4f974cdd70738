//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use moments_core::ClusterOptions;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Largest gap, in minutes, between photos of the same event.
    pub epsilon_minutes: f64,

    /// Smallest number of photos that makes an event.
    pub min_points: usize,

    /// Derive epsilon from each album's gap distribution instead of `epsilon_minutes`.
    pub auto_epsilon: bool,
}

impl Default for Config {
    fn default() -> Self {
        let options = ClusterOptions::default();
        Self {
            epsilon_minutes: options.epsilon_minutes,
            min_points: options.min_points,
            auto_epsilon: false,
        }
    }
}

impl Config {
    /// Loads configuration from the default location, then `config_path`,
    /// then the environment.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // MOMENTS_EPSILON_MINUTES, MOMENTS_MIN_POINTS, MOMENTS_AUTO_EPSILON
        figment = figment.merge(Env::prefixed("MOMENTS_"));

        figment.extract()
    }

    /// Applies command-line overrides. An explicit epsilon turns auto-epsilon
    /// off unless it was requested on the same command line.
    #[must_use]
    pub fn with_overrides(
        mut self,
        epsilon_minutes: Option<f64>,
        min_points: Option<usize>,
        auto_epsilon: bool,
    ) -> Self {
        if let Some(epsilon_minutes) = epsilon_minutes {
            self.epsilon_minutes = epsilon_minutes;
            self.auto_epsilon = false;
        }
        if let Some(min_points) = min_points {
            self.min_points = min_points;
        }
        if auto_epsilon {
            self.auto_epsilon = true;
        }
        self
    }

    pub const fn cluster_options(&self) -> ClusterOptions {
        ClusterOptions {
            epsilon_minutes: self.epsilon_minutes,
            min_points: self.min_points,
        }
    }
}

/// Returns the platform-specific config directory for moments.
///
/// On Linux: `~/.config/moments`
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("moments"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_core_defaults() {
        let config = Config::default();
        assert_eq!(config.cluster_options(), ClusterOptions::default());
        assert!(!config.auto_epsilon);
    }

    #[test]
    fn test_dirs_config_path_ends_with_moments() {
        let path = dirs_config_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "moments");
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "epsilon_minutes = 45.0\nmin_points = 5\n").unwrap();

        let config = Config::load_from(Some(&path)).unwrap();

        assert!((config.epsilon_minutes - 45.0).abs() < f64::EPSILON);
        assert_eq!(config.min_points, 5);
    }

    #[test]
    fn test_explicit_epsilon_disables_auto() {
        let config = Config {
            auto_epsilon: true,
            ..Config::default()
        }
        .with_overrides(Some(20.0), None, false);

        assert!(!config.auto_epsilon);
        assert_eq!(config.min_points, 3);
    }

    #[test]
    fn test_auto_flag_wins_over_config() {
        let config = Config::default().with_overrides(Some(20.0), Some(4), true);

        assert!(config.auto_epsilon);
        assert_eq!(config.cluster_options().min_points, 4);
    }
}
