//! Application configuration loaded from TOML.

use std::path::Path;
use std::time::Duration;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::flow::{AudioSettings, MAX_VOLUME};
use crate::geometry::ScreenSize;
use slidr_puzzle::ReplayTiming;

/// Largest grid the bundled breadth-first solver handles comfortably.
pub const MAX_SOLVABLE_SIZE: usize = 3;

/// Top-level configuration. Every section and field is optional in the file.
#[derive(Debug, Clone, PartialEq, Default, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SlidrConfig {
    /// Grid parameters.
    board: BoardSection,
    /// Solution replay pacing.
    replay: ReplaySection,
    /// Window and frame rate.
    screen: ScreenSection,
    /// Intro animation.
    logo: LogoSection,
    /// Initial audio preferences.
    audio: AudioSection,
}

/// `[board]`
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct BoardSection {
    /// Grid edge length.
    #[serde(default = "default_size")]
    size: usize,

    /// Seed for layout generation; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

/// `[replay]`
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct ReplaySection {
    /// Seconds between replayed slides.
    #[serde(default = "default_step_seconds")]
    step_seconds: f64,

    /// Extra seconds held after the last slide.
    #[serde(default = "default_grace_seconds")]
    grace_seconds: f64,
}

/// `[screen]`
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ScreenSection {
    /// Window width in pixels.
    #[serde(default = "default_extent")]
    width: u32,

    /// Window height in pixels.
    #[serde(default = "default_extent")]
    height: u32,

    /// Target frames per second.
    #[serde(default = "default_fps")]
    fps: u32,
}

/// `[logo]`
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct LogoSection {
    /// Seconds the intro animation runs.
    #[serde(default = "default_logo_seconds")]
    duration_seconds: f64,
}

/// `[audio]`
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AudioSection {
    /// Master volume in percent.
    #[serde(default = "default_volume")]
    volume: u8,

    /// Whether background music plays.
    #[serde(default = "default_music")]
    background_music: bool,
}

fn default_size() -> usize {
    3
}

fn default_step_seconds() -> f64 {
    0.8
}

fn default_grace_seconds() -> f64 {
    0.2
}

fn default_extent() -> u32 {
    1200
}

fn default_fps() -> u32 {
    60
}

fn default_logo_seconds() -> f64 {
    4.6
}

fn default_volume() -> u8 {
    crate::flow::DEFAULT_VOLUME
}

fn default_music() -> bool {
    true
}

impl Default for BoardSection {
    fn default() -> Self {
        Self {
            size: default_size(),
            seed: None,
        }
    }
}

impl Default for ReplaySection {
    fn default() -> Self {
        Self {
            step_seconds: default_step_seconds(),
            grace_seconds: default_grace_seconds(),
        }
    }
}

impl Default for ScreenSection {
    fn default() -> Self {
        Self {
            width: default_extent(),
            height: default_extent(),
            fps: default_fps(),
        }
    }
}

impl Default for LogoSection {
    fn default() -> Self {
        Self {
            duration_seconds: default_logo_seconds(),
        }
    }
}

impl Default for AudioSection {
    fn default() -> Self {
        Self {
            volume: default_volume(),
            background_music: default_music(),
        }
    }
}

impl SlidrConfig {
    /// Loads and validates configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(size = config.board.size, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content), fields(len = content.len()))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to render config: {}", e)))
    }

    /// Checks every value is in range.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.board.size;
        if !(slidr_puzzle::MIN_SIZE..=MAX_SOLVABLE_SIZE).contains(&size) {
            return Err(ConfigError::new(format!(
                "board.size must be between {} and {}, got {}",
                slidr_puzzle::MIN_SIZE,
                MAX_SOLVABLE_SIZE,
                size
            )));
        }
        if !positive(self.replay.step_seconds) {
            return Err(ConfigError::new(format!(
                "replay.step_seconds must be positive, got {}",
                self.replay.step_seconds
            )));
        }
        if !non_negative(self.replay.grace_seconds) {
            return Err(ConfigError::new(format!(
                "replay.grace_seconds must not be negative, got {}",
                self.replay.grace_seconds
            )));
        }
        if !non_negative(self.logo.duration_seconds) {
            return Err(ConfigError::new(format!(
                "logo.duration_seconds must not be negative, got {}",
                self.logo.duration_seconds
            )));
        }
        if self.screen.width == 0 || self.screen.height == 0 || self.screen.fps == 0 {
            return Err(ConfigError::new(
                "screen.width, screen.height and screen.fps must be non-zero".to_string(),
            ));
        }
        if self.audio.volume > MAX_VOLUME {
            return Err(ConfigError::new(format!(
                "audio.volume must be at most {}, got {}",
                MAX_VOLUME, self.audio.volume
            )));
        }
        Ok(())
    }

    /// Replay pacing.
    pub fn replay_timing(&self) -> ReplayTiming {
        let defaults = ReplayTiming::default();
        ReplayTiming::new(
            seconds(self.replay.step_seconds).unwrap_or(defaults.step_interval),
            seconds(self.replay.grace_seconds).unwrap_or(defaults.grace),
        )
    }

    /// Wall time of one frame at the configured rate.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.screen.fps.max(1)))
    }

    /// Intro animation length.
    pub fn logo_duration(&self) -> Duration {
        seconds(self.logo.duration_seconds).unwrap_or_default()
    }

    /// Window dimensions.
    pub fn screen_size(&self) -> ScreenSize {
        ScreenSize::new(self.screen.width, self.screen.height)
    }

    /// Initial audio preferences.
    pub fn audio_settings(&self) -> AudioSettings {
        AudioSettings::new(self.audio.volume, self.audio.background_music)
    }

    /// Returns a copy with the layout seed replaced.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.board.seed = seed;
        }
        self
    }
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Whole microseconds, so decimal settings like `0.8` land exactly.
fn seconds(value: f64) -> Option<Duration> {
    non_negative(value).then(|| Duration::from_micros((value * 1_000_000.0).round() as u64))
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = SlidrConfig::from_toml_str("").expect("defaults are valid");
        assert_eq!(config, SlidrConfig::default());
        assert_eq!(config.replay_timing(), ReplayTiming::default());
        assert_eq!(config.logo_duration(), Duration::from_millis(4600));
        assert_eq!(*config.board().size(), 3);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = SlidrConfig::from_toml_str("[screen]\nfps = 30\n").expect("valid");
        assert_eq!(*config.screen().fps(), 30);
        assert_eq!(*config.screen().width(), 1200);
        assert_eq!(config.frame_duration(), Duration::from_nanos(33_333_333));
    }

    #[test]
    fn test_rejects_large_board() {
        let err = SlidrConfig::from_toml_str("[board]\nsize = 4\n").unwrap_err();
        assert!(err.message.contains("board.size"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_rejects_zero_step() {
        let err = SlidrConfig::from_toml_str("[replay]\nstep_seconds = 0.0\n").unwrap_err();
        assert!(err.message.contains("step_seconds"));
    }

    #[test]
    fn test_rejects_loud_volume() {
        assert!(SlidrConfig::from_toml_str("[audio]\nvolume = 101\n").is_err());
    }

    #[test]
    fn test_rendered_toml_parses_back() {
        let config = SlidrConfig::default().with_seed(Some(9));
        let text = config.to_toml_string().expect("renders");
        assert_eq!(SlidrConfig::from_toml_str(&text).expect("parses"), config);
    }
}
