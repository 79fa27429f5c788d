use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from the default path, falling back to defaults
    /// when no file exists. `IZELL_CONFIG` overrides the path.
    pub fn load() -> Result<Self> {
        let path = match std::env::var_os("IZELL_CONFIG") {
            Some(p) => PathBuf::from(p),
            None => Self::default_path()?,
        };
        Self::load_from(&path)
    }

    /// Load configuration from an explicit path. A missing file is not an
    /// error; it yields the defaults.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| Error::Config("cannot determine config directory".into()))?;
        Ok(base.join("izell").join("config.toml"))
    }

    /// Serialize the resolved configuration, used by `izell config`.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level filter used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Hero slideshow auto-advance interval in milliseconds
    #[serde(default = "default_slideshow_interval")]
    pub slideshow_interval_ms: u64,
    /// Simulated contact-form submission delay in milliseconds
    #[serde(default = "default_submit_delay")]
    pub submit_delay_ms: u64,
    /// Page transition configuration
    #[serde(default)]
    pub transition: TransitionConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            slideshow_interval_ms: default_slideshow_interval(),
            submit_delay_ms: default_submit_delay(),
            transition: TransitionConfig::default(),
        }
    }
}

/// Page slide animation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionConfig {
    /// Enable the page slide animation
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Slide duration in milliseconds
    #[serde(default = "default_transition_duration")]
    pub duration_ms: u64,
    /// Easing curve applied to the slide
    #[serde(default)]
    pub easing: EasingKind,
    /// Frame rate while a slide is active
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            duration_ms: default_transition_duration(),
            easing: EasingKind::default(),
            animation_fps: default_animation_fps(),
        }
    }
}

/// Easing curves for the slide animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EasingKind {
    /// Jump to the final position
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    #[serde(rename = "ease-out")]
    EaseOut,
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate() -> u64 {
    250
}

fn default_slideshow_interval() -> u64 {
    5000
}

fn default_submit_delay() -> u64 {
    2000
}

fn default_transition_duration() -> u64 {
    400
}

fn default_animation_fps() -> u32 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert_eq!(config.ui.slideshow_interval_ms, 5000);
        assert_eq!(config.ui.submit_delay_ms, 2000);
        assert!(config.ui.transition.enabled);
        assert_eq!(config.ui.transition.duration_ms, 400);
        assert_eq!(config.ui.transition.easing, EasingKind::Cubic);
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn parse_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            tick_rate_ms = 100

            [ui.transition]
            duration_ms = 250
            easing = "ease-out"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.transition.duration_ms, 250);
        assert_eq!(config.ui.transition.easing, EasingKind::EaseOut);
        // Untouched fields keep their defaults.
        assert_eq!(config.ui.slideshow_interval_ms, 5000);
        assert!(config.ui.transition.enabled);
    }

    #[test]
    fn parse_disabled_transition() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui.transition]
            enabled = false
            easing = "none"
            "#,
        )
        .unwrap();
        assert!(!config.ui.transition.enabled);
        assert_eq!(config.ui.transition.easing, EasingKind::None);
    }

    #[test]
    fn roundtrip_toml() {
        let config = AppConfig::default();
        let raw = config.to_toml().unwrap();
        let parsed: AppConfig = toml::from_str(&raw).unwrap();
        assert_eq!(parsed.ui.transition.duration_ms, config.ui.transition.duration_ms);
    }
}
