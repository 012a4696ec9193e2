use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub reveal: RevealConfig,
    pub theme: ThemeConfig,
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub redraw_tick_ms: u64,
    pub carousel_interval_ms: u64,
    pub scroll_step_rows: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            redraw_tick_ms: 33,
            carousel_interval_ms: 3500,
            scroll_step_rows: 3,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct RevealConfig {
    /// Share of a section that must be visible before it reveals.
    pub threshold: f32,
    /// Percentage of the viewport height trimmed off its bottom edge
    /// before intersection is evaluated.
    pub bottom_margin_pct: u16,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.15,
            bottom_margin_pct: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub default: String,
    pub transition_phase_ms: u64,
    pub reduced_motion: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default: "light".to_string(),
            transition_phase_ms: 400,
            reduced_motion: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeymapConfig {
    pub preset: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            preset: "default".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        let Some(path) = default_config_path() else {
            return Ok(Self::default());
        };
        Self::load_from_path(path)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        if !path.is_file() {
            return Err(AppError::invalid_argument(format!(
                "config path is not a regular file: {}",
                path.display()
            )));
        }

        let raw = fs::read_to_string(path).map_err(|source| {
            AppError::io_with_context(source, format!("failed to read config: {}", path.display()))
        })?;
        let parsed = toml::from_str::<Self>(&raw).map_err(|source| {
            AppError::invalid_argument(format!(
                "failed to parse config {}: {source}",
                path.display()
            ))
        })?;
        Ok(parsed.sanitized())
    }

    fn sanitized(mut self) -> Self {
        self.ui.redraw_tick_ms = self.ui.redraw_tick_ms.max(1);
        self.ui.carousel_interval_ms = self.ui.carousel_interval_ms.max(100);
        self.ui.scroll_step_rows = self.ui.scroll_step_rows.max(1);
        if !self.reveal.threshold.is_finite()
            || self.reveal.threshold <= 0.0
            || self.reveal.threshold > 1.0
        {
            self.reveal.threshold = RevealConfig::default().threshold;
        }
        if self.reveal.bottom_margin_pct > 50 {
            self.reveal.bottom_margin_pct = RevealConfig::default().bottom_margin_pct;
        }
        self.theme.transition_phase_ms = self.theme.transition_phase_ms.max(1);
        self
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os("FOLIO_CONFIG_PATH")
        && !explicit.is_empty()
    {
        return Some(PathBuf::from(explicit));
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Some(PathBuf::from(xdg).join("folio").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME")
        && !home.is_empty()
    {
        return Some(
            PathBuf::from(home)
                .join(".config")
                .join("folio")
                .join("config.toml"),
        );
    }
    if let Some(appdata) = std::env::var_os("APPDATA")
        && !appdata.is_empty()
    {
        return Some(PathBuf::from(appdata).join("folio").join("config.toml"));
    }
    None
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::process;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::Config;

    fn unique_temp_path(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("folio_config_{suffix}_{}_{}", process::id(), nanos));
        path
    }

    #[test]
    fn load_from_path_returns_defaults_for_missing_file() {
        let missing = unique_temp_path("missing.toml");
        let config = Config::load_from_path(&missing).expect("missing config should fallback");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_from_path_applies_partial_overrides_and_sanitizes() {
        let path = unique_temp_path("custom.toml");
        fs::write(
            &path,
            r#"
            [ui]
            redraw_tick_ms = 0
            carousel_interval_ms = 10
            scroll_step_rows = 0

            [reveal]
            threshold = 1.5
            bottom_margin_pct = 90

            [theme]
            default = "dark"
            transition_phase_ms = 0
            "#,
        )
        .expect("config file should be written");

        let config = Config::load_from_path(&path).expect("config should parse");
        assert_eq!(config.ui.redraw_tick_ms, 1);
        assert_eq!(config.ui.carousel_interval_ms, 100);
        assert_eq!(config.ui.scroll_step_rows, 1);
        assert_eq!(config.reveal.threshold, 0.15);
        assert_eq!(config.reveal.bottom_margin_pct, 10);
        assert_eq!(config.theme.default, "dark");
        assert_eq!(config.theme.transition_phase_ms, 1);
        assert_eq!(config.keymap.preset, "default");

        fs::remove_file(&path).expect("config file should be removed");
    }
}
