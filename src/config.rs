use crate::icons::IconSet;
use crate::keymap::Keymap;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI theme: "dark", "light" or "nocolor"
    pub theme: String,
    /// Icon set: "auto", "nerd", "unicode" or "ascii"
    pub icons: String,
    /// Keyboard bindings (preset + overrides)
    pub keymap: Keymap,
    /// How long the splash screen stays up before moving on by itself
    pub splash_delay_ms: u64,
    /// Number shown on the Profile tab of the navigation bar
    pub notification_badge: u32,
    /// Pixi assistant behaviour
    pub assistant: AssistantConfig,
}

/// Order in which pending assistant replies are appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyOrder {
    /// Whichever reply timer fires first lands first.
    #[default]
    Fire,
    /// Replies land in the order their messages were sent.
    Request,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Lower bound of the simulated thinking delay (inclusive)
    pub min_delay_ms: u64,
    /// Upper bound of the simulated thinking delay (exclusive)
    pub max_delay_ms: u64,
    pub reply_order: ReplyOrder,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: 1000,
            max_delay_ms: 2000,
            reply_order: ReplyOrder::Fire,
        }
    }
}

/// Upper bound for any configured delay: one day.
pub const MAX_DELAY_MS: u64 = 24 * 60 * 60 * 1000;

impl AssistantConfig {
    /// Delay bounds as a half-open range, capped at [`MAX_DELAY_MS`]; a
    /// collapsed range yields `min..min+1`.
    pub fn delay_range_ms(&self) -> std::ops::Range<u64> {
        let min = self.min_delay_ms.min(MAX_DELAY_MS);
        let max = self.max_delay_ms.clamp(min + 1, MAX_DELAY_MS + 1);
        min..max
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            icons: "auto".to_string(),
            keymap: Keymap::default(),
            splash_delay_ms: 2000,
            notification_badge: 3,
            assistant: AssistantConfig::default(),
        }
    }
}

impl Config {
    /// Default location: `~/.config/zwickly/config.toml`
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("zwickly")
            .join("config.toml")
    }

    /// Directory for the log file: `<cache dir>/zwickly`
    pub fn log_dir() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("zwickly")
    }

    /// Load configuration from file, writing defaults if it does not exist yet
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: Config =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file with secure permissions
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        // 600: owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(config_path)
                .with_context(|| format!("Failed to get file metadata: {:?}", config_path))?
                .permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(config_path, perms)
                .with_context(|| format!("Failed to set file permissions: {:?}", config_path))?;
        }

        Ok(())
    }

    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms.min(MAX_DELAY_MS))
    }

    /// Icon set from the `icons` field; "auto" detects from the terminal
    pub fn get_icon_set(&self) -> IconSet {
        match self.icons.to_lowercase().as_str() {
            "nerd" | "nerdfont" | "nerdfonts" => IconSet::NerdFonts,
            "unicode" | "emoji" => IconSet::Unicode,
            "ascii" | "plain" => IconSet::Ascii,
            _ => IconSet::detect(),
        }
    }
}
