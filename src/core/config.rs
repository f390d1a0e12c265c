//! Site configuration.
//!
//! Every field has a default, so an empty object (or no configuration at
//! all) yields the stock behaviour. In the browser the JSON comes from an
//! optional `<script type="application/json" id="site-config">` element.

use serde::{Deserialize, Serialize};

use super::carousel::DEFAULT_AUTOPLAY_MS;
use super::chatbot::DEFAULT_REPLY_DELAY_MS;
use super::counter::{DEFAULT_COUNT_DURATION_MS, DEFAULT_FRAME_MS};
use super::notification::{DEFAULT_DISMISS_MS, MAX_NOTIFICATIONS};
use super::reveal::{RevealError, RevealOptions};
use super::timing::{DEFAULT_INPUT_DEBOUNCE_MS, DEFAULT_SCROLL_THROTTLE_MS};

/// Id of the element holding the JSON configuration
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid reveal options: {0}")]
    Reveal(#[from] RevealError),

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
}

/// Timer periods used across the pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimingConfig {
    pub scroll_throttle_ms: f64,
    pub input_debounce_ms: f64,
    pub carousel_autoplay_ms: u32,
    pub chat_reply_delay_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            scroll_throttle_ms: DEFAULT_SCROLL_THROTTLE_MS,
            input_debounce_ms: DEFAULT_INPUT_DEBOUNCE_MS,
            carousel_autoplay_ms: DEFAULT_AUTOPLAY_MS,
            chat_reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
        }
    }
}

/// Statistic count-up animation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CounterConfig {
    pub duration_ms: u32,
    pub frame_ms: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_COUNT_DURATION_MS,
            frame_ms: DEFAULT_FRAME_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationConfig {
    pub dismiss_ms: u32,
    pub max_visible: usize,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            dismiss_ms: DEFAULT_DISMISS_MS,
            max_visible: MAX_NOTIFICATIONS,
        }
    }
}

/// Whole-site configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub reveal: RevealOptions,
    pub timing: TimingConfig,
    pub counter: CounterConfig,
    pub notifications: NotificationConfig,
}

impl SiteConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        tracing::debug!(?config, "loaded site configuration");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.reveal.validate()?;

        let zero = |field| Err(ConfigError::Zero { field });
        if self.timing.scroll_throttle_ms <= 0.0 {
            return zero("timing.scrollThrottleMs");
        }
        if self.timing.carousel_autoplay_ms == 0 {
            return zero("timing.carouselAutoplayMs");
        }
        if self.counter.frame_ms == 0 {
            return zero("counter.frameMs");
        }
        if self.notifications.max_visible == 0 {
            return zero("notifications.maxVisible");
        }
        Ok(())
    }
}
