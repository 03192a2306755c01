//! Widget configuration and runtime environment.

use pagedom::Rect;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::SelectyError;

/// User agents that get the native control instead of a replica.
pub const DEFAULT_TOUCH_PATTERN: &str =
    "Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini";

/// Per-page widget configuration.
///
/// Every field has a default, so a partial JSON object deserializes:
///
/// ```
/// let config: selecty::SelectConfig = serde_json::from_str(r#"{"separator": " / "}"#).unwrap();
/// assert_eq!(config.separator, " / ");
/// assert_eq!(config.marker_attribute, "data-selecty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    /// Joins the selected labels of a multi-select summary.
    pub separator: String,

    /// Attribute that marks a host for [`Page::mount_all`](crate::Page::mount_all).
    pub marker_attribute: String,

    /// Case-insensitive regex matched against the user agent to detect
    /// touch devices.
    pub touch_pattern: String,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            separator: ", ".into(),
            marker_attribute: "data-selecty".into(),
            touch_pattern: DEFAULT_TOUCH_PATTERN.into(),
        }
    }
}

impl SelectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the multi-select summary separator.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the attribute used to discover hosts.
    pub fn marker_attribute(mut self, name: impl Into<String>) -> Self {
        self.marker_attribute = name.into();
        self
    }

    /// Set the touch device pattern.
    pub fn touch_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.touch_pattern = pattern.into();
        self
    }

    pub(crate) fn touch_regex(&self) -> Result<Regex, SelectyError> {
        Ok(RegexBuilder::new(&self.touch_pattern)
            .case_insensitive(true)
            .build()?)
    }
}

/// What the page is running in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    user_agent: String,
    viewport: Rect,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            user_agent: String::new(),
            viewport: Rect::from_size(80, 24),
        }
    }
}

impl Environment {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            ..Default::default()
        }
    }

    pub fn with_viewport(mut self, viewport: Rect) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Whether `config` classifies this environment as a touch device.
    pub fn is_touch(&self, config: &SelectConfig) -> Result<bool, SelectyError> {
        Ok(config.touch_regex()?.is_match(&self.user_agent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_agent_is_not_touch() {
        let env = Environment::new("Mozilla/5.0 (X11; Linux x86_64) Firefox/120.0");
        assert!(!env.is_touch(&SelectConfig::default()).unwrap());
    }

    #[test]
    fn touch_match_ignores_case() {
        let env = Environment::new("Mozilla/5.0 (iphone; CPU OS 17_0 like Mac OS X)");
        assert!(env.is_touch(&SelectConfig::default()).unwrap());
    }

    #[test]
    fn custom_pattern_replaces_default() {
        let config = SelectConfig::new().touch_pattern("kiosk");
        assert!(Environment::new("Kiosk/1.0").is_touch(&config).unwrap());
        assert!(!Environment::new("Android 14").is_touch(&config).unwrap());
    }

    #[test]
    fn broken_pattern_is_an_error() {
        let config = SelectConfig::new().touch_pattern("(unclosed");
        let err = Environment::default().is_touch(&config).unwrap_err();
        assert!(matches!(err, SelectyError::InvalidTouchPattern(_)));
    }

    #[test]
    fn empty_json_uses_defaults() {
        let config: SelectConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SelectConfig::default());
    }
}
