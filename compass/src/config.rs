//! Runtime knobs for the page behaviour.
//!
//! The defaults reproduce the presentation as shipped. A host page can
//! override any subset by embedding a JSON object; missing keys keep
//! their default values.
//!
//! ```rust
//! use compass_page::CompassConfig;
//!
//! let config = CompassConfig::from_json(r#"{ "counter_duration_ms": 900 }"#).unwrap();
//! assert_eq!(config.counter_duration_ms, 900);
//! assert_eq!(config.trigger_section, "opportunity");
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CompassError, Result};

/// Behaviour configuration for counters and observers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompassConfig {
    /// Total duration of one counter animation, in milliseconds
    pub counter_duration_ms: u64,
    /// Id of the section whose first appearance starts the counters
    pub trigger_section: String,
    /// Visible fraction of the trigger section that counts as "entered"
    pub trigger_threshold: f64,
    /// Root margin collapsing the navigation trigger zone to the viewport midline
    pub nav_root_margin: String,
}

impl Default for CompassConfig {
    fn default() -> Self {
        Self {
            counter_duration_ms: 1500,
            trigger_section: "opportunity".into(),
            trigger_threshold: 0.5,
            nav_root_margin: "-50% 0px -50% 0px".into(),
        }
    }
}

impl CompassConfig {
    /// Parse a (possibly partial) JSON object over the defaults and validate it.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.trigger_threshold) {
            return Err(CompassError::InvalidConfig(format!(
                "trigger_threshold must be within 0.0..=1.0, got {}",
                self.trigger_threshold
            )));
        }
        if self.trigger_section.trim().is_empty() {
            return Err(CompassError::InvalidConfig(
                "trigger_section must not be empty".into(),
            ));
        }
        Ok(())
    }

    pub fn counter_duration(&self) -> Duration {
        Duration::from_millis(self.counter_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_yields_defaults() {
        let config = CompassConfig::from_json("{}").unwrap();
        assert_eq!(config, CompassConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config =
            CompassConfig::from_json(r#"{ "trigger_section": "stats", "trigger_threshold": 0.25 }"#)
                .unwrap();
        assert_eq!(config.trigger_section, "stats");
        assert_eq!(config.trigger_threshold, 0.25);
        assert_eq!(config.counter_duration_ms, 1500);
        assert_eq!(config.nav_root_margin, "-50% 0px -50% 0px");
    }

    #[test]
    fn threshold_out_of_range_is_rejected() {
        let err = CompassConfig::from_json(r#"{ "trigger_threshold": 1.5 }"#).unwrap_err();
        assert!(matches!(err, CompassError::InvalidConfig(_)));
    }

    #[test]
    fn blank_trigger_section_is_rejected() {
        let err = CompassConfig::from_json(r#"{ "trigger_section": "  " }"#).unwrap_err();
        assert!(matches!(err, CompassError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = CompassConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, CompassError::Config(_)));
    }
}
