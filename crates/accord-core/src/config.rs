use crate::error::AccordError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Runtime knobs for the dashboard and review screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccordConfig {
    /// Rows shown in the upcoming-renewals panel.
    pub renewal_limit: usize,
    /// Fixed delay of the simulated AI analysis.
    pub analysis_delay_ms: u64,
    /// ISO 4217 code used for portfolio totals.
    pub display_currency: String,
}

impl Default for AccordConfig {
    fn default() -> Self {
        Self {
            renewal_limit: 4,
            analysis_delay_ms: 3_000,
            display_currency: "USD".to_string(),
        }
    }
}

impl AccordConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, AccordError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| AccordError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, AccordError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|err| AccordError::Config(format!("{}: {}", path.display(), err)))?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), AccordError> {
        let currency = self.display_currency.as_bytes();
        if currency.len() != 3 || !currency.iter().all(u8::is_ascii_uppercase) {
            return Err(AccordError::Config(format!(
                "display_currency must be a three-letter ISO code, got '{}'",
                self.display_currency
            )));
        }
        Ok(())
    }

    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_layout() {
        let config = AccordConfig::default();
        assert_eq!(config.renewal_limit, 4);
        assert_eq!(config.analysis_delay(), Duration::from_secs(3));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config = AccordConfig::from_json_str(r#"{"renewal_limit": 6}"#).unwrap();
        assert_eq!(config.renewal_limit, 6);
        assert_eq!(config.analysis_delay_ms, 3_000);
        assert_eq!(config.display_currency, "USD");
    }

    #[test]
    fn rejects_unknown_fields_and_bad_currency() {
        assert!(matches!(
            AccordConfig::from_json_str(r#"{"renewals": 6}"#),
            Err(AccordError::Config(_))
        ));
        assert!(matches!(
            AccordConfig::from_json_str(r#"{"display_currency": "usd"}"#),
            Err(AccordError::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = AccordConfig::from_json_file("/nonexistent/accord.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/accord.json"));
    }
}
