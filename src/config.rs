use chrono::{DateTime, Datelike, Utc};
use thiserror::Error;

use crate::{
    i18n::{I18nError, Language},
    motion::MotionPreset,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("PORTFOLIO_DEFAULT_LANG: {0}")]
    Language(#[from] I18nError),
    #[error("PORTFOLIO_MOTION: unknown preset `{0}`")]
    MotionPreset(String),
    #[error("BUILD_TIME: {0}")]
    BuildTime(#[from] chrono::ParseError),
    #[error("PORTFOLIO_GA_ID: `{0}` is not a GA4 measurement id")]
    MeasurementId(String),
}

/// Site settings fixed at build time, so the server render and the hydrated
/// bundle always agree.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub measurement_id: Option<String>,
    pub default_language: Language,
    pub motion: MotionPreset,
    pub build_time: DateTime<Utc>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            measurement_id: None,
            default_language: Language::default(),
            motion: MotionPreset::default(),
            build_time: DateTime::<Utc>::UNIX_EPOCH,
        }
    }
}

impl SiteConfig {
    /// Reads settings through `lookup`; absent or empty values keep their default.
    pub fn from_lookup<'a>(
        lookup: impl Fn(&str) -> Option<&'a str>,
    ) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).map(str::trim).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(id) = get("PORTFOLIO_GA_ID") {
            if !is_measurement_id(id) {
                return Err(ConfigError::MeasurementId(id.to_string()));
            }
            config.measurement_id = Some(id.to_string());
        }
        if let Some(lang) = get("PORTFOLIO_DEFAULT_LANG") {
            config.default_language = lang.parse()?;
        }
        if let Some(preset) = get("PORTFOLIO_MOTION") {
            config.motion = preset.parse().map_err(ConfigError::MotionPreset)?;
        }
        if let Some(time) = get("BUILD_TIME") {
            config.build_time = DateTime::parse_from_rfc3339(time)?.with_timezone(&Utc);
        }
        Ok(config)
    }

    /// Settings captured by `build.rs`.
    pub fn load() -> Self {
        let lookup = |name: &str| match name {
            "PORTFOLIO_GA_ID" => option_env!("PORTFOLIO_GA_ID"),
            "PORTFOLIO_DEFAULT_LANG" => option_env!("PORTFOLIO_DEFAULT_LANG"),
            "PORTFOLIO_MOTION" => option_env!("PORTFOLIO_MOTION"),
            "BUILD_TIME" => option_env!("BUILD_TIME"),
            _ => None,
        };
        Self::from_lookup(lookup).unwrap_or_else(|e| {
            log::warn!("invalid site configuration, using defaults: {e}");
            Self::default()
        })
    }

    pub fn copyright_year(&self) -> i32 {
        self.build_time.year()
    }

}

/// `G-` followed by uppercase letters, digits and dashes. The id is spliced
/// into an inline script, so nothing else is accepted.
fn is_measurement_id(id: &str) -> bool {
    id.strip_prefix("G-").is_some_and(|rest| {
        !rest.is_empty()
            && rest
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-')
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn parse(vars: &[(&str, &str)]) -> Result<SiteConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SiteConfig::from_lookup(|name| vars.get(name).map(String::as_str))
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).expect("empty config is valid");
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.default_language, Language::Ru);
        assert_eq!(config.motion, MotionPreset::Cinematic);
        assert!(config.measurement_id.is_none());
    }

    #[test]
    fn test_full_config() {
        let config = parse(&[
            ("PORTFOLIO_GA_ID", "G-ABC123"),
            ("PORTFOLIO_DEFAULT_LANG", "en"),
            ("PORTFOLIO_MOTION", "standard"),
            ("BUILD_TIME", "2025-03-01T12:00:00+00:00"),
        ])
        .expect("valid config");
        assert_eq!(config.measurement_id.as_deref(), Some("G-ABC123"));
        assert_eq!(config.default_language, Language::En);
        assert_eq!(config.motion, MotionPreset::Standard);
        assert_eq!(config.copyright_year(), 2025);
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = parse(&[("PORTFOLIO_GA_ID", "  "), ("PORTFOLIO_MOTION", "")])
            .expect("blank values are ignored");
        assert_eq!(config.measurement_id, None);
        assert_eq!(config.motion, MotionPreset::Cinematic);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            parse(&[("PORTFOLIO_DEFAULT_LANG", "fr")]),
            Err(ConfigError::Language(_))
        ));
        assert!(matches!(
            parse(&[("PORTFOLIO_MOTION", "bouncy")]),
            Err(ConfigError::MotionPreset(_))
        ));
        assert!(matches!(
            parse(&[("BUILD_TIME", "yesterday")]),
            Err(ConfigError::BuildTime(_))
        ));
        assert!(matches!(
            parse(&[("PORTFOLIO_GA_ID", "UA-1234")]),
            Err(ConfigError::MeasurementId(_))
        ));
    }

    #[test]
    fn test_measurement_id_cannot_escape_script() {
        for id in [
            "G-ABC');alert(1);//",
            "G-abc123",
            "G-",
            "G-AB C",
            "G-ABC</script>",
        ] {
            assert!(
                matches!(
                    parse(&[("PORTFOLIO_GA_ID", id)]),
                    Err(ConfigError::MeasurementId(_))
                ),
                "accepted `{id}`"
            );
        }
        let config = parse(&[("PORTFOLIO_GA_ID", "G-7X2-K9")]).expect("valid id");
        assert_eq!(config.measurement_id.as_deref(), Some("G-7X2-K9"));
    }

    #[test]
    fn test_load_uses_build_time() {
        // build.rs always provides BUILD_TIME
        assert!(SiteConfig::load().copyright_year() >= 2024);
    }
}
