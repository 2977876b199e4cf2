use config::{Config, File, FileFormat};
use serde::Deserialize;
use stun_attrs::DecodeLimits;
use thiserror::Error;

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum StunConfigError {
    #[error("failed to load config: {0}")]
    Load(#[from] config::ConfigError),
    #[error("max_attributes must be greater than zero")]
    NoAttributesAllowed,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StunGlobalConfig {
    #[serde(default)]
    pub decoder: DecodeLimits,
}

impl StunGlobalConfig {
    pub fn from_path(path: &str) -> Result<Self, StunConfigError> {
        Self::load(File::new(path, FileFormat::Toml))
    }

    pub fn from_toml_str(text: &str) -> Result<Self, StunConfigError> {
        Self::load(File::from_str(text, FileFormat::Toml))
    }

    fn load<S>(source: S) -> Result<Self, StunConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let cfg: Self = Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;
        if cfg.decoder.max_attributes == 0 {
            return Err(StunConfigError::NoAttributesAllowed);
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_section_missing() {
        let cfg = StunGlobalConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.decoder, DecodeLimits::default());
    }

    #[test]
    fn test_decoder_section() {
        let cfg = StunGlobalConfig::from_toml_str(
            r#"
            [decoder]
            max_attributes = 16
            max_value_len = 1024
            "#,
        )
        .unwrap();
        assert_eq!(cfg.decoder.max_attributes, 16);
        assert_eq!(cfg.decoder.max_value_len, 1024);
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let cfg = StunGlobalConfig::from_toml_str("[decoder]\nmax_value_len = 512\n").unwrap();
        assert_eq!(cfg.decoder.max_value_len, 512);
        assert_eq!(cfg.decoder.max_attributes, DecodeLimits::default().max_attributes);
    }

    #[test]
    fn test_zero_attributes_rejected() {
        let result = StunGlobalConfig::from_toml_str("[decoder]\nmax_attributes = 0\n");
        assert!(matches!(result, Err(StunConfigError::NoAttributesAllowed)));
    }

    #[test]
    fn test_missing_file() {
        let result = StunGlobalConfig::from_path("/nonexistent/stun.toml");
        assert!(matches!(result, Err(StunConfigError::Load(_))));
    }
}
