//! Configuration acquisition for the zone compiler.

use crate::config::Config;
use crate::error::Error;
use crate::sops::{SopsClient, SopsError};
use crate::zones::ZoneConfig;
use async_trait::async_trait;
use std::path::Path;

#[async_trait]
pub trait ConfigSource: Send + Sync {
    async fn fetch(&self) -> Result<ZoneConfig, Error>;
}

/// JSON payload carried in the DNS_ZONES_JSON environment variable.
pub struct EnvSource {
    payload: Option<String>,
}

impl EnvSource {
    pub fn new(payload: Option<String>) -> Self {
        Self { payload }
    }
}

#[async_trait]
impl ConfigSource for EnvSource {
    async fn fetch(&self) -> Result<ZoneConfig, Error> {
        let Some(raw) = &self.payload else {
            return Err(Error::ConfigMissing(
                "DNS_ZONES_JSON environment variable is not set".to_string(),
            ));
        };
        ZoneConfig::from_json(raw)
    }
}

/// Encrypted zones file, decrypted and converted by the external tools.
pub struct EncryptedFileSource {
    client: SopsClient,
    path: String,
}

impl EncryptedFileSource {
    pub fn new(config: &Config) -> Self {
        Self {
            client: SopsClient::new(&config.sops_bin, &config.yq_bin),
            path: config.zones_file.clone(),
        }
    }
}

#[async_trait]
impl ConfigSource for EncryptedFileSource {
    async fn fetch(&self) -> Result<ZoneConfig, Error> {
        if !Path::new(&self.path).exists() {
            return Err(Error::ConfigMissing(format!(
                "no DNS_ZONES_JSON environment variable and no encrypted zones file at {}",
                self.path
            )));
        }
        let raw = self
            .client
            .decrypt_to_json(&self.path)
            .await
            .map_err(|e| decrypt_error(&self.path, e))?;
        ZoneConfig::from_json(&raw)
    }
}

fn decrypt_error(path: &str, err: SopsError) -> Error {
    Error::Decrypt(format!(
        "{path}: {err}. Check that sops and yq are installed and a decryption key is available."
    ))
}

/// The environment payload wins when present, otherwise the encrypted file.
pub fn select(config: &Config) -> Box<dyn ConfigSource> {
    if config.zones_json.is_some() {
        Box::new(EnvSource::new(config.zones_json.clone()))
    } else {
        Box::new(EncryptedFileSource::new(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_env_source_missing_payload_is_fatal() {
        let source = EnvSource::new(None);
        let result = tokio_test::block_on(source.fetch());
        assert_matches!(result, Err(Error::ConfigMissing(_)));
    }

    #[tokio::test]
    async fn test_env_source_parses_payload() {
        let source = EnvSource::new(Some(
            r#"{"domains":{"example.com":{"provider":"none"}}}"#.to_string(),
        ));
        let config = source.fetch().await.unwrap();
        assert_eq!(config.domains.len(), 1);
    }

    #[tokio::test]
    async fn test_env_source_malformed_payload_is_parse_error() {
        let source = EnvSource::new(Some("{not json".to_string()));
        assert_matches!(source.fetch().await, Err(Error::Parse(_)));
    }

    #[tokio::test]
    async fn test_file_source_missing_file_is_fatal() {
        let config = Config {
            zones_file: String::from("tests/fixtures/does-not-exist.enc.yaml"),
            ..Config::default()
        };
        let source = EncryptedFileSource::new(&config);
        let result = source.fetch().await;
        assert_matches!(result, Err(Error::ConfigMissing(msg)) if msg.contains("does-not-exist"));
    }

    #[test]
    fn test_select_prefers_env_payload() {
        let config = Config {
            zones_json: Some(r#"{"domains":{}}"#.to_string()),
            ..Config::default()
        };
        let source = select(&config);
        let zones = tokio_test::block_on(source.fetch()).unwrap();
        assert!(zones.domains.is_empty());
    }
}
