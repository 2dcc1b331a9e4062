//! sops/yq pipeline for the encrypted zones file.

use std::process::Stdio;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

#[derive(Error, Debug)]
pub enum SopsError {
    #[error("pipeline error: {0}")]
    Pipeline(String),
    #[error("sops: {0}")]
    Decrypt(String),
    #[error("yq: {0}")]
    Convert(String),
}

pub struct SopsClient {
    sops_bin: String,
    yq_bin: String,
}

impl SopsClient {
    pub fn new(sops_bin: &str, yq_bin: &str) -> Self {
        Self {
            sops_bin: sops_bin.to_string(),
            yq_bin: yq_bin.to_string(),
        }
    }

    /// Decrypt `path` and convert the plaintext YAML to JSON, returning
    /// the converter's stdout.
    pub async fn decrypt_to_json(&self, path: &str) -> Result<String, SopsError> {
        let decrypted = Command::new(&self.sops_bin)
            .arg("-d")
            .arg(path)
            .stdout(Stdio::piped())
            .output()
            .await
            .map_err(|e| SopsError::Pipeline(e.to_string()))?;

        if !decrypted.status.success() {
            return Err(SopsError::Decrypt(
                String::from_utf8_lossy(&decrypted.stderr).to_string(),
            ));
        }

        let mut converter = Command::new(&self.yq_bin)
            .arg("-o=json")
            .arg(".")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| SopsError::Pipeline(e.to_string()))?;

        let Some(mut stdin) = converter.stdin.take() else {
            return Err(SopsError::Pipeline("yq stdin unavailable".to_string()));
        };
        stdin
            .write_all(&decrypted.stdout)
            .await
            .map_err(|e| SopsError::Pipeline(e.to_string()))?;
        drop(stdin);

        let converted = converter
            .wait_with_output()
            .await
            .map_err(|e| SopsError::Pipeline(e.to_string()))?;

        if !converted.status.success() {
            return Err(SopsError::Convert(
                String::from_utf8_lossy(&converted.stderr).to_string(),
            ));
        }

        Ok(String::from_utf8_lossy(&converted.stdout).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use mockall::automock;

    #[automock]
    trait DecryptPipeline {
        fn decrypt_to_json(&self, path: &str) -> Result<String, SopsError>;
    }

    #[test]
    fn test_mocked_pipeline_returns_payload() {
        let mut pipeline = MockDecryptPipeline::new();
        pipeline
            .expect_decrypt_to_json()
            .returning(|_| Ok(r#"{"domains":{}}"#.to_string()));
        let payload = pipeline.decrypt_to_json("dns_zones.enc.yaml").unwrap();
        assert_eq!(payload, r#"{"domains":{}}"#);
    }

    #[tokio::test]
    async fn test_missing_binary_is_pipeline_error() {
        let client = SopsClient::new("/nonexistent/sops-binary", "/nonexistent/yq-binary");
        let result = client.decrypt_to_json("dns_zones.enc.yaml").await;
        assert_matches!(result, Err(SopsError::Pipeline(_)));
    }
}
