//! MWAA CLI proxy: runs Airflow CLI commands against a managed environment.
//!
//! MWAA exposes the Airflow CLI over HTTP: a short-lived token from
//! `create_cli_token` authorizes a POST of the command line to the
//! environment's webserver, which answers with base64-encoded stdout and
//! stderr.

use anyhow::{anyhow, Context, Result};
use aws_config::{BehaviorVersion, Region};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;

/// Decoded output of one proxied CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOutput {
    pub stdout: String,
    pub stderr: String,
}

pub struct Mwaa {
    client: aws_sdk_mwaa::Client,
    http: reqwest::Client,
}

impl Mwaa {
    pub async fn new(region: Option<String>) -> Result<Self> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(Region::new(region));
        }
        let config = loader.load().await;
        Ok(Mwaa {
            client: aws_sdk_mwaa::Client::new(&config),
            http: reqwest::Client::builder().build()?,
        })
    }

    /// Runs one Airflow CLI command in the given environment.
    pub async fn run_cli_command(&self, environment: &str, command: &str) -> Result<CliOutput> {
        let token = self
            .client
            .create_cli_token()
            .name(environment)
            .send()
            .await
            .with_context(|| format!("couldn't create CLI token for environment {environment}"))?;

        let cli_token = token
            .cli_token()
            .ok_or_else(|| anyhow!("no CLI token in response"))?;
        let hostname = token
            .web_server_hostname()
            .ok_or_else(|| anyhow!("no webserver hostname in response"))?;

        post_cli_command(&self.http, &format!("https://{hostname}"), cli_token, command).await
    }
}

async fn post_cli_command(
    http: &reqwest::Client,
    base_url: &str,
    token: &str,
    command: &str,
) -> Result<CliOutput> {
    let response = http
        .post(format!("{base_url}/aws_mwaa/cli"))
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "text/plain")
        .body(command.to_string())
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(anyhow!("MWAA CLI request failed: {status}"));
    }

    let payload: Value = response.json().await?;
    Ok(CliOutput {
        stdout: decode_field(&payload, "stdout")?,
        stderr: decode_field(&payload, "stderr")?,
    })
}

fn decode_field(payload: &Value, field: &str) -> Result<String> {
    let encoded = payload.get(field).and_then(Value::as_str).unwrap_or_default();
    let bytes = STANDARD
        .decode(encoded)
        .with_context(|| format!("invalid base64 in MWAA {field}"))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn cli_output_is_base64_decoded() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/aws_mwaa/cli")
            .match_header("authorization", "Bearer token-123")
            .match_header("content-type", "text/plain")
            .match_body("dags list")
            .with_status(200)
            .with_body(
                json!({
                    "stdout": STANDARD.encode("dag_a\ndag_b\n"),
                    "stderr": STANDARD.encode(""),
                })
                .to_string(),
            )
            .create_async()
            .await;

        let output = post_cli_command(&reqwest::Client::new(), &server.url(), "token-123", "dags list")
            .await
            .unwrap();

        assert_eq!(output.stdout, "dag_a\ndag_b\n");
        assert_eq!(output.stderr, "");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn http_errors_are_surfaced() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/aws_mwaa/cli")
            .with_status(403)
            .create_async()
            .await;

        let result =
            post_cli_command(&reqwest::Client::new(), &server.url(), "bad-token", "dags list").await;
        assert!(result.is_err());
    }
}
