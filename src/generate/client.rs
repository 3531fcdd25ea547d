use std::time::Duration;

use crate::{
    foundation::error::{BlueboardError, BlueboardResult},
    generate::{
        classify::{Classification, PromptRequest},
        rules::RuleBasedGenerator,
    },
};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Calls a remote text-generation endpoint. One attempt per prompt, bounded by a timeout.
#[derive(Clone, Debug)]
pub struct HttpTextGenerator {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTextGenerator {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> BlueboardResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BlueboardError::startup(format!("build http client: {e}")))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[tracing::instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn classify(&self, prompt: &str) -> BlueboardResult<Classification> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&PromptRequest::new(prompt))
            .send()
            .await
            .map_err(|e| BlueboardError::remote(describe(&e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BlueboardError::remote(format!(
                "service answered {status}: {}",
                body.trim()
            )));
        }

        response
            .json::<Classification>()
            .await
            .map_err(|e| BlueboardError::remote(format!("undecodable response: {e}")))
    }
}

fn describe(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "request timed out".to_string()
    } else if err.is_connect() {
        format!("service unreachable: {err}")
    } else {
        err.to_string()
    }
}

/// Source of prompt classifications.
#[derive(Clone, Debug)]
pub enum Generator {
    Remote(HttpTextGenerator),
    Rules(RuleBasedGenerator),
}

impl Generator {
    pub async fn classify(&self, prompt: &str) -> BlueboardResult<Classification> {
        match self {
            Self::Remote(http) => http.classify(prompt).await,
            Self::Rules(rules) => Ok(rules.classify(prompt)),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Remote(http) => format!("remote ({})", http.endpoint()),
            Self::Rules(_) => "rule-based".to_string(),
        }
    }
}
