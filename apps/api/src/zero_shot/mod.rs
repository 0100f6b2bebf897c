//! Zero-shot classification client.
//!
//! Talks to a locally hosted NLI model server using the Hugging Face inference
//! zero-shot protocol: `{inputs, parameters: {candidate_labels}}` in,
//! `{sequence, labels, scores}` out (`sequence` is ignored), ranked by descending score.
//!
//! `AppState` holds an `Arc<dyn ZeroShotClassifier>` so tests can swap in a fake.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::assessment::TopLabel;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Model server error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Model server returned no labels")]
    EmptyLabels,

    #[error("Model server returned {labels} labels but {scores} scores")]
    Mismatched { labels: usize, scores: usize },
}

#[async_trait]
pub trait ZeroShotClassifier: Send + Sync {
    async fn classify(
        &self,
        text: &str,
        candidate_labels: &[&str],
    ) -> Result<TopLabel, ClassifierError>;
}

#[derive(Debug, Serialize)]
struct ZeroShotRequest<'a> {
    inputs: &'a str,
    parameters: ZeroShotParameters<'a>,
}

#[derive(Debug, Serialize)]
struct ZeroShotParameters<'a> {
    candidate_labels: &'a [&'a str],
}

#[derive(Debug, Deserialize)]
pub struct ZeroShotOutput {
    pub labels: Vec<String>,
    pub scores: Vec<f64>,
}

/// Some servers wrap the result in a single-element array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ZeroShotReply {
    Single(ZeroShotOutput),
    Batched(Vec<ZeroShotOutput>),
}

impl ZeroShotOutput {
    /// Picks the best label. Servers rank descending, so this is normally index 0.
    pub fn top(self) -> Result<TopLabel, ClassifierError> {
        if self.labels.len() != self.scores.len() {
            return Err(ClassifierError::Mismatched {
                labels: self.labels.len(),
                scores: self.scores.len(),
            });
        }

        self.labels
            .into_iter()
            .zip(self.scores)
            .fold(None::<TopLabel>, |best, (label, score)| match best {
                Some(b) if b.score >= score => Some(b),
                _ => Some(TopLabel { label, score }),
            })
            .ok_or(ClassifierError::EmptyLabels)
    }
}

/// HTTP backend for a zero-shot model server (e.g. a local `bart-large-mnli` deployment).
#[derive(Clone)]
pub struct HttpZeroShotClassifier {
    client: Client,
    endpoint: String,
    api_token: Option<String>,
}

impl HttpZeroShotClassifier {
    pub fn new(endpoint: String, api_token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_token,
        }
    }
}

#[async_trait]
impl ZeroShotClassifier for HttpZeroShotClassifier {
    async fn classify(
        &self,
        text: &str,
        candidate_labels: &[&str],
    ) -> Result<TopLabel, ClassifierError> {
        let body = ZeroShotRequest {
            inputs: text,
            parameters: ZeroShotParameters { candidate_labels },
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClassifierError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let output = match response.json::<ZeroShotReply>().await? {
            ZeroShotReply::Single(output) => output,
            ZeroShotReply::Batched(outputs) => outputs
                .into_iter()
                .next()
                .ok_or(ClassifierError::EmptyLabels)?,
        };

        let top = output.top()?;
        debug!("Zero-shot top label: {} ({:.3})", top.label, top.score);
        Ok(top)
    }
}
