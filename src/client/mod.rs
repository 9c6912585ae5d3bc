// src/client/mod.rs
//
// Typed client for the analysis API. This is the programmatic counterpart of
// the meter page script: it issues the analyze request, decodes the result
// and hands it to the view layer.
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

pub mod input;
pub mod view;

pub use input::PasswordInput;
pub use view::{MeterView, VisibilityToggle};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },

    #[error("malformed response: {0}")]
    Decode(serde_json::Error),
}

/// One analysis result as received over the wire.
///
/// `length`, `charset`, `combinations` and `time_1e9` are display-ready and
/// opaque to the client, so they are kept as raw JSON values and rendered
/// verbatim. `strength` stays a plain string; classification happens
/// server-side and the renderer only pattern-matches known labels.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisResult {
    pub strength: String,
    pub feedback: Option<String>,
    pub length: Value,
    pub charset: Value,
    pub combinations: Value,
    pub entropy: f64,
    pub time_1e9: Value,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for `POST /api/analyze`.
pub struct AnalyzerClient {
    http: reqwest::Client,
    base_url: String,
}

impl AnalyzerClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Submit a password for analysis.
    ///
    /// Failures are explicit: transport problems map to `Network`, non-2xx
    /// statuses to `Server` and undecodable bodies to `Decode`.
    pub async fn analyze(&self, password: &str) -> Result<AnalysisResult, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/analyze", self.base_url))
            .json(&serde_json::json!({ "password": password }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(ClientError::Server {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(ClientError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let client = AnalyzerClient::new("http://localhost:5000/");
        assert_eq!(client.base_url, "http://localhost:5000");
    }

    #[test]
    fn result_decodes_contract_fields() {
        let result: AnalysisResult = serde_json::from_str(
            r#"{"strength":"Strong","feedback":"Add a symbol","length":8,
                "charset":"lower+digit","combinations":"2.8e12",
                "entropy":36.5,"time_1e9":"36.5 seconds"}"#,
        )
        .unwrap();
        assert_eq!(result.strength, "Strong");
        assert_eq!(result.feedback.as_deref(), Some("Add a symbol"));
        assert_eq!(result.entropy, 36.5);
    }

    #[test]
    fn result_decodes_without_feedback() {
        let result: AnalysisResult = serde_json::from_str(
            r#"{"strength":"Weak","length":3,"charset":"lower",
                "combinations":"1.8e4","entropy":14.1,"time_1e9":"0.00 sec"}"#,
        )
        .unwrap();
        assert!(result.feedback.is_none());
    }

    #[test]
    fn server_error_carries_status_and_message() {
        let err = ClientError::Server {
            status: 400,
            message: "No password provided".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "server returned 400: No password provided"
        );
    }
}
