// src/api/types.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::analysis::{PasswordAnalysis, Strength};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Password to analyze
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AnalyzeResponse {
    /// Password length in characters
    pub length: usize,
    /// Character classes detected, e.g. "lower+digit"
    pub charset: String,
    /// Search space size k^n in scientific notation
    pub combinations: String,
    /// Estimated entropy in bits
    pub entropy: f64,
    /// Estimated brute-force time at 1e9 guesses/sec (display string)
    pub time_1e9: String,
    /// Strength classification
    pub strength: Strength,
    /// Human-readable advice
    pub feedback: String,
}

impl From<PasswordAnalysis> for AnalyzeResponse {
    fn from(analysis: PasswordAnalysis) -> Self {
        Self {
            length: analysis.length,
            charset: analysis.charset,
            combinations: analysis.combinations,
            entropy: analysis.entropy,
            time_1e9: analysis.crack_time,
            strength: analysis.strength,
            feedback: analysis.feedback.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Whether the service is up
    pub success: bool,
    /// Crate version
    pub version: String,
}
