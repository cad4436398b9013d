//! Client for the contact message service.

use serde::{Deserialize, Serialize};

/// Service root used when no override is baked in at build time via the
/// `CONTACT_SERVICE_URL` environment variable.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8085";

/// Client for the contact-service HTTP API.
pub struct ContactClient {
    base_url: String,
    client: reqwest::Client,
}

impl ContactClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Get the base URL for the client
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a contact message and return the stored record.
    pub async fn submit(
        &self,
        submission: &ContactSubmission,
    ) -> Result<SubmissionReceipt, ClientError> {
        let url = format!("{}/api/v1/messages", self.base_url);
        let response = self.client.post(&url).json(submission).send().await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(ClientError::ApiError(api_error_message(&error_text)));
        }

        let receipt = response.json().await?;
        Ok(receipt)
    }
}

impl Default for ContactClient {
    fn default() -> Self {
        Self::new(option_env!("CONTACT_SERVICE_URL").unwrap_or(DEFAULT_BASE_URL))
    }
}

/// Pull the `error` field out of an API error body, falling back to the raw
/// text when the body is not the expected JSON shape.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|message| message.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| body.to_string())
}

// ========================
// Request Types
// ========================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// First missing required field, in form order.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Name is required.");
        }
        if self.email.trim().is_empty() {
            return Err("Email is required.");
        }
        if self.message.trim().is_empty() {
            return Err("Message is required.");
        }
        Ok(())
    }
}

// ========================
// Response Types
// ========================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("API error: {0}")]
    ApiError(String),
}
