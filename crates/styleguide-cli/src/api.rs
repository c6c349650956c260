//! Styleguide API Client

use anyhow::Result;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// API Client for the styleguide server
pub struct StyleClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Response Types
// ============================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct PromptResponse {
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
pub struct StylePayload {
    pub name: String,
    pub description: String,
}

/// Extract the server's error message from a failed response
async fn api_error(resp: reqwest::Response) -> anyhow::Error {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|e| e.error)
        .unwrap_or(body);
    anyhow::anyhow!("API error ({}): {}", status, message)
}

impl StyleClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// List all styles
    pub async fn list_styles(&self) -> Result<Vec<StyleResponse>> {
        let url = format!("{}/api/styles", self.base_url);
        let resp = self.client.get(&url).send().await?;

        if !resp.status().is_success() {
            return Err(api_error(resp).await);
        }

        Ok(resp.json().await?)
    }

    /// Create a new style
    pub async fn create_style(&self, name: &str, description: &str) -> Result<StyleResponse> {
        let url = format!("{}/api/styles", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&StylePayload {
                name: name.to_string(),
                description: description.to_string(),
            })
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(api_error(resp).await);
        }

        Ok(resp.json().await?)
    }

    /// Update an existing style
    pub async fn update_style(
        &self,
        id: i64,
        name: &str,
        description: &str,
    ) -> Result<StyleResponse> {
        let url = format!("{}/api/styles/{}", self.base_url, id);
        let resp = self
            .client
            .put(&url)
            .json(&StylePayload {
                name: name.to_string(),
                description: description.to_string(),
            })
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(api_error(resp).await);
        }

        Ok(resp.json().await?)
    }

    /// Delete a style
    pub async fn delete_style(&self, id: i64) -> Result<()> {
        let url = format!("{}/api/styles/{}", self.base_url, id);
        let resp = self.client.delete(&url).send().await?;

        if !resp.status().is_success() {
            return Err(api_error(resp).await);
        }

        Ok(())
    }

    /// Fetch the style-detection prompt
    pub async fn detection_prompt(&self) -> Result<PromptResponse> {
        let url = format!("{}/api/prompt", self.base_url);
        let resp = self.client.get(&url).send().await?;

        if !resp.status().is_success() {
            return Err(api_error(resp).await);
        }

        Ok(resp.json().await?)
    }
}
