//! Brief generation through an OpenAI-compatible chat completions API.

use async_trait::async_trait;
use serde_json::json;

use crate::server::error::AppError;

/// Army details handed to the generator.
#[derive(Debug, Clone, PartialEq)]
pub struct BriefRequest {
    pub army_name: String,
    pub faction: String,
    pub detachment: Option<String>,
    pub points: i32,
    pub list_text: String,
}

impl BriefRequest {
    fn system_prompt(&self) -> String {
        let detachment = self
            .detachment
            .as_deref()
            .map(|d| format!(" using the {} detachment", d))
            .unwrap_or_default();

        format!(
            "You are a veteran tabletop wargame coach. Write a tactical brief in Markdown for a \
             {} points {} army{}. Cover the army's game plan, key units, deployment, \
             threats to watch for and how to play each battle round. Use headings and bullet \
             lists. Do not repeat the list back.",
            self.points, self.faction, detachment
        )
    }

    fn user_prompt(&self) -> String {
        format!("Army: {}\n\n{}", self.army_name, self.list_text)
    }
}

/// Produces brief markdown for an army list.
#[async_trait]
pub trait BriefGenerator: Send + Sync {
    /// # Returns
    /// - `Ok(String)` - Markdown body of the brief
    /// - `Err(AppError::ServiceUnavailable)` - Generator not configured
    /// - `Err(AppError::GenerationFailed)` - Upstream error or empty answer
    async fn generate(&self, request: &BriefRequest) -> Result<String, AppError>;
}

pub struct OpenAiBriefGenerator {
    http_client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl OpenAiBriefGenerator {
    /// Creates a generator. Without an API key every call answers 503.
    pub fn new(
        http_client: reqwest::Client,
        api_key: Option<String>,
        model: String,
        base_url: String,
    ) -> Self {
        Self {
            http_client,
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl BriefGenerator for OpenAiBriefGenerator {
    async fn generate(&self, request: &BriefRequest) -> Result<String, AppError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(AppError::ServiceUnavailable(
                "Brief generation is not configured".to_string(),
            ));
        };

        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": request.system_prompt() },
                { "role": "user", "content": request.user_prompt() },
            ],
        });

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::GenerationFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::GenerationFailed(format!(
                "upstream returned {}: {}",
                status, detail
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::GenerationFailed(e.to_string()))?;

        let content = json
            .pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| AppError::GenerationFailed("response missing content".to_string()))?;

        Ok(content.to_string())
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Answers every request with the same markdown and counts calls.
    #[derive(Default)]
    pub struct FixedBriefGenerator {
        pub body: String,
        pub calls: AtomicUsize,
    }

    impl FixedBriefGenerator {
        pub fn new(body: &str) -> Self {
            Self {
                body: body.to_string(),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl BriefGenerator for FixedBriefGenerator {
        async fn generate(&self, _request: &BriefRequest) -> Result<String, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.body.clone())
        }
    }

    /// Fails every request like an unreachable upstream.
    pub struct FailingBriefGenerator;

    #[async_trait]
    impl BriefGenerator for FailingBriefGenerator {
        async fn generate(&self, _request: &BriefRequest) -> Result<String, AppError> {
            Err(AppError::GenerationFailed("upstream unavailable".to_string()))
        }
    }
}
