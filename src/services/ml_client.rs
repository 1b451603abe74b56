// src/services/ml_client.rs
//! Caller side of the chat service, for bots that forward user messages.

use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use reqwest::Client;
use serde_json::json;
use thiserror::Error;

use crate::message::{ChatResponse, ServiceStatus};

pub const DEFAULT_SERVICE_URL: &str = "http://localhost:5000";
const CHAT_TIMEOUT: Duration = Duration::from_secs(10);
const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("ML service request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("ML service returned status {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub enabled: bool,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: DEFAULT_SERVICE_URL.to_string(),
            timeout: CHAT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `ML_SERVICE_ENABLED` must be exactly `"true"` to enable the client.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            enabled: lookup("ML_SERVICE_ENABLED").as_deref() == Some("true"),
            base_url: lookup("ML_SERVICE_URL").unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string()),
            timeout: CHAT_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthReport {
    Disabled,
    Healthy(ServiceStatus),
    Unhealthy(String),
}

#[derive(Debug, Clone)]
pub struct MlClient {
    http: Client,
    config: ClientConfig,
}

impl MlClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn enable(&mut self) {
        self.config.enabled = true;
        tracing::info!("ML service enabled");
    }

    pub fn disable(&mut self) {
        self.config.enabled = false;
        tracing::info!("ML service disabled");
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Forward `message` to the service. `Ok(None)` when disabled or when
    /// the service answered without a reply.
    pub async fn get_response(&self, message: &str) -> Result<Option<String>, ClientError> {
        if !self.config.enabled {
            return Ok(None);
        }

        let body = json!({
            "message": message,
            "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        });

        let result = self.send_chat(&body).await;
        match &result {
            Ok(Some(_)) => tracing::info!("ML service response received"),
            Ok(None) => {}
            Err(e) => tracing::error!("ML service request failed: {}", e),
        }
        result
    }

    async fn send_chat(&self, body: &serde_json::Value) -> Result<Option<String>, ClientError> {
        let response = self
            .http
            .post(self.url("/chat"))
            .timeout(self.config.timeout)
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        let chat: ChatResponse = response.json().await?;
        Ok(Some(chat.response).filter(|r| !r.is_empty()))
    }

    pub async fn check_health(&self) -> HealthReport {
        if !self.config.enabled {
            return HealthReport::Disabled;
        }

        let result = async {
            let response = self
                .http
                .get(self.url("/health"))
                .timeout(HEALTH_TIMEOUT)
                .send()
                .await?
                .error_for_status()?;
            response.json::<ServiceStatus>().await
        }
        .await;

        match result {
            Ok(status) => HealthReport::Healthy(status),
            Err(e) => {
                tracing::error!("ML service health check failed: {}", e);
                HealthReport::Unhealthy(e.to_string())
            }
        }
    }
}
