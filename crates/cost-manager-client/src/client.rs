//! Cost-manager HTTP client implementation.

use reqwest::Client;
use std::time::Duration;

use cost_manager_core::UserId;

use crate::error::ClientError;
use crate::types::{
    AddCostRequest, ApiErrorResponse, CostRecord, CreateUserRequest, HealthResponse,
    MonthlyReport, TeamMember, User,
};

/// Cost-manager API client.
///
/// Provides methods for registering users, recording costs and fetching
/// monthly reports.
#[derive(Debug, Clone)]
pub struct CostManagerClient {
    client: Client,
    base_url: String,
}

impl CostManagerClient {
    /// Create a new cost-manager client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the cost-manager service (e.g., `"http://localhost:3000"`)
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Configuration` if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_options(base_url, ClientOptions::default())
    }

    /// Create a new cost-manager client with custom options.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Configuration` if the HTTP client cannot be built.
    pub fn with_options(
        base_url: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()
            .map_err(|e| ClientError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Register a user.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::UserAlreadyExists` if the id is taken, or another
    /// error if the request fails.
    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<User, ClientError> {
        let url = format!("{}/api/users", self.base_url);

        let response = self.client.post(&url).json(request).send().await?;

        self.handle_response(response).await
    }

    /// Get a user and their running total.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::UserNotFound` for unknown ids, or another error if
    /// the request fails.
    pub async fn get_user(&self, user_id: UserId) -> Result<User, ClientError> {
        let url = format!("{}/api/users/{user_id}", self.base_url);

        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Record a cost item.
    ///
    /// # Errors
    ///
    /// Returns a typed error for unknown users, invalid categories and dates
    /// outside the accepted window, or another error if the request fails.
    pub async fn add_cost(&self, request: &AddCostRequest) -> Result<CostRecord, ClientError> {
        let url = format!("{}/api/add", self.base_url);

        let response = self.client.post(&url).json(request).send().await?;

        let record: CostRecord = self.handle_response(response).await?;
        tracing::debug!(cost_id = %record.id, user_id = %record.user_id, "Cost recorded");
        Ok(record)
    }

    /// Get a user's costs for one month, grouped by category.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::UserNotFound` for unknown ids, or another error if
    /// the request fails.
    pub async fn monthly_report(
        &self,
        user_id: UserId,
        year: i32,
        month: u32,
    ) -> Result<MonthlyReport, ClientError> {
        let url = format!("{}/api/report", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("id", user_id.to_string()),
                ("year", year.to_string()),
                ("month", month.to_string()),
            ])
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// List the developers of the service.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn about(&self) -> Result<Vec<TeamMember>, ClientError> {
        let url = format!("{}/api/about", self.base_url);

        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Check service health.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let url = format!("{}/health", self.base_url);

        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Handle API response and convert errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        // Try to parse error response
        let error_body: Result<ApiErrorResponse, _> = response.json().await;

        let Ok(api_error) = error_body else {
            return Err(ClientError::Api {
                code: "unknown".to_string(),
                message: format!("HTTP {status}"),
                status: status.as_u16(),
            });
        };

        let detail = |key: &str| {
            api_error
                .details
                .as_ref()
                .and_then(|d| d.get(key))
                .and_then(serde_json::Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        // Map specific error codes to typed errors
        match api_error.code.as_deref().unwrap_or("unknown") {
            "invalid_category" => Err(ClientError::InvalidCategory {
                category: detail("category"),
            }),
            "date_out_of_range" => Err(ClientError::DateOutOfRange {
                start: detail("start"),
                end: detail("end"),
            }),
            "not_found" if api_error.error == "User does not exist" => {
                Err(ClientError::UserNotFound)
            }
            "conflict" => Err(ClientError::UserAlreadyExists(api_error.error)),
            code => Err(ClientError::Api {
                code: code.to_string(),
                message: api_error.error,
                status: status.as_u16(),
            }),
        }
    }
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
        }
    }
}
