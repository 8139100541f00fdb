use crate::client::{AuthClient, ClientError, ClientResult, LoginRequest};

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{Client as ReqwestClient, Method, StatusCode, Url};
use serde::Serialize;
use serde_json::Value;
use vh_core::{OrganizationRegistration, Role, UserRecord, VolunteerRegistration};

/// reqwest-backed client for the Volunteer Hub REST API
pub struct HttpAuthClient {
    pub base_url: String,
    client: ReqwestClient,
}

impl HttpAuthClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8080")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Create a client whose requests give up after `timeout`.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> ClientResult<Self> {
        let mut builder = ReqwestClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    /// Resolve `segments` against the base URL, percent-encoding each one.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::invalid_url(&self.base_url, e.to_string()))?;

        url.path_segments_mut()
            .map_err(|_| ClientError::invalid_url(&self.base_url, "URL cannot be a base"))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    /// Send a JSON body and map non-success statuses to [`ClientError::Api`].
    ///
    /// Success is decided on the status alone. The response body is decoded as
    /// JSON when possible, otherwise returned as a string.
    async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: &B,
    ) -> ClientResult<(StatusCode, Value)> {
        debug!("{method} {}", url.path());

        let response = self.client.request(method, url).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        // Non-JSON bodies are kept as text; callers that need a shape check for it.
        let body: Value = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        if !status.is_success() {
            let (code, message) = Self::error_details(status, &body);
            warn!("Request failed with {status}: {message}");
            return Err(ClientError::api_error(status.as_u16(), code, message));
        }

        Ok((status, body))
    }

    /// Pull a code and message out of an error body.
    ///
    /// Accepts `{"error": {"code", "message"}}`, `{"error": "..."}` and
    /// `{"message": "..."}`; anything else falls back to the status line.
    pub(crate) fn error_details(status: StatusCode, body: &Value) -> (String, String) {
        let fallback_message = status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string();

        match body.get("error") {
            Some(Value::Object(error)) => {
                let code = error
                    .get("code")
                    .and_then(|v| v.as_str())
                    .unwrap_or("UNKNOWN")
                    .to_string();
                let message = error
                    .get("message")
                    .and_then(|v| v.as_str())
                    .map(String::from)
                    .unwrap_or(fallback_message);
                (code, message)
            }
            Some(Value::String(message)) => (String::from("UNKNOWN"), message.clone()),
            _ => {
                let message = body
                    .get("message")
                    .and_then(|v| v.as_str())
                    .map(String::from)
                    .or_else(|| body.as_str().map(String::from))
                    .unwrap_or(fallback_message);
                (String::from("UNKNOWN"), message)
            }
        }
    }

    /// Account creation is only accepted on a plain 200.
    async fn register<B: Serialize + ?Sized>(&self, role: Role, body: &B) -> ClientResult<()> {
        let url = self.endpoint(&[role.collection(), "create"])?;
        let (status, _) = self.execute(Method::POST, url, body).await?;

        if status != StatusCode::OK {
            warn!("Registration for {role} answered {status}, expected 200");
            return Err(ClientError::rejected(status.as_u16()));
        }

        Ok(())
    }
}

#[async_trait]
impl AuthClient for HttpAuthClient {
    async fn login(&self, request: &LoginRequest) -> ClientResult<UserRecord> {
        let url = self.endpoint(&["login", request.role.login_segment()])?;
        let (_, mut body) = self.execute(Method::POST, url, request).await?;

        let record = match body.get_mut("user").map(Value::take) {
            Some(Value::Object(record)) => record,
            _ => {
                return Err(ClientError::unexpected_response(
                    "login response has no user record",
                ));
            }
        };

        let record: UserRecord = serde_json::from_value(Value::Object(record))?;
        info!("Logged in {} as {}", record.email, request.role);
        Ok(record)
    }

    async fn register_volunteer(&self, registration: &VolunteerRegistration) -> ClientResult<()> {
        self.register(Role::Volunteer, registration).await
    }

    async fn register_organization(
        &self,
        registration: &OrganizationRegistration,
    ) -> ClientResult<()> {
        self.register(Role::OrganizationAdmin, registration).await
    }

    async fn update_profile(
        &self,
        role: Role,
        email: &str,
        payload: &Value,
    ) -> ClientResult<Value> {
        let url = self.endpoint(&[role.collection(), "update", email])?;
        let (_, body) = self.execute(Method::PUT, url, payload).await?;
        Ok(body)
    }
}
