pub(crate) mod error;
pub(crate) mod http_client;
pub(crate) mod login_request;

pub use error::{ClientError, Result as ClientResult};
pub use http_client::HttpAuthClient;
pub use login_request::LoginRequest;

use async_trait::async_trait;
use serde_json::Value;
use vh_core::{OrganizationRegistration, Role, UserRecord, VolunteerRegistration};

/// Remote calls the session depends on.
///
/// Implementations are stateless: they never touch session state, they only
/// turn requests into records or failures.
#[async_trait]
pub trait AuthClient: Send + Sync {
    /// Authenticate against the role's login endpoint and return the account record.
    async fn login(&self, request: &LoginRequest) -> ClientResult<UserRecord>;

    async fn register_volunteer(&self, registration: &VolunteerRegistration) -> ClientResult<()>;

    async fn register_organization(
        &self,
        registration: &OrganizationRegistration,
    ) -> ClientResult<()>;

    /// Send a profile update for the account addressed by `email`.
    ///
    /// `payload` is already in backend shape. The response body is returned
    /// as-is; callers are free to ignore it.
    async fn update_profile(&self, role: Role, email: &str, payload: &Value)
    -> ClientResult<Value>;
}
