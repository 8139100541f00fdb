
use crate::{AuthClient, ClientError, ClientResult, LoginRequest};
use crate::{LoadResult, MemorySessionStore, SessionStore, StoreError, StoreResult};

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Notify;
use vh_core::{
    OrganizationProfile, OrganizationRegistration, Role, User, UserRecord, VolunteerProfile,
    VolunteerRegistration,
};

/// Call observed by [`ScriptedClient`]
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Login { email: String, role: Role },
    RegisterVolunteer { email: String },
    RegisterOrganization { email: String },
    Update { role: Role, email: String, payload: Value },
}

/// AuthClient that replays queued responses and records every call.
/// An empty queue answers with an unexpected-response error.
#[derive(Default)]
pub(crate) struct ScriptedClient {
    logins: Mutex<VecDeque<ClientResult<UserRecord>>>,
    registrations: Mutex<VecDeque<ClientResult<()>>>,
    updates: Mutex<VecDeque<ClientResult<Value>>>,
    calls: Mutex<Vec<Call>>,
    /// When set, login and update wait for a notification before answering
    gate: Option<Arc<Notify>>,
}

impl ScriptedClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    pub(crate) fn push_login(&self, result: ClientResult<UserRecord>) {
        self.logins.lock().unwrap().push_back(result);
    }

    pub(crate) fn push_registration(&self, result: ClientResult<()>) {
        self.registrations.lock().unwrap().push_back(result);
    }

    pub(crate) fn push_update(&self, result: ClientResult<Value>) {
        self.updates.lock().unwrap().push_back(result);
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    async fn wait_for_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn next<T>(queue: &Mutex<VecDeque<ClientResult<T>>>) -> ClientResult<T> {
        queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::unexpected_response("no scripted response")))
    }
}

#[async_trait]
impl AuthClient for ScriptedClient {
    async fn login(&self, request: &LoginRequest) -> ClientResult<UserRecord> {
        self.record(Call::Login {
            email: request.email.clone(),
            role: request.role,
        });
        self.wait_for_gate().await;
        Self::next(&self.logins)
    }

    async fn register_volunteer(&self, registration: &VolunteerRegistration) -> ClientResult<()> {
        self.record(Call::RegisterVolunteer {
            email: registration.email.clone(),
        });
        Self::next(&self.registrations)
    }

    async fn register_organization(
        &self,
        registration: &OrganizationRegistration,
    ) -> ClientResult<()> {
        self.record(Call::RegisterOrganization {
            email: registration.email.clone(),
        });
        Self::next(&self.registrations)
    }

    async fn update_profile(
        &self,
        role: Role,
        email: &str,
        payload: &Value,
    ) -> ClientResult<Value> {
        self.record(Call::Update {
            role,
            email: email.to_string(),
            payload: payload.clone(),
        });
        self.wait_for_gate().await;
        Self::next(&self.updates)
    }
}

/// Memory store whose writes can be switched to fail
#[derive(Default)]
pub(crate) struct FlakyStore {
    inner: MemorySessionStore,
    pub(crate) fail_writes: AtomicBool,
}

impl FlakyStore {
    pub(crate) fn seeded(user: &User) -> Self {
        let store = Self::default();
        store.inner.save(user).unwrap();
        store
    }

    pub(crate) fn set_failing(&self, failing: bool) {
        self.fail_writes.store(failing, Ordering::SeqCst);
    }

    pub(crate) fn stored_user(&self) -> Option<User> {
        self.inner.load().unwrap().user
    }

    fn check(&self) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::file_write(
                PathBuf::from("flaky"),
                std::io::Error::other("disk full"),
            ));
        }
        Ok(())
    }
}

impl SessionStore for FlakyStore {
    fn load(&self) -> StoreResult<LoadResult> {
        self.inner.load()
    }

    fn save(&self, user: &User) -> StoreResult<()> {
        self.check()?;
        self.inner.save(user)
    }

    fn clear(&self) -> StoreResult<()> {
        self.check()?;
        self.inner.clear()
    }
}

pub(crate) fn volunteer() -> User {
    User {
        id: 1,
        email: "a@b.com".into(),
        name: "Old".into(),
        role: Role::Volunteer,
        profile_picture: None,
        phone: None,
        volunteer: VolunteerProfile {
            available_hours: Some(5),
            ..VolunteerProfile::default()
        },
        organization: OrganizationProfile::default(),
    }
}

pub(crate) fn organization_admin() -> User {
    User {
        id: 2,
        email: "test@org.com".into(),
        name: "Test Org".into(),
        role: Role::OrganizationAdmin,
        profile_picture: None,
        phone: Some("1234567890".into()),
        volunteer: VolunteerProfile::default(),
        organization: OrganizationProfile {
            address: Some("123 Main St".into()),
            description: Some("A great organization".into()),
            website_url: None,
        },
    }
}

pub(crate) fn volunteer_record() -> UserRecord {
    UserRecord {
        id: 1,
        email: "a@b.com".into(),
        name: "Old".into(),
        available_hours: Some(5),
        ..UserRecord::default()
    }
}

pub(crate) fn api_error(status: u16) -> ClientError {
    ClientError::api_error(status, "UNKNOWN".into(), "nope".into())
}
