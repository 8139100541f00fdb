use crate::{AuthClient, LoginRequest, SessionError, SessionResult, SessionStore};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use log::{debug, info, warn};
use tokio::sync::{RwLock, watch};
use vh_core::{OrganizationRegistration, Role, Session, User, VolunteerRegistration};

/// Owner of the signed-in identity.
///
/// Cloning is cheap and every clone shares the same session, so one manager
/// can be built at startup and handed to every consumer.
///
/// Every mutation writes the store first and memory second while holding the
/// session write lock, so once an operation settles the in-memory user and the
/// persisted record agree. Operations that overlap are not sequenced: the last
/// one to commit wins.
#[derive(Clone)]
pub struct SessionManager {
    user: Arc<RwLock<Option<User>>>,
    activity: Arc<Activity>,
    client: Arc<dyn AuthClient>,
    store: Arc<dyn SessionStore>,
    updates: Arc<watch::Sender<Session>>,
}

/// Loading state, kept outside the user lock so it can be released from `Drop`.
#[derive(Debug)]
struct Activity {
    /// Startup restore has not completed yet
    restoring: AtomicBool,
    /// Remote operations currently awaiting the backend
    in_flight: AtomicUsize,
}

impl Activity {
    fn is_loading(&self) -> bool {
        self.restoring.load(Ordering::SeqCst) || self.in_flight.load(Ordering::SeqCst) > 0
    }
}

/// Marks one remote operation as in flight until dropped.
///
/// Dropping also covers callers that abandon the operation's future, so the
/// loading flag cannot outlive the call.
struct OperationGuard {
    activity: Arc<Activity>,
    updates: Arc<watch::Sender<Session>>,
}

impl OperationGuard {
    fn begin(activity: &Arc<Activity>, updates: &Arc<watch::Sender<Session>>) -> Self {
        activity.in_flight.fetch_add(1, Ordering::SeqCst);
        refresh_loading(activity, updates);

        Self {
            activity: activity.clone(),
            updates: updates.clone(),
        }
    }
}

impl Drop for OperationGuard {
    fn drop(&mut self) {
        self.activity.in_flight.fetch_sub(1, Ordering::SeqCst);
        refresh_loading(&self.activity, &self.updates);
    }
}

/// Republish the last session with the current loading flag.
///
/// The flag is read inside the channel lock so the final publish always sees
/// the latest counter.
fn refresh_loading(activity: &Activity, updates: &watch::Sender<Session>) {
    updates.send_modify(|session| {
        *session = Session::new(session.user().cloned(), activity.is_loading());
    });
}

impl SessionManager {
    /// Manager in its startup state: no user, loading until [`restore`](Self::restore) runs.
    pub fn new(client: Arc<dyn AuthClient>, store: Arc<dyn SessionStore>) -> Self {
        let (updates, _) = watch::channel(Session::default());

        Self {
            user: Arc::new(RwLock::new(None)),
            activity: Arc::new(Activity {
                restoring: AtomicBool::new(true),
                in_flight: AtomicUsize::new(0),
            }),
            client,
            store,
            updates: Arc::new(updates),
        }
    }

    /// Build a manager and rehydrate it from the store.
    pub async fn start(client: Arc<dyn AuthClient>, store: Arc<dyn SessionStore>) -> Self {
        let manager = Self::new(client, store);
        manager.restore().await;
        manager
    }

    /// Adopt the persisted record, if any, and leave the startup phase.
    ///
    /// Never fails: a missing, corrupted or unreadable record all mean "no
    /// session". Only the first call has an effect.
    pub async fn restore(&self) {
        let mut user = self.user.write().await;

        if !self.activity.restoring.load(Ordering::SeqCst) {
            debug!("Session already restored");
            return;
        }

        match self.store.load() {
            Ok(loaded) => {
                if let Some(message) = loaded.corruption_error {
                    warn!("Ignoring corrupted session record: {message}");
                }
                *user = loaded.user;
            }
            Err(e) => warn!("Could not read persisted session: {e}"),
        }

        self.activity.restoring.store(false, Ordering::SeqCst);

        match user.as_ref() {
            Some(user) => info!("Session restored for {} ({})", user.email, user.role),
            None => info!("No persisted session"),
        }

        self.publish(&user);
    }

    /// Current session state.
    pub async fn snapshot(&self) -> Session {
        let user = self.user.read().await;
        Session::new(user.clone(), self.activity.is_loading())
    }

    /// Signed-in user, if any.
    pub async fn current_user(&self) -> Option<User> {
        self.user.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.user.read().await.is_some()
    }

    /// Receiver that observes every settled session state, including logout.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.updates.subscribe()
    }

    /// Authenticate as `role` and make the returned account the session user.
    ///
    /// The role tag comes from this call, not from the backend response.
    pub async fn login(&self, email: &str, password: &str, role: Role) -> SessionResult<User> {
        let _operation = self.begin_operation();
        self.login_inner(email, password, role).await
    }

    /// Create a volunteer account, then sign in with the same credentials.
    pub async fn register_volunteer(
        &self,
        registration: &VolunteerRegistration,
    ) -> SessionResult<User> {
        let operation = self.begin_operation();
        let result = match self.client.register_volunteer(registration).await {
            Ok(()) => {
                info!("Registered volunteer {}", registration.email);
                self.login_inner(&registration.email, &registration.password, Role::Volunteer)
                    .await
            }
            Err(e) => Err(SessionError::registration(Role::Volunteer, e)),
        };
        drop(operation);

        if let Err(e) = &result {
            warn!("Volunteer registration aborted: {e}");
        }
        result
    }

    /// Create an organization account, then sign in with the same credentials.
    pub async fn register_organization(
        &self,
        registration: &OrganizationRegistration,
    ) -> SessionResult<User> {
        let operation = self.begin_operation();
        let result = match self.client.register_organization(registration).await {
            Ok(()) => {
                info!("Registered organization {}", registration.email);
                self.login_inner(
                    &registration.email,
                    &registration.password,
                    Role::OrganizationAdmin,
                )
                .await
            }
            Err(e) => Err(SessionError::registration(Role::OrganizationAdmin, e)),
        };
        drop(operation);

        if let Err(e) = &result {
            warn!("Organization registration aborted: {e}");
        }
        result
    }

    /// Replace the session user and the persisted record with `user`.
    ///
    /// No merging and no validation: the caller supplies the complete record.
    pub async fn update_user(&self, user: User) -> SessionResult<()> {
        debug!("Updating session user {}", user.email);
        self.commit(user).await
    }

    /// Forget the session user and remove the persisted record.
    pub async fn logout(&self) -> SessionResult<()> {
        let mut user = self.user.write().await;

        self.store.clear()?;

        if let Some(previous) = user.take() {
            info!("Logged out {}", previous.email);
        }

        self.publish(&user);
        Ok(())
    }

    async fn login_inner(&self, email: &str, password: &str, role: Role) -> SessionResult<User> {
        let request = LoginRequest::new(email, password, role);

        let record = match self.client.login(&request).await {
            Ok(record) => record,
            Err(e) => {
                warn!("Login failed for {email} as {role}: {e}");
                return Err(SessionError::login(role, e));
            }
        };

        let user = record.into_user(role);
        self.commit(user.clone()).await?;

        info!("Session started for {} ({})", user.email, user.role);
        Ok(user)
    }

    /// Persist, then adopt, `user`. A failed store write leaves both untouched.
    async fn commit(&self, user: User) -> SessionResult<()> {
        let mut current = self.user.write().await;

        self.store.save(&user)?;
        *current = Some(user);

        self.publish(&current);
        Ok(())
    }

    fn begin_operation(&self) -> OperationGuard {
        OperationGuard::begin(&self.activity, &self.updates)
    }

    /// Publish `user` with the current loading flag.
    fn publish(&self, user: &Option<User>) {
        let activity = &self.activity;
        self.updates.send_modify(|session| {
            *session = Session::new(user.clone(), activity.is_loading());
        });
    }
}
