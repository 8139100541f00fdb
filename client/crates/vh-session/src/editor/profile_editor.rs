use crate::{
    AuthClient, EditorError, EditorResult, EditorState, OrganizationForm, ProfileForm,
    SessionManager, VolunteerForm,
};

use std::sync::Arc;

use log::{info, warn};
use vh_core::User;

pub type VolunteerProfileEditor = ProfileEditor<VolunteerForm>;
pub type OrganizationProfileEditor = ProfileEditor<OrganizationForm>;

/// Edit-profile flow for one role.
///
/// Opening copies the signed-in user into a local form. Submitting sends the
/// form to the backend, addressed by the user's email, and only on success
/// replaces the session user with the merged record.
pub struct ProfileEditor<F: ProfileForm> {
    session: SessionManager,
    client: Arc<dyn AuthClient>,
    state: EditorState<F>,
}

impl<F: ProfileForm> ProfileEditor<F> {
    pub fn new(session: SessionManager, client: Arc<dyn AuthClient>) -> Self {
        Self {
            session,
            client,
            state: EditorState::Closed,
        }
    }

    pub fn state(&self) -> &EditorState<F> {
        &self.state
    }

    /// Form being edited, while open.
    pub fn form(&self) -> Option<&F> {
        match &self.state {
            EditorState::Open { form, .. } => Some(form),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut F> {
        match &mut self.state {
            EditorState::Open { form, .. } => Some(form),
            _ => None,
        }
    }

    /// Message of the last failed submission, while open.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            EditorState::Open { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    /// Open the editor pre-filled from the signed-in user.
    ///
    /// Opening an editor that is already open keeps the pending edits, as
    /// does reopening after a submission whose future was dropped.
    pub async fn open(&mut self) -> EditorResult<&mut F> {
        self.recover_abandoned_submit();

        if !self.state.is_open() {
            let user = self
                .session
                .current_user()
                .await
                .ok_or_else(|| EditorError::not_authenticated())?;

            if user.role != F::ROLE {
                return Err(EditorError::role_mismatch(F::ROLE, user.role));
            }

            self.state = EditorState::Open {
                form: F::from_user(&user),
                error: None,
            };
        }

        self.form_mut().ok_or_else(|| EditorError::not_open())
    }

    /// Discard pending edits.
    pub fn cancel(&mut self) {
        self.state = EditorState::Closed;
    }

    /// Send the form and, on success, fold it into the session.
    ///
    /// On failure the editor returns to `Open` with the same field values and
    /// the error message, and the session is left as it was.
    pub async fn submit(&mut self) -> EditorResult<User> {
        self.recover_abandoned_submit();

        let form = match std::mem::replace(&mut self.state, EditorState::Closed) {
            EditorState::Open { form, .. } => form,
            other => {
                self.state = other;
                return Err(EditorError::not_open());
            }
        };

        self.state = EditorState::Submitting { form: form.clone() };

        match self.send(&form).await {
            Ok(user) => {
                self.state = EditorState::Closed;
                Ok(user)
            }
            Err(e) => {
                warn!("Profile update failed: {e}");
                self.state = EditorState::Open {
                    form,
                    error: Some(e.to_string()),
                };
                Err(e)
            }
        }
    }

    /// `Submitting` only survives a call to `submit` when its future was
    /// dropped mid-request; hand the form back for editing.
    fn recover_abandoned_submit(&mut self) {
        if let EditorState::Submitting { form } = &self.state {
            warn!("Previous profile submission was abandoned");
            self.state = EditorState::Open {
                form: form.clone(),
                error: None,
            };
        }
    }

    async fn send(&self, form: &F) -> EditorResult<User> {
        let current = self
            .session
            .current_user()
            .await
            .ok_or_else(|| EditorError::not_authenticated())?;

        if current.role != F::ROLE {
            return Err(EditorError::role_mismatch(F::ROLE, current.role));
        }

        let payload = serde_json::to_value(form.to_update())?;

        self.client
            .update_profile(F::ROLE, &current.email, &payload)
            .await
            .map_err(|e| EditorError::update(e))?;

        let merged = form.apply_to(&current);
        self.session
            .update_user(merged.clone())
            .await
            .map_err(|e| EditorError::session(e))?;

        info!("Updated {} profile for {}", F::ROLE, merged.email);
        Ok(merged)
    }
}
