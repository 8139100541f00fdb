use serde::Serialize;
use vh_core::{Role, User};

/// Role-specific editable copy of a profile.
///
/// A form is a detached snapshot: edits stay local until the editor submits.
pub trait ProfileForm: Clone + Send + Sync {
    /// Backend-shaped update body, with the backend's key names.
    type Update: Serialize;

    /// Role whose profiles this form edits.
    const ROLE: Role;

    /// Pre-fill every editable field from `user`.
    fn from_user(user: &User) -> Self;

    fn to_update(&self) -> Self::Update;

    /// `user` with the editable fields replaced by this form's values.
    ///
    /// Identifier, email and role are never touched.
    fn apply_to(&self, user: &User) -> User;
}
