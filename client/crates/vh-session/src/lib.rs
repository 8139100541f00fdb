//! Client-side session for Volunteer Hub.
//!
//! [`SessionManager`] owns the signed-in identity, mirrors it into a
//! [`SessionStore`] and talks to the backend through an [`AuthClient`].
//! [`ProfileEditor`] drives the edit-profile flow on top of both.

pub mod client;
pub mod editor;
pub mod manager;
pub mod store;

#[cfg(test)]
mod tests;

pub use client::{AuthClient, ClientError, ClientResult, HttpAuthClient, LoginRequest};
pub use editor::{
    EditorError, EditorResult, EditorState, OrganizationForm, OrganizationProfileEditor,
    OrganizationUpdate, ProfileEditor, ProfileForm, VolunteerForm, VolunteerProfileEditor,
    VolunteerUpdate,
};
pub use manager::{SessionError, SessionManager, SessionResult};
pub use store::{
    FileSessionStore, LoadResult, MemorySessionStore, SessionStore, StoreError, StoreResult,
};
