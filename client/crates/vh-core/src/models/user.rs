//! Authenticated identity - the record the session holds and persists.

use crate::{OrganizationProfile, Role, VolunteerProfile};

use serde::{Deserialize, Serialize};

/// Identity of the signed-in actor, tagged with its role.
///
/// Both role profiles are flattened into one JSON object so the persisted
/// record stays a single flat map. Only the profile matching `role` is ever
/// read back through [`User::volunteer_profile`] / [`User::organization_profile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend-assigned identifier, never changed client-side
    pub id: u64,
    /// External key used to address update calls
    pub email: String,
    pub name: String,
    #[serde(rename = "userRole")]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(flatten)]
    pub volunteer: VolunteerProfile,
    #[serde(flatten)]
    pub organization: OrganizationProfile,
}

impl User {
    /// Volunteer attributes, or `None` when the user is not a volunteer.
    pub fn volunteer_profile(&self) -> Option<&VolunteerProfile> {
        match self.role {
            Role::Volunteer => Some(&self.volunteer),
            Role::OrganizationAdmin => None,
        }
    }

    /// Organization attributes, or `None` when the user is not an organization admin.
    pub fn organization_profile(&self) -> Option<&OrganizationProfile> {
        match self.role {
            Role::OrganizationAdmin => Some(&self.organization),
            Role::Volunteer => None,
        }
    }

    pub fn is_volunteer(&self) -> bool {
        self.role == Role::Volunteer
    }

    pub fn is_organization_admin(&self) -> bool {
        self.role == Role::OrganizationAdmin
    }
}
