use crate::ProfileForm;

use serde::Serialize;
use vh_core::{Role, User};

/// Editable organization fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationForm {
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub website_url: Option<String>,
}

/// Body of `PUT /organizations/update/{email}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganizationUpdate {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Phone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// The backend keeps the street address in its `Location` column
    #[serde(rename = "Location", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Website_Url", skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
}

impl ProfileForm for OrganizationForm {
    type Update = OrganizationUpdate;

    const ROLE: Role = Role::OrganizationAdmin;

    fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            phone: user.phone.clone(),
            address: user.organization.address.clone(),
            description: user.organization.description.clone(),
            website_url: user.organization.website_url.clone(),
        }
    }

    fn to_update(&self) -> OrganizationUpdate {
        OrganizationUpdate {
            name: self.name.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            description: self.description.clone(),
            website_url: self.website_url.clone(),
        }
    }

    fn apply_to(&self, user: &User) -> User {
        let mut merged = user.clone();
        merged.name = self.name.clone();
        merged.phone = self.phone.clone();
        merged.organization.address = self.address.clone();
        merged.organization.description = self.description.clone();
        merged.organization.website_url = self.website_url.clone();
        merged
    }
}
