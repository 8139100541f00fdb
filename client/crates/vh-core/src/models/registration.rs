//! Account creation payloads.
//!
//! Keys follow the backend model (`Bio_Data`, `Category_List`, ...). The
//! `userRole` tag is filled in by the constructor and cannot disagree with the
//! payload type.

use crate::Role;

use serde::Serialize;

/// Sign-up data for a volunteer account
#[derive(Clone, Serialize)]
pub struct VolunteerRegistration {
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Password")]
    pub password: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Phone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "Location", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "Bio_Data", skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(rename = "Category_List")]
    pub category_list: Vec<String>,
    #[serde(rename = "Available_Hours")]
    pub available_hours: u32,
    #[serde(rename = "userRole")]
    role: Role,
}

impl VolunteerRegistration {
    pub fn new(email: impl Into<String>, password: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
            phone: None,
            location: None,
            bio: None,
            category_list: Vec::new(),
            available_hours: 0,
            role: Role::Volunteer,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

impl std::fmt::Debug for VolunteerRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VolunteerRegistration")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// Sign-up data for an organization administrator account
#[derive(Clone, Serialize)]
pub struct OrganizationRegistration {
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Password")]
    pub password: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Phone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Street address; the backend column is `Location`
    #[serde(rename = "Location", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Website_Url", skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(rename = "userRole")]
    role: Role,
}

impl OrganizationRegistration {
    pub fn new(email: impl Into<String>, password: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
            phone: None,
            address: None,
            description: None,
            website_url: None,
            role: Role::OrganizationAdmin,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

impl std::fmt::Debug for OrganizationRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrganizationRegistration")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}
