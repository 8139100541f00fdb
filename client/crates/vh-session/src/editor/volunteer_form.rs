use crate::ProfileForm;

use serde::Serialize;
use vh_core::{Role, User};

/// Editable volunteer fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VolunteerForm {
    pub name: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub available_hours: Option<u32>,
    pub category_list: Option<Vec<String>>,
}

/// Body of `PUT /volunteers/update/{email}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VolunteerUpdate {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Phone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "Location", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "Bio_Data", skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(rename = "Available_Hours", skip_serializing_if = "Option::is_none")]
    pub available_hours: Option<u32>,
    #[serde(rename = "Category_List", skip_serializing_if = "Option::is_none")]
    pub category_list: Option<Vec<String>>,
}

impl ProfileForm for VolunteerForm {
    type Update = VolunteerUpdate;

    const ROLE: Role = Role::Volunteer;

    fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            phone: user.phone.clone(),
            location: user.volunteer.location.clone(),
            bio: user.volunteer.bio.clone(),
            available_hours: user.volunteer.available_hours,
            category_list: user.volunteer.category_list.clone(),
        }
    }

    fn to_update(&self) -> VolunteerUpdate {
        VolunteerUpdate {
            name: self.name.clone(),
            phone: self.phone.clone(),
            location: self.location.clone(),
            bio: self.bio.clone(),
            available_hours: self.available_hours,
            category_list: self.category_list.clone(),
        }
    }

    fn apply_to(&self, user: &User) -> User {
        let mut merged = user.clone();
        merged.name = self.name.clone();
        merged.phone = self.phone.clone();
        merged.volunteer.location = self.location.clone();
        merged.volunteer.bio = self.bio.clone();
        merged.volunteer.available_hours = self.available_hours;
        merged.volunteer.category_list = self.category_list.clone();
        merged
    }
}
