//! User record as returned by the backend login endpoints.

use crate::{OrganizationProfile, Role, User, VolunteerProfile};

use serde::Deserialize;

/// Raw account record from a login response.
///
/// The backend is inconsistent about key casing (`Bio_Data`, `bio_Data`,
/// `ID`, ...), so every field accepts the spellings seen on the wire.
/// Any role reported by the backend is ignored: the role is asserted by the
/// caller in [`UserRecord::into_user`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(alias = "ID", alias = "Id")]
    pub id: u64,
    #[serde(alias = "Email")]
    pub email: String,
    #[serde(alias = "Name", alias = "Full_Name", alias = "full_name")]
    pub name: String,
    #[serde(default, alias = "profile_picture", alias = "Profile_Picture")]
    pub profile_picture: Option<String>,
    #[serde(default, alias = "Phone")]
    pub phone: Option<String>,
    #[serde(default, alias = "Location")]
    pub location: Option<String>,
    #[serde(default, alias = "bio_Data", alias = "Bio_Data", alias = "bio_data")]
    pub bio: Option<String>,
    #[serde(
        default,
        alias = "category_List",
        alias = "Category_List",
        alias = "category_list"
    )]
    pub category_list: Option<Vec<String>>,
    #[serde(
        default,
        alias = "available_Hours",
        alias = "Available_Hours",
        alias = "Availabile_Hours",
        alias = "available_hours"
    )]
    pub available_hours: Option<u32>,
    #[serde(default, alias = "Address")]
    pub address: Option<String>,
    #[serde(default, alias = "Description")]
    pub description: Option<String>,
    #[serde(
        default,
        alias = "website_Url",
        alias = "Website_Url",
        alias = "website_url"
    )]
    pub website_url: Option<String>,
}

impl UserRecord {
    /// Tag the record with `role`, keeping only the attributes that role owns.
    ///
    /// Organizations store their street address under `Location` on the
    /// backend, so for organization admins `location` fills `address` when no
    /// explicit address is present.
    pub fn into_user(self, role: Role) -> User {
        let (volunteer, organization) = match role {
            Role::Volunteer => (
                VolunteerProfile {
                    bio: self.bio,
                    category_list: self.category_list,
                    location: self.location,
                    available_hours: self.available_hours,
                },
                OrganizationProfile::default(),
            ),
            Role::OrganizationAdmin => (
                VolunteerProfile::default(),
                OrganizationProfile {
                    address: self.address.or(self.location),
                    description: self.description,
                    website_url: self.website_url,
                },
            ),
        };

        User {
            id: self.id,
            email: self.email,
            name: self.name,
            role,
            profile_picture: self.profile_picture,
            phone: self.phone,
            volunteer,
            organization,
        }
    }
}
