mod registration;
mod role;
mod session;
mod user;
mod user_record;

use crate::{OrganizationProfile, Role, User, VolunteerProfile};

pub(crate) fn volunteer() -> User {
    User {
        id: 7,
        email: "a@b.com".into(),
        name: "Old".into(),
        role: Role::Volunteer,
        profile_picture: None,
        phone: Some("1234567890".into()),
        volunteer: VolunteerProfile {
            bio: Some("Likes trees".into()),
            category_list: Some(vec!["Teaching".into(), "Event Planning".into()]),
            location: Some("Some City".into()),
            available_hours: Some(5),
        },
        organization: OrganizationProfile::default(),
    }
}

pub(crate) fn organization_admin() -> User {
    User {
        id: 9,
        email: "test@org.com".into(),
        name: "Test Org".into(),
        role: Role::OrganizationAdmin,
        profile_picture: Some("https://img.example/org.png".into()),
        phone: Some("555".into()),
        volunteer: VolunteerProfile::default(),
        organization: OrganizationProfile {
            address: Some("123 Main St".into()),
            description: Some("A great organization".into()),
            website_url: None,
        },
    }
}
