pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::organization_profile::OrganizationProfile;
pub use models::registration::{OrganizationRegistration, VolunteerRegistration};
pub use models::role::Role;
pub use models::session::Session;
pub use models::user::User;
pub use models::user_record::UserRecord;
pub use models::volunteer_profile::VolunteerProfile;
