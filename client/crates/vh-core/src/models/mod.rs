pub mod organization_profile;
pub mod registration;
pub mod role;
pub mod session;
pub mod user;
pub mod user_record;
pub mod volunteer_profile;
