use crate::{OrganizationRegistration, Role, VolunteerRegistration};

#[test]
fn given_volunteer_registration_when_serialize_then_backend_keys_and_role_tag() {
    let mut registration = VolunteerRegistration::new("v@x.com", "secret", "Vol");
    registration.bio = Some("bio".into());
    registration.category_list = vec!["Teaching".into()];
    registration.available_hours = 6;

    let value = serde_json::to_value(&registration).unwrap();

    assert_eq!(value["Email"], "v@x.com");
    assert_eq!(value["Password"], "secret");
    assert_eq!(value["Bio_Data"], "bio");
    assert_eq!(value["Available_Hours"], 6);
    assert_eq!(value["Category_List"][0], "Teaching");
    assert_eq!(value["userRole"], "VOLUNTEER");
    assert!(value.get("Description").is_none());
    assert_eq!(registration.role(), Role::Volunteer);
}

#[test]
fn given_organization_registration_when_serialize_then_no_volunteer_keys() {
    let mut registration = OrganizationRegistration::new("o@x.org", "secret", "Org");
    registration.address = Some("1 Road".into());

    let value = serde_json::to_value(&registration).unwrap();

    assert_eq!(value["Location"], "1 Road");
    assert_eq!(value["userRole"], "ORGANIZATION_ADMIN");
    assert!(value.get("Bio_Data").is_none());
    assert!(value.get("Available_Hours").is_none());
    assert!(value.get("Category_List").is_none());
}

#[test]
fn given_registration_when_debug_then_password_not_printed() {
    let registration = VolunteerRegistration::new("v@x.com", "hunter2", "Vol");
    assert!(!format!("{registration:?}").contains("hunter2"));

    let registration = OrganizationRegistration::new("o@x.org", "hunter2", "Org");
    assert!(!format!("{registration:?}").contains("hunter2"));
}
