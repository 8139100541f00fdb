use crate::{Role, UserRecord};

#[test]
fn given_backend_casing_when_deserialize_then_aliases_resolve() {
    let json = r#"{
        "ID": 3,
        "Email": "v@x.com",
        "Name": "Vol",
        "Phone": "111",
        "Location": "Town",
        "Bio_Data": "bio",
        "Category_List": ["Teaching"],
        "Availabile_Hours": 12
    }"#;

    let record: UserRecord = serde_json::from_str(json).unwrap();

    assert_eq!(record.id, 3);
    assert_eq!(record.email, "v@x.com");
    assert_eq!(record.bio.as_deref(), Some("bio"));
    assert_eq!(record.category_list, Some(vec!["Teaching".to_string()]));
    assert_eq!(record.available_hours, Some(12));
}

#[test]
fn given_frontend_casing_when_deserialize_then_aliases_resolve() {
    let json = r#"{"id":4,"email":"v@x.com","name":"Vol","bio_Data":"b","category_List":[],"available_Hours":2}"#;

    let record: UserRecord = serde_json::from_str(json).unwrap();

    assert_eq!(record.bio.as_deref(), Some("b"));
    assert_eq!(record.available_hours, Some(2));
}

#[test]
fn given_volunteer_role_when_into_user_then_only_volunteer_fields_kept() {
    let record = UserRecord {
        id: 1,
        email: "v@x.com".into(),
        name: "Vol".into(),
        location: Some("Town".into()),
        available_hours: Some(4),
        description: Some("ignored".into()),
        ..UserRecord::default()
    };

    let user = record.into_user(Role::Volunteer);

    assert_eq!(user.role, Role::Volunteer);
    assert_eq!(user.volunteer.location.as_deref(), Some("Town"));
    assert_eq!(user.volunteer.available_hours, Some(4));
    assert_eq!(user.organization.description, None);
}

#[test]
fn given_organization_role_when_into_user_then_location_becomes_address() {
    let record = UserRecord {
        id: 2,
        email: "o@x.org".into(),
        name: "Org".into(),
        location: Some("123 Main St".into()),
        description: Some("desc".into()),
        available_hours: Some(9),
        ..UserRecord::default()
    };

    let user = record.into_user(Role::OrganizationAdmin);

    assert_eq!(user.role, Role::OrganizationAdmin);
    assert_eq!(user.organization.address.as_deref(), Some("123 Main St"));
    assert_eq!(user.organization.description.as_deref(), Some("desc"));
    assert_eq!(user.volunteer.available_hours, None);
}

#[test]
fn given_backend_role_field_when_into_user_then_requested_role_wins() {
    let json = r#"{"id":5,"email":"x@y.z","name":"X","role":"VOLUNTEER"}"#;
    let record: UserRecord = serde_json::from_str(json).unwrap();

    let user = record.into_user(Role::OrganizationAdmin);

    assert_eq!(user.role, Role::OrganizationAdmin);
}
