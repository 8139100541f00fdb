use crate::tests::models::{organization_admin, volunteer};
use crate::User;

#[test]
fn given_volunteer_when_serialize_roundtrip_then_identical() {
    let original = volunteer();

    let json = serde_json::to_string(&original).unwrap();
    let restored: User = serde_json::from_str(&json).unwrap();

    assert_eq!(original, restored);
}

#[test]
fn given_organization_admin_when_serialize_roundtrip_then_identical() {
    let original = organization_admin();

    let json = serde_json::to_string(&original).unwrap();
    let restored: User = serde_json::from_str(&json).unwrap();

    assert_eq!(original, restored);
}

#[test]
fn given_volunteer_when_serialize_then_flat_camel_case_keys() {
    let value = serde_json::to_value(volunteer()).unwrap();

    assert_eq!(value["userRole"], "VOLUNTEER");
    assert_eq!(value["availableHours"], 5);
    assert_eq!(value["categoryList"][1], "Event Planning");
    assert_eq!(value["bio"], "Likes trees");
    assert!(value.get("address").is_none());
    assert!(value.get("volunteer").is_none());
}

#[test]
fn given_volunteer_when_organization_profile_then_none() {
    let user = volunteer();

    assert!(user.volunteer_profile().is_some());
    assert!(user.organization_profile().is_none());
    assert!(user.is_volunteer());
}

#[test]
fn given_organization_admin_with_stray_volunteer_fields_when_volunteer_profile_then_none() {
    let json = r#"{"id":1,"email":"o@x.org","name":"Org","userRole":"ORGANIZATION_ADMIN","availableHours":3}"#;
    let user: User = serde_json::from_str(json).unwrap();

    assert!(user.volunteer_profile().is_none());
    assert_eq!(user.organization_profile().unwrap().address, None);
    assert!(user.is_organization_admin());
}

#[test]
fn given_missing_role_when_deserialize_then_error() {
    let json = r#"{"id":1,"email":"o@x.org","name":"Org"}"#;
    assert!(serde_json::from_str::<User>(json).is_err());
}
