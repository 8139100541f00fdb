use crate::{CoreError, Role};

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Volunteer.as_str(), "VOLUNTEER");
    assert_eq!(Role::OrganizationAdmin.as_str(), "ORGANIZATION_ADMIN");
}

#[test]
fn test_role_from_str_accepts_wire_and_short_names() {
    assert_eq!(Role::from_str("VOLUNTEER").unwrap(), Role::Volunteer);
    assert_eq!(Role::from_str("volunteer").unwrap(), Role::Volunteer);
    assert_eq!(
        Role::from_str("ORGANIZATION_ADMIN").unwrap(),
        Role::OrganizationAdmin
    );
    assert_eq!(
        Role::from_str("organization").unwrap(),
        Role::OrganizationAdmin
    );
}

#[test]
fn test_role_from_str_invalid() {
    let err = Role::from_str("admin").unwrap_err();
    assert!(matches!(err, CoreError::InvalidRole { ref value, .. } if value == "admin"));
}

#[test]
fn test_role_serde_uses_wire_names() {
    assert_eq!(
        serde_json::to_string(&Role::OrganizationAdmin).unwrap(),
        "\"ORGANIZATION_ADMIN\""
    );
    let role: Role = serde_json::from_str("\"VOLUNTEER\"").unwrap();
    assert_eq!(role, Role::Volunteer);
}

#[test]
fn test_role_endpoint_segments() {
    assert_eq!(Role::Volunteer.login_segment(), "volunteer");
    assert_eq!(Role::OrganizationAdmin.login_segment(), "organization");
    assert_eq!(Role::Volunteer.collection(), "volunteers");
    assert_eq!(Role::OrganizationAdmin.collection(), "organizations");
}
