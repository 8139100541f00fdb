use crate::Session;
use crate::tests::models::volunteer;

#[test]
fn test_default_session_is_loading_and_anonymous() {
    let session = Session::default();
    assert!(session.is_loading());
    assert!(!session.is_authenticated());
    assert!(session.user().is_none());
}

#[test]
fn test_is_authenticated_follows_user() {
    let session = Session::new(Some(volunteer()), false);
    assert!(session.is_authenticated());

    let session = Session::new(None, false);
    assert!(!session.is_authenticated());
}

#[test]
fn test_session_serializes_camel_case() {
    let value = serde_json::to_value(Session::new(Some(volunteer()), false)).unwrap();
    assert_eq!(value["isAuthenticated"], true);
    assert_eq!(value["isLoading"], false);
    assert_eq!(value["user"]["email"], "a@b.com");
}
