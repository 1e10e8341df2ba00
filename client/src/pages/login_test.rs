use access::Identity;

use super::*;

#[test]
fn validate_sign_in_input_trims_email() {
    assert_eq!(
        validate_sign_in_input("  asha@campus.edu ", "secret"),
        Ok(("asha@campus.edu".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_sign_in_input_requires_both_fields() {
    assert_eq!(validate_sign_in_input("   ", "secret"), Err("Enter both email and password."));
    assert_eq!(validate_sign_in_input("asha@campus.edu", ""), Err("Enter both email and password."));
}

#[test]
fn validate_sign_in_input_requires_at_sign() {
    assert_eq!(validate_sign_in_input("asha", "secret"), Err("Enter a valid email address."));
}

#[test]
fn every_demo_claim_is_a_valid_identity() {
    for role in Role::ALL {
        let identity = Identity::try_from(demo_claim(role)).unwrap();
        assert_eq!(identity.role, role);
        assert_eq!(identity.id, format!("demo-{role}"));
    }
}

#[test]
fn demo_claims_carry_role_specific_fields() {
    let student = demo_claim(Role::Student);
    assert!(student.profile.contains_key("rollNo"));
    let club = demo_claim(Role::Club);
    assert_eq!(club.profile.get("position").and_then(|v| v.as_str()), Some("Coordinator"));
    assert!(demo_claim(Role::Admin).profile.is_empty());
}

#[test]
fn invalid_role_message_names_the_role() {
    let msg = login_error_message(&AccessError::InvalidRole("superadmin".to_owned()));
    assert_eq!(msg, "This account has an unsupported role (superadmin).");
}

#[test]
fn unauthorized_sign_in_has_friendly_message() {
    assert_eq!(sign_in_error_message(&ApiError::Status(401)), "Invalid email or password.");
    assert_eq!(sign_in_error_message(&ApiError::Status(500)), "Sign-in failed: request failed with status 500");
}
