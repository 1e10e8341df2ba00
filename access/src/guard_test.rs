use super::*;
use crate::identity::Identity;
use crate::role::Role;

const PATHS: [&str; 4] = ["/dashboard", "/dashboard/grievances", "/dashboard/bus-tracking", "/anything/else"];

fn logged_in(role: Role) -> Session {
    Session::Resolved(Some(Identity::new("u1", "User", "u@campus.edu", role)))
}

// =============================================================================
// guard
// =============================================================================

#[test]
fn unresolved_always_loads() {
    for path in PATHS {
        assert_eq!(guard(&Session::Unresolved, path), RouteDecision::Loading);
    }
}

#[test]
fn resolved_without_identity_redirects_to_login() {
    for path in PATHS {
        assert_eq!(guard(&Session::Resolved(None), path), RouteDecision::Redirect(LOGIN_PATH));
    }
}

#[test]
fn resolved_with_identity_renders_requested_path() {
    for role in Role::ALL {
        for path in PATHS {
            assert_eq!(guard(&logged_in(role), path), RouteDecision::Render(path.to_owned()));
        }
    }
}

#[test]
fn guard_is_reproducible() {
    let session = logged_in(Role::Club);
    assert_eq!(guard(&session, "/dashboard/events"), guard(&session, "/dashboard/events"));
}

// =============================================================================
// dispatch_root
// =============================================================================

#[test]
fn root_unresolved_loads() {
    assert_eq!(dispatch_root(&Session::Unresolved), RootDecision::Loading);
}

#[test]
fn root_anonymous_goes_to_login() {
    assert_eq!(dispatch_root(&Session::Resolved(None)), RootDecision::Redirect("/login"));
}

#[test]
fn root_authenticated_goes_to_dashboard() {
    for role in Role::ALL {
        assert_eq!(dispatch_root(&logged_in(role)), RootDecision::Redirect("/dashboard"));
    }
}

// =============================================================================
// authorize
// =============================================================================

#[test]
fn authorize_follows_role_capabilities() {
    assert_eq!(authorize(&logged_in(Role::Admin), Section::Analytics), SectionAccess::Granted);
    assert_eq!(authorize(&logged_in(Role::Student), Section::Analytics), SectionAccess::Denied);
    assert_eq!(authorize(&logged_in(Role::Club), Section::Events), SectionAccess::Granted);
}

#[test]
fn authorize_denies_without_identity() {
    assert_eq!(authorize(&Session::Unresolved, Section::Overview), SectionAccess::Denied);
    assert_eq!(authorize(&Session::Resolved(None), Section::Overview), SectionAccess::Denied);
}
