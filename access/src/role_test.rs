use super::*;

// =============================================================================
// Role parsing
// =============================================================================

#[test]
fn role_parses_every_known_variant() {
    for role in Role::ALL {
        assert_eq!(role.as_str().parse::<Role>(), Ok(role));
    }
}

#[test]
fn role_parse_rejects_unknown() {
    assert_eq!("superadmin".parse::<Role>(), Err(AccessError::InvalidRole("superadmin".to_owned())));
}

#[test]
fn role_parse_is_case_sensitive() {
    assert!("Student".parse::<Role>().is_err());
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Professor).unwrap(), "\"professor\"");
}

#[test]
fn role_display_matches_wire_string() {
    assert_eq!(Role::Club.to_string(), "club");
}

// =============================================================================
// Capabilities
// =============================================================================

#[test]
fn every_role_reaches_overview() {
    for role in Role::ALL {
        assert!(role.capabilities().allows(Section::Overview), "{role} lacks overview");
    }
}

#[test]
fn only_admin_reaches_analytics() {
    for role in Role::ALL {
        assert_eq!(role.capabilities().allows(Section::Analytics), role == Role::Admin);
    }
}

#[test]
fn admin_reaches_every_section() {
    let caps = Role::Admin.capabilities();
    assert!(Section::ALL.iter().all(|s| caps.allows(*s)));
}

#[test]
fn club_cannot_file_grievances() {
    let caps = Role::Club.capabilities();
    assert!(!caps.allows(Section::Grievances));
    assert!(caps.allows(Section::Events));
}

#[test]
fn capabilities_are_stable_across_calls() {
    for role in Role::ALL {
        assert_eq!(role.capabilities(), role.capabilities());
    }
}

#[test]
fn capabilities_keep_sidebar_order() {
    for role in Role::ALL {
        let sections = role.capabilities().sections();
        let positions: Vec<usize> =
            sections.iter().map(|s| Section::ALL.iter().position(|x| x == s).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{role} out of order");
    }
}

#[test]
fn capabilities_of_known_role() {
    let caps = capabilities_of("student").unwrap();
    assert_eq!(caps.role(), Role::Student);
}

#[test]
fn capabilities_of_unknown_role_fails() {
    assert_eq!(capabilities_of("janitor"), Err(AccessError::UnknownRole("janitor".to_owned())));
}

// =============================================================================
// Section paths
// =============================================================================

#[test]
fn overview_lives_at_dashboard_root() {
    assert_eq!(Section::Overview.path(), "/dashboard");
}

#[test]
fn section_path_uses_slug() {
    assert_eq!(Section::LostAndFound.path(), "/dashboard/lost-found");
}

#[test]
fn from_path_resolves_every_section() {
    for section in Section::ALL {
        assert_eq!(Section::from_path(&section.path()), Some(section));
    }
}

#[test]
fn from_path_ignores_trailing_slash_and_query() {
    assert_eq!(Section::from_path("/dashboard/grievances/"), Some(Section::Grievances));
    assert_eq!(Section::from_path("/dashboard/events?page=2"), Some(Section::Events));
    assert_eq!(Section::from_path("/dashboard/"), Some(Section::Overview));
}

#[test]
fn from_path_rejects_foreign_paths() {
    assert_eq!(Section::from_path("/login"), None);
    assert_eq!(Section::from_path("/dashboardx"), None);
    assert_eq!(Section::from_path("/dashboard/unknown"), None);
    assert_eq!(Section::from_path("/dashboard/events/42"), None);
}
