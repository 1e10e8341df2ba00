//! Role model and per-role portal capabilities.
//!
//! DESIGN
//! ======
//! Roles form a closed enum, so the role -> capability mapping is a total
//! `match` checked by the compiler. The only fallible entry point is
//! [`capabilities_of`], which accepts raw strings from outside the type system.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AccessError;

// =============================================================================
// ROLE
// =============================================================================

/// One of the four account categories a portal user can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Professor,
    Club,
    Admin,
}

impl Role {
    /// Every role, in display order.
    pub const ALL: [Role; 4] = [Role::Student, Role::Professor, Role::Club, Role::Admin];

    /// Wire representation (`"student"`, `"professor"`, `"club"`, `"admin"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Professor => "professor",
            Self::Club => "club",
            Self::Admin => "admin",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Professor => "Professor",
            Self::Club => "Club",
            Self::Admin => "Administrator",
        }
    }

    /// Portal sections reachable by this role.
    #[must_use]
    pub fn capabilities(self) -> Capabilities {
        use Section::{Academics, Announcements, BusTracking, Events, Grievances, Internships, LostAndFound, Overview};

        let sections: &'static [Section] = match self {
            Self::Student => {
                &[Overview, Grievances, Internships, LostAndFound, Academics, Events, Announcements, BusTracking]
            }
            Self::Professor => &[Overview, Grievances, Internships, Academics, Events, Announcements, BusTracking],
            Self::Club => &[Overview, LostAndFound, Events, Announcements, BusTracking],
            Self::Admin => &Section::ALL,
        };
        Capabilities { role: self, sections }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Self::Student),
            "professor" => Ok(Self::Professor),
            "club" => Ok(Self::Club),
            "admin" => Ok(Self::Admin),
            other => Err(AccessError::InvalidRole(other.to_owned())),
        }
    }
}

// =============================================================================
// SECTION
// =============================================================================

/// A top-level area of the portal dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Overview,
    Grievances,
    Internships,
    LostAndFound,
    Academics,
    Analytics,
    Events,
    Announcements,
    BusTracking,
}

impl Section {
    /// Every section, in sidebar order.
    pub const ALL: [Section; 9] = [
        Section::Overview,
        Section::Grievances,
        Section::Internships,
        Section::LostAndFound,
        Section::Academics,
        Section::Analytics,
        Section::Events,
        Section::Announcements,
        Section::BusTracking,
    ];

    /// URL slug under `/dashboard`. The overview lives at the dashboard root.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Overview => "",
            Self::Grievances => "grievances",
            Self::Internships => "internships",
            Self::LostAndFound => "lost-found",
            Self::Academics => "academics",
            Self::Analytics => "analytics",
            Self::Events => "events",
            Self::Announcements => "announcements",
            Self::BusTracking => "bus-tracking",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Grievances => "Grievances",
            Self::Internships => "Internships",
            Self::LostAndFound => "Lost & Found",
            Self::Academics => "Academics",
            Self::Analytics => "Analytics",
            Self::Events => "Events",
            Self::Announcements => "Announcements",
            Self::BusTracking => "Bus Tracking",
        }
    }

    /// Route path for this section (`/dashboard` or `/dashboard/<slug>`).
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Overview => "/dashboard".to_owned(),
            other => format!("/dashboard/{}", other.slug()),
        }
    }

    /// Resolve a slug (the segment after `/dashboard/`) to its section.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.slug() == slug)
    }

    /// Resolve a full route path to its section. Trailing slashes and query
    /// strings are ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let rest = path.trim_end_matches('/').strip_prefix("/dashboard")?;
        if rest.is_empty() {
            return Some(Self::Overview);
        }
        let slug = rest.strip_prefix('/')?;
        if slug.is_empty() || slug.contains('/') {
            return None;
        }
        Self::from_slug(slug).filter(|s| *s != Self::Overview)
    }
}

// =============================================================================
// CAPABILITIES
// =============================================================================

/// The fixed set of sections a role may reach.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    role: Role,
    sections: &'static [Section],
}

impl Capabilities {
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Sections in sidebar order.
    #[must_use]
    pub fn sections(&self) -> &'static [Section] {
        self.sections
    }

    #[must_use]
    pub fn allows(&self, section: Section) -> bool {
        self.sections.contains(&section)
    }
}

/// Look up capabilities for a raw role string.
///
/// # Errors
///
/// Returns [`AccessError::UnknownRole`] for anything outside the closed role
/// enum. Callers validate roles at login, so reaching this is a bug upstream;
/// it is logged at error level.
pub fn capabilities_of(raw: &str) -> Result<Capabilities, AccessError> {
    match raw.parse::<Role>() {
        Ok(role) => Ok(role.capabilities()),
        Err(_) => {
            tracing::error!(role = raw, "capability lookup for unknown role");
            Err(AccessError::UnknownRole(raw.to_owned()))
        }
    }
}
