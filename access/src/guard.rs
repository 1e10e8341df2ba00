//! Navigation decisions derived from a session snapshot.
//!
//! Both [`guard`] and [`dispatch_root`] are pure: the same session and path
//! always produce the same decision.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::role::Section;
use crate::session::Session;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Outcome of evaluating a protected route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session still resolving; show a placeholder.
    Loading,
    /// Navigate elsewhere.
    Redirect(&'static str),
    /// Mount the page registered for this path.
    Render(String),
}

/// Outcome of evaluating the landing path. It always delegates elsewhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootDecision {
    Loading,
    Redirect(&'static str),
}

/// Decide what to do with a navigation to the protected `path`.
#[must_use]
pub fn guard(session: &Session, path: &str) -> RouteDecision {
    match session {
        Session::Unresolved => RouteDecision::Loading,
        Session::Resolved(None) => RouteDecision::Redirect(LOGIN_PATH),
        Session::Resolved(Some(_)) => RouteDecision::Render(path.to_owned()),
    }
}

/// Decide where the landing path sends the user.
#[must_use]
pub fn dispatch_root(session: &Session) -> RootDecision {
    match session {
        Session::Unresolved => RootDecision::Loading,
        Session::Resolved(None) => RootDecision::Redirect(LOGIN_PATH),
        Session::Resolved(Some(_)) => RootDecision::Redirect(DASHBOARD_PATH),
    }
}

/// Whether a rendered page may show a given portal section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionAccess {
    Granted,
    Denied,
}

/// Role check applied by section pages after [`guard`] has rendered them.
/// Without an identity there is nothing to grant.
#[must_use]
pub fn authorize(session: &Session, section: Section) -> SectionAccess {
    match session.identity() {
        Some(identity) if identity.role.capabilities().allows(section) => SectionAccess::Granted,
        _ => SectionAccess::Denied,
    }
}
