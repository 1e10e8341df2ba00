//! Identity headers attached to every authenticated REST request.
//!
//! The REST backend identifies the caller through two custom headers. Values
//! are always derived from the session at call time; never keep an
//! [`IdentityHeaders`] across a login or logout.

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;

use crate::role::Role;
use crate::session::Session;

pub const HEADER_USER_ID: &str = "x-user-id";
pub const HEADER_USER_ROLE: &str = "x-user-role";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentityHeaders {
    user_id: String,
    role: Role,
}

impl IdentityHeaders {
    /// Headers for the session's identity, or `None` when nobody is logged in.
    #[must_use]
    pub fn from_session(session: &Session) -> Option<Self> {
        session.identity().map(|identity| Self { user_id: identity.id.clone(), role: identity.role })
    }

    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// `(name, value)` pairs in a stable order.
    #[must_use]
    pub fn pairs(&self) -> [(&'static str, &str); 2] {
        [(HEADER_USER_ID, self.user_id.as_str()), (HEADER_USER_ROLE, self.role.as_str())]
    }
}
