//! Error type returned by fallible access-control operations.
//!
//! ERROR HANDLING
//! ==============
//! Storage and parse faults never surface here: the session store absorbs
//! them and degrades to "no identity". Only caller-facing validation failures
//! and upstream invariant violations are represented.

/// Error returned by role parsing, capability lookup and the auth resolver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    /// `login` was given an identity whose role is not one of the four known roles.
    #[error("invalid role: {0:?}")]
    InvalidRole(String),
    /// A capability lookup was asked about a role outside the closed enum.
    #[error("unknown role: {0:?}")]
    UnknownRole(String),
    /// A mutation was attempted before the session finished resolving.
    #[error("session has not been resolved yet")]
    NotResolved,
}
