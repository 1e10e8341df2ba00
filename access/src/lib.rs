//! Session-gated access control for the campus portal.
//!
//! This crate owns the decisions every other layer consumes: who is logged in,
//! which role they hold, which portal sections that role reaches, and what a
//! navigation to a given path should do. It has no browser or server
//! dependencies; persistence is reached through the [`DurableSlot`] capability
//! so the same code runs against `localStorage`, an in-memory fake, or any
//! other medium.
//!
//! ARCHITECTURE
//! ============
//! `storage` -> `session` -> `resolver` form the write path (only the
//! resolver mutates a session). `guard` and `headers` are pure readers of a
//! session snapshot.

pub mod error;
pub mod guard;
pub mod headers;
pub mod identity;
pub mod resolver;
pub mod role;
pub mod session;
pub mod storage;

pub use error::AccessError;
pub use guard::{
    DASHBOARD_PATH, LOGIN_PATH, RootDecision, RouteDecision, SectionAccess, authorize, dispatch_root, guard,
};
pub use headers::{HEADER_USER_ID, HEADER_USER_ROLE, IdentityHeaders};
pub use identity::{Identity, IdentityClaim};
pub use resolver::{AuthResolver, SubscriptionId};
pub use role::{Capabilities, Role, Section, capabilities_of};
pub use session::{DEFAULT_SESSION_KEY, Resolution, Session, SessionStore};
pub use storage::{DurableSlot, MemorySlot, SlotError};
