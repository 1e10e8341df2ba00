//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so individual components can depend on small
//! focused models. Only `auth` exists today; page data is fetched per page.

pub mod auth;
