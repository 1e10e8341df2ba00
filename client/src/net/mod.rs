//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls against the campus backend and is the only place
//! identity headers are attached to outgoing requests.

pub mod api;
