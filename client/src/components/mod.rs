//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render route gating and dashboard chrome while reading shared
//! auth state from the Leptos context provider.

pub mod protected_route;
pub mod shell;
pub mod sidebar;
