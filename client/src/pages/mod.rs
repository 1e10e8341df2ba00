//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Protected pages wrap themselves in `ProtectedRoute`.

pub mod dashboard;
pub mod login;
pub mod section;
