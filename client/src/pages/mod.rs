//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates chrome to
//! `components`. Pages assume the route gate has already admitted them.

pub mod dashboard;
pub mod login;
pub mod section;
