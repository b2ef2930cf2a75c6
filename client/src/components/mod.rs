//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! `route_gate` decides whether a screen renders; `app_shell`, `sidebar`,
//! and `header` form the signed-in chrome around protected screens.

pub mod app_shell;
pub mod header;
pub mod route_gate;
pub mod sidebar;
