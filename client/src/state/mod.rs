//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State lives in reactive signals provided via context. The session is the
//! only shared state this client owns; screens keep their own local signals.

pub mod auth;
