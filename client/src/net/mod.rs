//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the auth collaborator over HTTP. Business screens reuse
//! its bearer-header and status helpers for their own requests.

pub mod api;
