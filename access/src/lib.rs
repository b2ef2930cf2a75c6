//! Session and role-authorization core for the HRMS browser client.
//!
//! This crate owns everything the UI needs to answer "who is signed in, and
//! may they see this screen": the role hierarchy, the persisted credential
//! record, the session store, the static route table, and the route gate.
//! It has no browser dependencies; the `client` crate supplies the
//! `localStorage` backend and the HTTP implementation of [`api::AuthApi`].
//!
//! DESIGN
//! ======
//! All session mutation goes through [`session::SessionStore`]. Derived
//! fields (`role`, `organization`) are written by the same code path that
//! writes `user`, so consumers never observe them out of sync.

pub mod api;
pub mod error;
pub mod gate;
pub mod nav;
pub mod profile;
pub mod role;
pub mod route;
pub mod session;
pub mod storage;

pub use api::{AuthApi, Credentials, LoginResponse, request_login};
pub use error::{AuthError, CredentialsError, CredentialsField, RestoreError};
pub use gate::{Decision, Redirect};
pub use nav::NavItem;
pub use profile::UserProfile;
pub use role::Role;
pub use route::{Access, RouteDescriptor};
pub use session::{LoginOutcome, Session, SessionStore};
pub use storage::{CredentialStore, MemoryStore, PersistedCredentials};
