//! Authentication module for managing the admin session.
//!
//! This module provides:
//! - `SessionStore`: the single persisted session token (set/get/clear)
//! - `CredentialStore`: OS-level password storage via keyring
//! - `RouteGuard`: the verification gate run before every protected command
//!
//! Token validity is decided entirely by the server; the client never
//! expires a session on its own.

pub mod credentials;
pub mod guard;
pub mod session;

pub use credentials::CredentialStore;
pub use guard::{GuardState, Navigator, RouteGuard};
pub use session::{FileSessionStore, SessionData, SessionStore};
