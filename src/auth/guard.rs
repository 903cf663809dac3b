use std::sync::Arc;

use tracing::debug;

use crate::api::{ApiClient, ApiError};

/// Capability for sending the user back to the login entry point. The web
/// admin this replaces did a hard navigation to `/login`; a terminal
/// implementation tells the operator to sign in again, tests record calls.
pub trait Navigator: Send + Sync {
    fn redirect_to_login(&self);
}

/// Verification state of a protected view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Checking,
    Resolved,
}

/// Gate run before every protected command.
///
/// Each entry starts in `Checking` and performs its own verification
/// round-trip; nothing is cached between runs. Any failure routes back to
/// login and the protected work never runs.
pub struct RouteGuard {
    navigator: Arc<dyn Navigator>,
    state: GuardState,
}

impl RouteGuard {
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self {
            navigator,
            state: GuardState::Checking,
        }
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Verify the session with the server. On success the guard resolves
    /// and the caller may proceed. On any failure (rejected token, absent
    /// token, transport error) the navigator is invoked and the error
    /// propagated; session teardown is handled inside the client's verify
    /// path, so the redirect fires exactly once.
    pub async fn ensure(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        self.state = GuardState::Checking;
        match client.verify().await {
            Ok(_) => {
                self.state = GuardState::Resolved;
                Ok(())
            }
            Err(err) => {
                debug!(error = %err, "Session verification failed");
                self.navigator.redirect_to_login();
                Err(err)
            }
        }
    }
}
