use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered 401, or a session check failed.
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Login failed")]
    LoginFailed,

    /// A session check was attempted with no stored token.
    #[error("Not logged in")]
    NoSession,

    /// Any other non-success response. No retry is ever attempted.
    #[error("{method} {endpoint} failed with status {status}")]
    RequestFailed {
        method: reqwest::Method,
        endpoint: String,
        status: reqwest::StatusCode,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The local session store could not be written.
    #[error("Session store error: {0}")]
    Storage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_identifies_the_call() {
        let err = ApiError::RequestFailed {
            method: reqwest::Method::DELETE,
            endpoint: "/news/7".to_string(),
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = err.to_string();
        assert!(message.contains("DELETE"));
        assert!(message.contains("/news/7"));
        assert!(message.contains("500"));
    }
}
