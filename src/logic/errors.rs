use crate::api::PinataError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    Unauthorized, // HTTP 401/403
    NotFound,     // HTTP 404
    RateLimited,  // HTTP 429
    ServerError,  // HTTP 500+
    NetworkError, // DNS, routing, etc.
    LocalFile,    // Staged file could not be read
    Other,
}

impl ErrorType {
    /// Short title for the notification modal
    pub fn title(&self) -> &'static str {
        match self {
            ErrorType::ConnectionRefused => "Connection refused",
            ErrorType::Timeout => "Request timed out",
            ErrorType::Unauthorized => "Invalid credentials",
            ErrorType::NotFound => "Not found",
            ErrorType::RateLimited => "Rate limited",
            ErrorType::ServerError => "Pinata server error",
            ErrorType::NetworkError => "Network error",
            ErrorType::LocalFile => "Cannot read file",
            ErrorType::Other => "Request failed",
        }
    }
}

/// Classify an error based on its type and error chain
pub fn classify_error(error: &PinataError) -> ErrorType {
    match error {
        PinataError::Status { status, .. } => match status {
            401 | 403 => ErrorType::Unauthorized,
            404 => ErrorType::NotFound,
            429 => ErrorType::RateLimited,
            500..=599 => ErrorType::ServerError,
            _ => ErrorType::Other,
        },
        PinataError::Io { .. } => ErrorType::LocalFile,
        PinataError::Decode(_) => ErrorType::Other,
        PinataError::Transport(e) => {
            if e.is_timeout() {
                return ErrorType::Timeout;
            }

            let error_msg = root_cause(e).to_lowercase();
            if error_msg.contains("connection refused") {
                ErrorType::ConnectionRefused
            } else if error_msg.contains("timeout") || error_msg.contains("timed out") {
                ErrorType::Timeout
            } else if error_msg.contains("dns") || error_msg.contains("network") {
                ErrorType::NetworkError
            } else if e.is_connect() {
                ErrorType::NetworkError
            } else {
                ErrorType::Other
            }
        }
    }
}

/// Walk the chain to the deepest (root cause) message
fn root_cause(error: &dyn std::error::Error) -> String {
    let mut deepest = error.to_string();
    let mut source = error.source();

    while let Some(err) = source {
        deepest = err.to_string();
        source = err.source();
    }

    deepest
}

/// Message shown to the user: the response body for status failures,
/// otherwise the root cause.
pub fn format_error_message(error: &PinataError) -> String {
    match error {
        PinataError::Status { status, body } => {
            let body = body.trim();
            if body.is_empty() {
                format!("HTTP {}", status)
            } else {
                format!("{} - {}", status, body)
            }
        }
        PinataError::Transport(e) => root_cause(e),
        other => other.to_string(),
    }
}
