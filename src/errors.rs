use std::fmt;

/// Application-specific error types.
#[derive(Debug, Clone)]
pub enum AppError {
    /// A required form field (`full_name` or `mobile`) is absent or empty.
    MissingFields,
    /// The submitted full name yields no name tokens (whitespace only).
    InvalidName,
    /// The CRM endpoint could not be reached (transport-level failure).
    /// A completed HTTP exchange, whatever the status, is not this error.
    CrmUnreachable(String),
    /// An outbound HTTP client could not be constructed at startup.
    ClientInit(String),
}

impl AppError {
    /// Opaque code appended to the error redirect as `?code=...`.
    pub fn redirect_code(&self) -> &'static str {
        match self {
            AppError::MissingFields => "missing_fields",
            AppError::InvalidName => "invalid_name",
            AppError::CrmUnreachable(_) => "sf_error",
            // Clients are built before the server accepts traffic; if this
            // ever surfaces on the request path, treat it as a CRM failure.
            AppError::ClientInit(_) => "sf_error",
        }
    }
}

impl fmt::Display for AppError {
    /// Formats the error for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingFields => write!(f, "Required fields missing: full_name and mobile"),
            AppError::InvalidName => write!(f, "Full name contains no usable name parts"),
            AppError::CrmUnreachable(msg) => write!(f, "CRM connection error: {}", msg),
            AppError::ClientInit(msg) => write!(f, "HTTP client init error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    /// Converts a `reqwest::Error` into an `AppError`.
    ///
    /// The only `?` sites on transport calls are the CRM forward, so every
    /// converted error is a CRM reachability failure.
    fn from(err: reqwest::Error) -> Self {
        AppError::CrmUnreachable(err.to_string())
    }
}
