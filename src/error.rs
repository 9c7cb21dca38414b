//! Error Types
//!
//! Every error here ends up as a user-visible notice through `Display`.

use thiserror::Error;

/// Failure talking to the POS API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Unexpected response from server: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }

    /// Network failures and server-side errors are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Network(_) => true,
            ApiError::Status { status, .. } => *status >= 500,
            ApiError::Decode(_) => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Please enter a 4-digit PIN")]
    InvalidFormat,
    #[error("Invalid PIN. Please try again.")]
    UnknownPin,
}

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Checkout failed: {0}")]
    Api(#[from] ApiError),
}

#[derive(Debug, Error)]
pub enum ReturnError {
    #[error("Please enter a Sale ID")]
    MissingSaleId,
    #[error("Sale not found. Please check the ID.")]
    SaleNotFound,
    #[error("Please select items to return")]
    NothingSelected,
    #[error("{0}")]
    Api(ApiError),
}

impl From<ApiError> for ReturnError {
    fn from(err: ApiError) -> Self {
        if err.is_not_found() {
            ReturnError::SaleNotFound
        } else {
            ReturnError::Api(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> ApiError {
        ApiError::Status {
            status: code,
            message: "boom".to_string(),
        }
    }

    #[test]
    fn only_server_errors_retry() {
        assert!(status(503).is_retryable());
        assert!(!status(400).is_retryable());
        assert!(!status(404).is_retryable());
    }

    #[test]
    fn not_found_becomes_sale_lookup_miss() {
        assert!(matches!(ReturnError::from(status(404)), ReturnError::SaleNotFound));
        assert!(matches!(ReturnError::from(status(500)), ReturnError::Api(_)));
    }

    #[test]
    fn status_error_shows_server_message() {
        assert_eq!(status(422).to_string(), "boom");
        assert_eq!(
            CheckoutError::from(status(500)).to_string(),
            "Checkout failed: boom"
        );
    }

    #[test]
    fn login_errors_read_as_notices() {
        assert_eq!(LoginError::UnknownPin.to_string(), "Invalid PIN. Please try again.");
        assert_eq!(LoginError::InvalidFormat.to_string(), "Please enter a 4-digit PIN");
    }

    #[test]
    fn return_errors_read_as_notices() {
        assert_eq!(ReturnError::MissingSaleId.to_string(), "Please enter a Sale ID");
        assert_eq!(
            ReturnError::SaleNotFound.to_string(),
            "Sale not found. Please check the ID."
        );
        assert_eq!(ReturnError::NothingSelected.to_string(), "Please select items to return");
        assert_eq!(ReturnError::from(status(500)).to_string(), "boom");
    }
}
