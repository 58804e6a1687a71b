use std::fmt;

/// Which remote operation an API failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiOperation {
    ResolveInstallation,
    CreateAccessToken,
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ApiOperation::ResolveInstallation => write!(f, "resolve installation"),
            ApiOperation::CreateAccessToken => write!(f, "create access token"),
        }
    }
}

/// Pipeline errors. Every one is terminal: the issuer never retries,
/// the binary logs the error once and exits non-zero.
#[derive(Debug, thiserror::Error)]
pub enum IssuerError {
    #[error("missing or empty configuration variable '{0}'")]
    ConfigMissing(&'static str),

    #[error("failed to decode RSA private key: {0}")]
    KeyDecode(#[source] jsonwebtoken::errors::Error),

    #[error("failed to sign app assertion: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    #[error("github api '{operation}' failed: {message}")]
    Api {
        operation: ApiOperation,
        /// Remote HTTP status, absent for transport-level failures.
        status: Option<u16>,
        message: String,
    },

    #[error("failed to write output sink: {0}")]
    Io(#[from] std::io::Error),
}

impl IssuerError {
    pub fn api(operation: ApiOperation, status: Option<u16>, message: impl Into<String>) -> Self {
        IssuerError::Api {
            operation,
            status,
            message: message.into(),
        }
    }
}
