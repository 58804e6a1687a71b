pub mod settings;

use crate::error::IssuerError;

pub const APP_ID_ENV: &str = "APP_ID";
pub const APP_PRIVATE_KEY_ENV: &str = "APP_PRIVATE_KEY";
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";
pub const USER_NAME_ENV: &str = "USER_NAME";
pub const PRIVATE_REPO_NAME_ENV: &str = "PRIVATE_REPO_NAME";
pub const GITHUB_API_URL_ENV: &str = "GITHUB_API_URL";

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Everything the issuer pipeline needs, resolved once at startup.
/// No env lookups happen after construction.
#[derive(Debug, Clone)]
pub struct IssuerConfig {
    /// GitHub App id, the `iss` claim of the assertion.
    pub app_id: String,
    /// PEM-encoded RSA private key text.
    pub private_key_pem: String,
    /// File to append `accessToken=<value>` to.
    pub output_path: String,
    /// Account/organization the app installation is looked up under.
    pub user_name: String,
    /// Repository the app installation is looked up under.
    pub repo_name: String,
    /// API base, overridable for tests.
    pub api_base_url: String,
}

impl IssuerConfig {
    /// Load and validate all required slots. Any absent or empty variable
    /// aborts here, before a key is parsed or a request is made.
    pub fn from_env() -> Result<Self, IssuerError> {
        Ok(Self {
            app_id: required(APP_ID_ENV)?,
            private_key_pem: required(APP_PRIVATE_KEY_ENV)?,
            output_path: required(GITHUB_OUTPUT_ENV)?,
            user_name: required(USER_NAME_ENV)?,
            repo_name: required(PRIVATE_REPO_NAME_ENV)?,
            api_base_url: optional(GITHUB_API_URL_ENV, DEFAULT_API_URL),
        })
    }
}

fn required(key: &'static str) -> Result<String, IssuerError> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(IssuerError::ConfigMissing(key)),
    }
}

fn optional(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_owned(),
    }
}
