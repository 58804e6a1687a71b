pub mod client;

pub use client::GithubClient;

use serde::Deserialize;

use crate::error::IssuerError;

/// The two GitHub App operations the issuer performs, behind a seam so
/// tests can substitute a double for the real API.
pub trait InstallationApi {
    /// Find the app installation covering `owner`/`repo`, authenticated
    /// with the signed assertion as bearer.
    fn resolve_installation(
        &self,
        assertion: &str,
        owner: &str,
        repo: &str,
    ) -> impl std::future::Future<Output = Result<u64, IssuerError>> + Send;

    /// Mint a short-lived access token for the installation.
    fn create_access_token(
        &self,
        assertion: &str,
        installation_id: u64,
    ) -> impl std::future::Future<Output = Result<String, IssuerError>> + Send;
}

/// `GET /repos/{owner}/{repo}/installation` response, reduced to what we use.
#[derive(Debug, Deserialize)]
pub struct Installation {
    pub id: u64,
}

/// `POST /app/installations/{id}/access_tokens` response.
#[derive(Debug, Deserialize)]
pub struct InstallationToken {
    pub token: String,
    #[serde(default)]
    pub expires_at: Option<String>,
}
