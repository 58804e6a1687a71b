use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ApiOperation, IssuerError};
use crate::github::{Installation, InstallationApi, InstallationToken};

static USER_AGENT: &str = concat!("gh-app-token/", env!("CARGO_PKG_VERSION"));
static ACCEPT: &str = "application/vnd.github+json";
static API_VERSION: &str = "2022-11-28";

/// Reqwest-backed GitHub API client. Base URL is injected so tests can
/// point it at a mock server.
#[derive(Debug, Clone)]
pub struct GithubClient {
    base_url: String,
    client: Client,
}

impl GithubClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder().build().expect("Failed to build HTTP client");
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client,
        }
    }

    fn with_headers(&self, builder: RequestBuilder, assertion: &str) -> RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", assertion))
            .header("Accept", ACCEPT)
            .header("User-Agent", USER_AGENT)
            .header("X-GitHub-Api-Version", API_VERSION)
    }
}

impl InstallationApi for GithubClient {
    async fn resolve_installation(
        &self,
        assertion: &str,
        owner: &str,
        repo: &str,
    ) -> Result<u64, IssuerError> {
        let url = format!("{}/repos/{}/{}/installation", self.base_url, owner, repo);
        debug!("GET {}", url);

        let request = self.with_headers(self.client.get(&url), assertion);
        let response = send(request, ApiOperation::ResolveInstallation).await?;
        let installation: Installation =
            parse(response, ApiOperation::ResolveInstallation).await?;
        Ok(installation.id)
    }

    async fn create_access_token(
        &self,
        assertion: &str,
        installation_id: u64,
    ) -> Result<String, IssuerError> {
        let url = format!(
            "{}/app/installations/{}/access_tokens",
            self.base_url, installation_id
        );
        debug!("POST {}", url);

        let request = self.with_headers(self.client.post(&url), assertion);
        let response = send(request, ApiOperation::CreateAccessToken).await?;
        let minted: InstallationToken = parse(response, ApiOperation::CreateAccessToken).await?;
        Ok(minted.token)
    }
}

/// Send the request and turn any transport failure or non-2xx status into
/// an API error carrying the remote status and body.
async fn send(request: RequestBuilder, operation: ApiOperation) -> Result<Response, IssuerError> {
    let response = request
        .send()
        .await
        .map_err(|err| IssuerError::api(operation, None, err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let message = remote_message(status, response).await;
        return Err(IssuerError::api(operation, Some(status.as_u16()), message));
    }
    Ok(response)
}

async fn parse<T: DeserializeOwned>(
    response: Response,
    operation: ApiOperation,
) -> Result<T, IssuerError> {
    response
        .json::<T>()
        .await
        .map_err(|err| IssuerError::api(operation, None, format!("invalid response body: {}", err)))
}

async fn remote_message(status: StatusCode, response: Response) -> String {
    let body = response.text().await.unwrap_or_default();
    format!("status {}: {}", status, body.trim())
}
