//! The token-issuance pipeline.
//!
//! Strictly linear, one pass per process run:
//! config -> key decode -> sign -> resolve installation -> mint token -> emit.
//! Every step returns a `Result`; nothing is retried and no step is reached
//! after a failure. Termination is decided by the binary, not here, so the
//! pipeline stays runnable inside tests.

use tracing::info;

use crate::auth::{decode_signing_key, sign_assertion};
use crate::config::IssuerConfig;
use crate::error::IssuerError;
use crate::github::{GithubClient, InstallationApi};
use crate::sinks;

/// Run the assertion/exchange half of the pipeline against any API
/// implementation and return the minted access token.
pub async fn issue_token<A: InstallationApi>(
    cfg: &IssuerConfig,
    api: &A,
) -> Result<String, IssuerError> {
    // Key decode and signing both happen before any network call.
    let key = decode_signing_key(&cfg.private_key_pem)?;
    let assertion = sign_assertion(&cfg.app_id, &key)?;
    info!("app assertion signed, app_id '{}'", cfg.app_id);

    let installation_id = api
        .resolve_installation(&assertion, &cfg.user_name, &cfg.repo_name)
        .await?;
    info!(
        "installation resolved, id '{}', scope '{}/{}'",
        installation_id, cfg.user_name, cfg.repo_name
    );

    let token = api.create_access_token(&assertion, installation_id).await?;
    Ok(token)
}

/// Full pipeline: issue against the real API and emit to the output sink.
pub async fn run(cfg: &IssuerConfig) -> Result<(), IssuerError> {
    let api = GithubClient::new(&cfg.api_base_url);
    let token = issue_token(cfg, &api).await?;
    sinks::append_access_token(&cfg.output_path, &token).await?;
    Ok(())
}
