//! # CI Token Helpers
//!
//! Two single-shot CI utilities sharing one crate:
//! - `gh-app-token` — signs a GitHub App JWT, exchanges it for an
//!   installation access token and appends it to the `GITHUB_OUTPUT` file
//! - `replace-values` — substitutes per-app secrets into Helm values files
//!
//! Modules:
//! - `config` — environment-sourced issuer configuration
//! - `auth` — assertion claims and RS256 signing
//! - `github` — the two GitHub App API operations
//! - `sinks` — output-file emission
//! - `issuer` — the linear issuance pipeline
//! - `secrets` — values.yaml secret substitution

pub mod auth;
pub mod config;
pub mod error;
pub mod github;
pub mod issuer;
pub mod secrets;
pub mod sinks;
pub mod utils;

#[cfg(test)]
pub mod tests;

pub use crate::config::IssuerConfig;
pub use crate::error::IssuerError;
