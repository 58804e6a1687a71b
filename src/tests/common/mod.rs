use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::IssuerConfig;
use crate::error::IssuerError;
use crate::github::InstallationApi;

/// Throwaway RSA key used only by tests.
pub static TEST_RSA_KEY: &str = include_str!("../../../testdata/test-app.pem");

pub fn test_config(api_base_url: &str, output_path: &str) -> IssuerConfig {
    IssuerConfig {
        app_id: "12345".to_owned(),
        private_key_pem: TEST_RSA_KEY.to_owned(),
        output_path: output_path.to_owned(),
        user_name: "acme".to_owned(),
        repo_name: "infra".to_owned(),
        api_base_url: api_base_url.to_owned(),
    }
}

/// In-memory API double that counts calls, so tests can assert which
/// steps of the pipeline were reached.
pub struct StubApi {
    pub installation_id: u64,
    pub token: String,
    pub resolve_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
}

impl StubApi {
    pub fn new(installation_id: u64, token: &str) -> Self {
        Self {
            installation_id,
            token: token.to_owned(),
            resolve_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
        }
    }
}

impl InstallationApi for StubApi {
    async fn resolve_installation(
        &self,
        _assertion: &str,
        _owner: &str,
        _repo: &str,
    ) -> Result<u64, IssuerError> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.installation_id)
    }

    async fn create_access_token(
        &self,
        _assertion: &str,
        _installation_id: u64,
    ) -> Result<String, IssuerError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.token.clone())
    }
}
