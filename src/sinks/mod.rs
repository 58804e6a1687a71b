//! Output-file sink. The issuer appends exactly one `accessToken=<value>`
//! line to the CI output file; nothing is written on earlier failures.

use std::path::Path;

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::error::IssuerError;

/// Append `accessToken=<token>\n` to `path`, creating the file if absent.
pub async fn append_access_token(path: impl AsRef<Path>, token: &str) -> Result<(), IssuerError> {
    let path = path.as_ref();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;

    file.write_all(format!("accessToken={}\n", token).as_bytes())
        .await?;
    file.flush().await?;

    info!("access token written, path '{}'", path.display());
    Ok(())
}
