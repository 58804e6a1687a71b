//! In-place secret substitution for Helm values files.
//!
//! For every sub-directory `<app>` of the manifests directory there must be
//! a `<manifests>/<app>/values.yaml` and a `<secrets>/<app>/secrets.yaml`
//! holding a list of `{key, value}` pairs. Every literal occurrence of each
//! key is replaced across the values text and the file is rewritten.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
pub struct Secret {
    pub key: String,
    pub value: String,
}

/// Substitute secrets for every app directory under `manifests_dir`.
/// The first failing app aborts the run; already-rewritten files stay
/// rewritten (same single-pass semantics as the issuer pipeline).
pub fn replace_all(manifests_dir: &Path, secrets_dir: &Path) -> Result<()> {
    let apps = fs::read_dir(manifests_dir)
        .with_context(|| format!("can not read manifests dir '{}'", manifests_dir.display()))?;

    for entry in apps {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let app = entry.file_name();
        let app = app.to_string_lossy();
        replace_app(manifests_dir, secrets_dir, &app)?;
    }
    Ok(())
}

fn replace_app(manifests_dir: &Path, secrets_dir: &Path, app: &str) -> Result<()> {
    let values_path = manifests_dir.join(app).join("values.yaml");
    let values = fs::read_to_string(&values_path)
        .with_context(|| format!("can not read values.yaml, path '{}'", values_path.display()))?;

    let secrets_path = secrets_dir.join(app).join("secrets.yaml");
    let raw = fs::read_to_string(&secrets_path)
        .with_context(|| format!("can not read secrets.yaml, path '{}'", secrets_path.display()))?;

    let secrets: Vec<Secret> = serde_yaml::from_str(&raw)
        .with_context(|| format!("invalid secrets.yaml, path '{}'", secrets_path.display()))?;

    let merged = substitute(&values, &secrets);

    fs::write(&values_path, merged)
        .with_context(|| format!("can not write values.yaml, path '{}'", values_path.display()))?;

    info!("secrets merged, app '{}'", app);
    Ok(())
}

/// Literal, order-preserving replacement of each key with its value.
pub fn substitute(values: &str, secrets: &[Secret]) -> String {
    let mut out = values.to_owned();
    for secret in secrets {
        out = out.replace(&secret.key, &secret.value);
    }
    out
}
