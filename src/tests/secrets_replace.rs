use std::fs;

use tempfile::tempdir;

use crate::secrets::{replace_all, substitute, Secret};

fn secret(key: &str, value: &str) -> Secret {
    Secret {
        key: key.to_owned(),
        value: value.to_owned(),
    }
}

#[test]
fn substitute_replaces_every_occurrence() {
    let values = "db:\n  password: DB_PASSWORD\nbackup:\n  password: DB_PASSWORD\n";
    let out = substitute(values, &[secret("DB_PASSWORD", "s3cr3t")]);
    assert_eq!(out, "db:\n  password: s3cr3t\nbackup:\n  password: s3cr3t\n");
}

#[test]
fn substitute_applies_secrets_in_order() {
    let out = substitute("A", &[secret("A", "B"), secret("B", "C")]);
    // later secrets see earlier replacements
    assert_eq!(out, "C");
}

#[test]
fn replace_all_rewrites_each_app_in_place() {
    let root = tempdir().unwrap();
    let manifests = root.path().join("manifests");
    let secrets = root.path().join("secrets");

    for app in ["api", "worker"] {
        fs::create_dir_all(manifests.join(app)).unwrap();
        fs::create_dir_all(secrets.join(app)).unwrap();
        fs::write(
            manifests.join(app).join("values.yaml"),
            format!("name: {}\ntoken: APP_TOKEN\n", app),
        )
        .unwrap();
        fs::write(
            secrets.join(app).join("secrets.yaml"),
            format!("- key: APP_TOKEN\n  value: {}-token\n", app),
        )
        .unwrap();
    }

    replace_all(&manifests, &secrets).unwrap();

    let api = fs::read_to_string(manifests.join("api/values.yaml")).unwrap();
    assert_eq!(api, "name: api\ntoken: api-token\n");
    let worker = fs::read_to_string(manifests.join("worker/values.yaml")).unwrap();
    assert_eq!(worker, "name: worker\ntoken: worker-token\n");
}

#[test]
fn missing_secrets_file_fails_the_run() {
    let root = tempdir().unwrap();
    let manifests = root.path().join("manifests");
    let secrets = root.path().join("secrets");

    fs::create_dir_all(manifests.join("api")).unwrap();
    fs::create_dir_all(&secrets).unwrap();
    fs::write(manifests.join("api/values.yaml"), "token: APP_TOKEN\n").unwrap();

    let err = replace_all(&manifests, &secrets).unwrap_err();
    assert!(err.to_string().contains("secrets.yaml"));
}

#[test]
fn malformed_secrets_yaml_fails_the_run() {
    let root = tempdir().unwrap();
    let manifests = root.path().join("manifests");
    let secrets = root.path().join("secrets");

    fs::create_dir_all(manifests.join("api")).unwrap();
    fs::create_dir_all(secrets.join("api")).unwrap();
    fs::write(manifests.join("api/values.yaml"), "token: APP_TOKEN\n").unwrap();
    fs::write(secrets.join("api/secrets.yaml"), "not: a\nlist: here\n").unwrap();

    let err = replace_all(&manifests, &secrets).unwrap_err();
    assert!(err.to_string().contains("invalid secrets.yaml"));
}

#[test]
fn plain_files_under_manifests_dir_are_ignored() {
    let root = tempdir().unwrap();
    let manifests = root.path().join("manifests");
    let secrets = root.path().join("secrets");

    fs::create_dir_all(&manifests).unwrap();
    fs::create_dir_all(&secrets).unwrap();
    fs::write(manifests.join("README.md"), "not an app").unwrap();

    replace_all(&manifests, &secrets).unwrap();
}
