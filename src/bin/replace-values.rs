use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use gh_app_token::secrets;
use gh_app_token::utils::logging;
use gh_app_token::utils::logging::LogLevel;

#[derive(Parser)]
#[command(author, version, about = "Substitute per-app secrets into Helm values.yaml files in place", long_about = None)]
struct Args {
    /// Directory holding one sub-directory per Helm app, each with a values.yaml
    #[arg(long, default_value = "manifests")]
    manifests_dir: PathBuf,
    /// Directory holding the matching <app>/secrets.yaml files
    #[arg(long, default_value = "secrets")]
    secrets_dir: PathBuf,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::run(args.log_level);

    secrets::replace_all(&args.manifests_dir, &args.secrets_dir)
}
