use clap::Parser;
use gh_app_token::issuer;
use gh_app_token::utils::logging;
use gh_app_token::utils::logging::LogLevel;
use gh_app_token::IssuerConfig;
use tracing::{error, info};

#[derive(Parser)]
#[command(author, version, about = "Mint a GitHub App installation access token and append it to GITHUB_OUTPUT", long_about = None)]
struct Args {
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
}

#[tokio::main]
async fn main() {
    // -------------------------------
    // 1. Read args, install logging
    // -------------------------------

    let args = Args::parse();
    logging::run(args.log_level);

    // -------------------------------
    // 2. Load env configuration
    // -------------------------------

    let cfg = match IssuerConfig::from_env() {
        Ok(cfg) => cfg,
        Err(err) => {
            error!("configuration error: {}", err);
            std::process::exit(1);
        }
    };

    // -------------------------------
    // 3. Run the issuance pipeline
    //
    // sign assertion -> resolve installation -> mint token -> emit.
    // Any failure is terminal, the exit decision is made only here.
    // -------------------------------

    if let Err(err) = issuer::run(&cfg).await {
        error!("token issuance failed: {}", err);
        std::process::exit(1);
    }

    info!("done, output path '{}'", cfg.output_path);
}
