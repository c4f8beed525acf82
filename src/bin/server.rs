//! Entrypoint for the screening front-end.
//!
//! Loads the model artifact before binding the listener; a missing or
//! malformed artifact aborts startup with a non-zero exit, it is never a
//! per-request error.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use vdrl_screen::model::ScreeningModel;
use vdrl_screen::{schema, server};

#[derive(Debug, Parser)]
#[command(name = "vdrl-screen-server", about = "VDRL screening prediction front-end")]
struct Args {
    /// Path to the serialized model artifact.
    #[arg(long, default_value = "model.json")]
    model: PathBuf,
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: String,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let model = ScreeningModel::load(&args.model)
        .with_context(|| format!("loading model artifact from {}", args.model.display()))?;

    info!(
        stumps = model.n_stumps(),
        features = schema::FEATURE_COUNT,
        bind = %args.bind,
        "screening front-end started"
    );

    server::run(model, &args.bind).await?;
    Ok(())
}
