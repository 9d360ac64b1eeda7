mod app;
mod cli;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use imageof_k8s::KubeClient;

use crate::cli::{Args, Invocation};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => return usage_exit(e),
    };

    // Initialize tracing for debugging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let invocation = match args.into_invocation() {
        Ok(invocation) => invocation,
        Err(e) => return usage_exit(e),
    };

    match run_app(invocation).await {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Print a clap error or help text and pick the exit status.
/// Help and version go to stdout and are not failures.
fn usage_exit(e: clap::Error) -> ExitCode {
    let _ = e.print();
    if e.use_stderr() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

async fn run_app(invocation: Invocation) -> Result<String> {
    let client = KubeClient::new()
        .await
        .context("creating Kubernetes client")?;

    app::run(&client, &invocation).await
}
