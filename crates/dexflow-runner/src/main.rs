use anyhow::Result;
use clap::Parser;
use dexflow_runner::{run, Cli};
use dotenvy::dotenv;
use tracing_subscriber::{prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Load environment variables from a .env file in the current directory.
    dotenv().ok();

    // Logs go to stderr so stdout stays pipeable JSON.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dexflow_runner=info,dexflow_flow=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let output = run(&cli)?;
    println!("{output}");
    Ok(())
}
