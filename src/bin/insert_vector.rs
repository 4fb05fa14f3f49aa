//! Insert-vector demo: POST one fixed record to the connector and print
//! its reply. Failures are not handled and end the process with an error.

use clap::Parser;

use connector_demos::cli::CommonArgs;
use connector_demos::run_insert;

/// Insert a sample vector into the connector
#[derive(Parser, Debug)]
#[command(name = "insert-vector", version, about)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let client = args.common.bootstrap()?;

    run_insert(&client, &mut std::io::stdout().lock()).await?;

    Ok(())
}
