//! Health-check demo: GET the connector's liveness probe and print the
//! result. Request and decode failures are reported on stdout, not raised.

use clap::Parser;

use connector_demos::cli::CommonArgs;
use connector_demos::run_health_check;

/// Check that the connector is alive
#[derive(Parser, Debug)]
#[command(name = "health-check", version, about)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let client = args.common.bootstrap()?;

    run_health_check(&client, &mut std::io::stdout().lock()).await?;

    Ok(())
}
