use anyhow::{bail, Context, Result};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vehicle_factory::{register_custom_models, run_demo, VehicleFactory};

fn main() -> Result<()> {
    // Logs go to stderr, report lines to stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vehicle_factory=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().collect();
    let mode = args.get(1).map(String::as_str).unwrap_or("text");
    if !matches!(mode, "text" | "json") {
        bail!("unknown output mode: {} (expected `text` or `json`)", mode);
    }

    tracing::info!(version = vehicle_factory::VERSION, mode, "starting showcase");

    let mut factory = VehicleFactory::new();
    register_custom_models(&mut factory);
    let report = run_demo(&factory).context("showcase failed")?;

    match mode {
        "text" => {
            for line in report.lines() {
                println!("{}", line);
            }
        }
        _ => {
            let json = report.to_json().context("could not serialize report")?;
            println!("{}", json);
        }
    }

    Ok(())
}
