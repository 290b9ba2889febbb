// src/main.rs
// Motorworks - vehicle assembly showroom demo

use clap::Parser;
use motorworks_core::application::Showroom;
use motorworks_core::{OwnerProfile, WorksConfig, WorksError};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

/// Motorworks - vehicle assembly showroom demo
#[derive(Parser, Debug)]
#[command(name = "motorworks")]
#[command(about = "Tours the Motorworks assembly lines and prints what they build")]
#[command(version)]
struct Cli {
    /// Family to tour; tours every configured family when omitted
    family: Option<String>,

    /// Path to a works configuration file in TOML
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ WorksError::UnknownFamily { .. }) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), WorksError> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => WorksConfig::default(),
    };

    let showroom = Showroom::new(config);
    info!(plant = showroom.plant_name(), "showroom open");

    println!("{} showroom", showroom.plant_name());

    let receipts = match cli.family {
        Some(name) => vec![showroom.tour_family(&name)?],
        None => showroom.tour_configured(),
    };

    for receipt in &receipts {
        for line in receipt.lines() {
            println!("{line}");
        }
    }

    for line in showroom.commission_stock()? {
        println!("{line}");
    }

    if let Some(first) = receipts.first() {
        let owner = OwnerProfile::builder()
            .first_name("Aya")
            .last_name("Kuroda")
            .age(38)
            .email("aya.kuroda@example.com")
            .build()?;

        let order = showroom.tour_family_for(first.family().name(), owner)?;
        if let Some(registered) = order.owner() {
            println!("Order {} registered to {registered}", order.serial());
        }
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<WorksConfig, WorksError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| WorksError::config(format!("cannot read {}: {e}", path.display())))?;

    WorksConfig::from_toml_str(&text)
}
