use crate::core::declare::RecordingDeclarator;
use crate::core::registry::ProviderRegistry;
use config::Config;
use error::Error;
use log::{error, info};

mod config;
mod core;
mod error;
mod mapper;
mod providers;
mod sops;
mod source;
mod zones;

async fn run() -> Result<(), Error> {
    let config = Config::from_env();
    let registry = ProviderRegistry::builtin();

    let zones = source::select(&config).fetch().await?;
    let mut declared = RecordingDeclarator::new();
    mapper::map_zones(&zones, &registry, &mut declared)?;

    for decl in declared.domains() {
        info!(
            "{}: {} records via {}",
            decl.name,
            decl.records.len(),
            decl.provider.name()
        );
    }
    println!("{}", serde_json::to_string_pretty(&declared.to_json())?);
    Ok(())
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        error!("{e}");
        std::process::exit(1);
    }
}
