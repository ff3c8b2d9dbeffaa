use clap::Parser;
use delivery_zones::config::cli::CliArgs;
use delivery_zones::utils::logger;
use delivery_zones::{
    ChannelSettings, Coordinate, HttpZoneStore, JsonFileZoneStore, Result, ZoneResolver,
    ZoneShipping, ZoneStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    if args.json_logs {
        logger::init_service_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting delivery-zones CLI");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let config = match args.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let destination = Coordinate::new(args.lat, args.lng);

    let outcome = if let Some(path) = &config.source.zones_file {
        tracing::info!("Reading zones from {}", path);
        resolve(JsonFileZoneStore::new(path), config.channel, destination).await
    } else if let Some(endpoint) = &config.source.endpoint {
        tracing::info!("Fetching zones from {}", endpoint);
        resolve(
            HttpZoneStore::new(endpoint.as_str()),
            config.channel,
            destination,
        )
        .await
    } else {
        // resolve_config rejects a config without a source.
        unreachable!("validated config always has a source")
    };

    match outcome {
        Ok(()) => {
            tracing::info!("✅ Resolution completed");
        }
        Err(e) => {
            tracing::error!("❌ Resolution failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(if e.is_storage_unavailable() { 2 } else { 1 });
        }
    }

    Ok(())
}

async fn resolve<S: ZoneStore>(
    store: S,
    channel: ChannelSettings,
    destination: Coordinate,
) -> Result<()> {
    let shipping = ZoneShipping::new(ZoneResolver::new(store), channel);

    let eligible = shipping.check_eligibility(Some(destination)).await?;
    let quote = shipping.calculate_price(Some(destination)).await?;

    println!(
        "destination: ({}, {})",
        destination.latitude, destination.longitude
    );
    println!("eligible: {}", eligible);
    println!(
        "price: {} (includes tax: {}, tax rate: {})",
        quote.price, quote.price_includes_tax, quote.tax_rate
    );

    Ok(())
}
