use clap::Parser;

use crate::config::AppConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

#[derive(Debug, Clone, Parser)]
#[command(name = "delivery-zones")]
#[command(about = "Resolves a destination coordinate against delivery zones")]
pub struct CliArgs {
    /// Latitude of the destination
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude of the destination
    #[arg(long, allow_hyphen_values = true)]
    pub lng: f64,

    /// JSON file holding the zone records
    #[arg(long)]
    pub zones_file: Option<String>,

    /// HTTP endpoint returning the zone records
    #[arg(long)]
    pub endpoint: Option<String>,

    /// TOML config file; --zones-file/--endpoint override its source section
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Quoted prices already include tax")]
    pub prices_include_tax: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log as JSON lines")]
    pub json_logs: bool,
}

impl CliArgs {
    /// Merge the flags over the optional config file and validate the result.
    pub fn resolve_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(path) = &self.zones_file {
            config.source.zones_file = Some(path.clone());
        }
        if let Some(endpoint) = &self.endpoint {
            config.source.endpoint = Some(endpoint.clone());
        }
        if self.prices_include_tax {
            config.channel.prices_include_tax = true;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> CliArgs {
        let mut argv = vec!["delivery-zones", "--lat", "1.0", "--lng", "2.0"];
        argv.extend(extra);
        CliArgs::parse_from(argv)
    }

    #[test]
    fn flags_alone_build_a_valid_config() {
        let config = args(&["--zones-file", "zones.json"]).resolve_config().unwrap();
        assert_eq!(config.source.zones_file.as_deref(), Some("zones.json"));
        assert!(!config.channel.prices_include_tax);
    }

    #[test]
    fn no_source_is_rejected() {
        assert!(args(&[]).resolve_config().is_err());
    }

    #[test]
    fn tax_flag_flows_into_channel_settings() {
        let config = args(&["--endpoint", "http://localhost:3000/zones", "--prices-include-tax"])
            .resolve_config()
            .unwrap();
        assert!(config.channel.prices_include_tax);
    }

    #[test]
    fn negative_coordinates_parse() {
        let parsed = args(&["--zones-file", "zones.json"]);
        assert_eq!(parsed.lat, 1.0);
        let parsed = CliArgs::parse_from([
            "delivery-zones",
            "--lat",
            "-33.87",
            "--lng",
            "151.21",
            "--zones-file",
            "zones.json",
        ]);
        assert_eq!(parsed.lat, -33.87);
    }
}
