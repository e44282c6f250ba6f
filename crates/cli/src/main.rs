mod commands;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use roadtrip_ssg_checkout::{PickupLocation, VehicleType};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roadtrip-ssg")]
#[command(
    version,
    about = "Static pre-renderer for the road-trip brokerage sites",
    long_about = None
)]
struct Cli {
    /// Defaults to `prerender` in the current directory
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Parser)]
enum Command {
    /// Render every route for every site into its output directory
    Prerender {
        /// Project root containing the client build
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },

    /// Check build inputs and site configuration without writing anything
    Validate {
        /// Project root containing the client build
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },

    /// Serve one site's pre-rendered output locally
    Preview {
        /// Site id (e.g. ama, giw)
        #[arg(long)]
        site: String,

        /// Port to serve on
        #[arg(short, long, default_value = "8003")]
        port: u16,

        /// Project root containing the site output
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },

    /// Show the display price estimate for a stay
    Estimate {
        /// Vehicle type (tesla_model_y, tesla_model_x, tesla_model_3, tesla_cybertruck)
        #[arg(long)]
        vehicle: VehicleType,

        /// Pickup date, YYYY-MM-DD
        #[arg(long)]
        pickup: String,

        /// Return date, YYYY-MM-DD
        #[arg(long)]
        dropoff: String,
    },

    /// Submit a booking to the site's checkout service
    Checkout {
        /// Site id the booking is made through
        #[arg(long)]
        site: String,

        #[arg(long)]
        vehicle: VehicleType,

        /// Pickup date, YYYY-MM-DD
        #[arg(long)]
        pickup: String,

        /// Return date, YYYY-MM-DD
        #[arg(long)]
        dropoff: String,

        /// Pickup location (Las Vegas, Los Angeles, San Francisco)
        #[arg(long)]
        location: PickupLocation,

        /// Customer email
        #[arg(long)]
        email: String,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => commands::prerender::run(PathBuf::from(".")).await,
        Some(Command::Prerender { root }) => commands::prerender::run(root).await,
        Some(Command::Validate { root }) => commands::validate::run(root).await,
        Some(Command::Preview { site, port, root }) => {
            commands::preview::run(root, site, port).await
        }
        Some(Command::Estimate {
            vehicle,
            pickup,
            dropoff,
        }) => commands::estimate::run(vehicle, &pickup, &dropoff),
        Some(Command::Checkout {
            site,
            vehicle,
            pickup,
            dropoff,
            location,
            email,
        }) => commands::checkout::run(site, vehicle, pickup, dropoff, location, email).await,
        Some(Command::Completions { shell }) => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "roadtrip-ssg", &mut io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_prerender() {
        let cli = Cli::try_parse_from(["roadtrip-ssg"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_preview_defaults() {
        let cli = Cli::try_parse_from(["roadtrip-ssg", "preview", "--site", "giw"]).unwrap();
        match cli.command {
            Some(Command::Preview { site, port, root }) => {
                assert_eq!(site, "giw");
                assert_eq!(port, 8003);
                assert_eq!(root, PathBuf::from("."));
            }
            _ => panic!("expected preview"),
        }
    }

    #[test]
    fn test_checkout_parses_typed_args() {
        let cli = Cli::try_parse_from([
            "roadtrip-ssg",
            "checkout",
            "--site",
            "ama",
            "--vehicle",
            "tesla_cybertruck",
            "--pickup",
            "2026-07-01",
            "--dropoff",
            "2026-07-08",
            "--location",
            "Los Angeles",
            "--email",
            "a@b.de",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Checkout {
                vehicle, location, ..
            }) => {
                assert_eq!(vehicle, VehicleType::TeslaCybertruck);
                assert_eq!(location, PickupLocation::LosAngeles);
            }
            _ => panic!("expected checkout"),
        }
    }

    #[test]
    fn test_unknown_vehicle_is_rejected() {
        let result = Cli::try_parse_from([
            "roadtrip-ssg",
            "estimate",
            "--vehicle",
            "model_s",
            "--pickup",
            "2026-07-01",
            "--dropoff",
            "2026-07-02",
        ]);
        assert!(result.is_err());
    }
}
