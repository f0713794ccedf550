//! Command-line front end for the wizard helpers.
//!
//! Run with: cargo run --example wizard -- --help
//! Set `RUST_LOG=wizard=debug` to see the UDP traffic.

use std::net::Ipv4Addr;
use std::time::Duration;

use clap::{Parser, Subcommand};
use wizard::{
    Rgb, SceneTable, SearchConfig, bulb_from, get_scene_names, get_state, parser_to_dict,
    search, set_bulb, turn_off,
};

#[derive(Parser)]
#[command(name = "wizard")]
#[command(about = "Discover and control WiZ bulbs", long_about = None)]
struct Cli {
    /// IP address of the bulb (not required for search and scenes)
    #[arg(short, long, global = true)]
    ip: Option<Ipv4Addr>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find bulbs on the local network and print their state
    Search {
        /// Broadcast address of the subnet to search
        #[arg(short, long, default_value = "192.168.1.255")]
        broadcast: Ipv4Addr,
        /// How long to wait for replies, in seconds
        #[arg(short, long, default_value = "5")]
        timeout: u64,
    },

    /// List the known scene names
    Scenes,

    /// Print the bulb's state as an attribute map
    State,

    /// Set a color and/or brightness, or a scene
    Set {
        /// RGB color as r,g,b
        #[arg(long)]
        rgb: Option<Rgb>,
        /// Brightness level
        #[arg(long)]
        brightness: Option<u8>,
        /// Scene name, e.g. "Ocean"; overrides rgb and brightness
        #[arg(long)]
        scene: Option<String>,
    },

    /// Turn the bulb off
    Off,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    let scenes = SceneTable::builtin();

    match cli.command {
        Commands::Search { broadcast, timeout } => {
            let config = SearchConfig {
                broadcast,
                timeout: Duration::from_secs(timeout),
                ..Default::default()
            };
            let bulbs = search(&config).await?;
            if bulbs.is_empty() {
                println!("No bulbs found on {broadcast}.");
                return Ok(());
            }

            println!("Found {} bulb(s):", bulbs.len());
            for bulb in &bulbs {
                match get_state(bulb).await {
                    Ok(state) => println!(
                        "  - {} ({}): {}",
                        bulb.ip(),
                        bulb.mac().unwrap_or("?"),
                        parser_to_dict(&state).to_value()?
                    ),
                    Err(e) => eprintln!("  - {}: {}", bulb.ip(), e),
                }
            }
        }
        Commands::Scenes => {
            for name in get_scene_names(&scenes) {
                println!("{name}");
            }
        }
        Commands::State => {
            let bulb = bulb_from(require_ip(cli.ip)?, None);
            let state = get_state(&bulb).await?;
            println!("{}", serde_json::to_string_pretty(&parser_to_dict(&state))?);
        }
        Commands::Set {
            rgb,
            brightness,
            scene,
        } => {
            let bulb = bulb_from(require_ip(cli.ip)?, None);
            set_bulb(&bulb, &scenes, rgb, brightness, scene.as_deref()).await?;
            println!("Updated {}", bulb.ip());
        }
        Commands::Off => {
            let bulb = bulb_from(require_ip(cli.ip)?, None);
            turn_off(&bulb).await?;
            println!("Turned off {}", bulb.ip());
        }
    }

    Ok(())
}

fn require_ip(ip: Option<Ipv4Addr>) -> Result<Ipv4Addr, String> {
    ip.ok_or_else(|| "--ip is required for this command".to_string())
}
