//! WTP Cache CLI
//!
//! Picks a random creature and prints its cached artwork paths as JSON.

use clap::{Parser, Subcommand};
use std::collections::BTreeSet;
use std::path::PathBuf;
use wtp_cache::config::default_config_path;
use wtp_cache::{
    cache_key, get_creature_and_images, CacheResolver, Config, Record, ResultRecord, Selector,
};

/// Who's That Pokemon artwork cache
#[derive(Parser, Debug)]
#[command(name = "wtp_cache")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML config file (default: ../config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pick a random creature and resolve its artwork
    Random {
        /// Generation to pick from (repeatable)
        #[arg(short = 'g', long = "gen", required = true)]
        generations: Vec<i64>,
    },
    /// Resolve artwork for a known creature
    Resolve {
        #[arg(long)]
        name: String,
        #[arg(long)]
        id: String,
        #[arg(short = 'g', long = "gen", default_value_t = 0)]
        generation: i64,
    },
    /// Print the cache key for a creature name
    Key { name: String },
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let result = match args.command {
        Command::Key { name } => {
            println!("{}", cache_key(&name));
            return;
        }
        Command::Random { generations } => {
            let config = load_config(args.config);
            let generations: BTreeSet<i64> = generations.into_iter().collect();
            let selector = Selector::from_config(&config);
            let resolver = CacheResolver::from_config(&config);
            get_creature_and_images(&selector, &resolver, &generations, &mut rand::rng())
        }
        Command::Resolve {
            name,
            id,
            generation,
        } => {
            let config = load_config(args.config);
            let resolver = CacheResolver::from_config(&config);
            let record = Record {
                name,
                id,
                group: generation,
            };
            resolver
                .resolve(&record)
                .map(|artifacts| ResultRecord::new(record, artifacts))
        }
    };

    match result.map(|record| serde_json::to_string_pretty(&record)) {
        Ok(Ok(json)) => println!("{}", json),
        Ok(Err(e)) => {
            log::error!("Failed to serialize result: {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Load the config or exit; nothing can run without a cache directory
fn load_config(path: Option<PathBuf>) -> Config {
    let path = path.unwrap_or_else(default_config_path);
    match Config::load(&path) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}
