//! CLI module for the place review API
//!
//! Provides the `serve` subcommand, optionally seeding the in-memory
//! stores with demo data at startup.

pub mod seed;
pub mod serve;

use clap::{Args, Parser, Subcommand};

/// Place Review API - phone-number accounts, reviews, and cached place search
#[derive(Parser)]
#[command(name = "place-review-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve(ServeArgs),
}

/// Arguments for the serve command
#[derive(Args)]
pub struct ServeArgs {
    /// Populate the stores with random demo data before serving
    #[arg(long)]
    pub seed: bool,

    /// Number of demo users to generate
    #[arg(long, default_value_t = 20)]
    pub seed_users: usize,

    /// Number of demo places to generate
    #[arg(long, default_value_t = 30)]
    pub seed_places: usize,

    /// Number of demo reviews to attempt (duplicate pairs are skipped)
    #[arg(long, default_value_t = 100)]
    pub seed_reviews: usize,
}

impl ServeArgs {
    pub fn seed_counts(&self) -> Option<seed::SeedCounts> {
        self.seed.then_some(seed::SeedCounts {
            users: self.seed_users,
            places: self.seed_places,
            reviews: self.seed_reviews,
        })
    }
}
