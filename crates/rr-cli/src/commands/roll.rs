use std::path::Path;

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use rr_core::{RollSettings, handle_query};

use crate::store;

/// Roll once from the command line and print the outcome.
pub fn run(query: &[String], seed: Option<u64>, settings_file: Option<&Path>) -> Result<(), String> {
    let overrides = match settings_file {
        Some(path) => store::load_overrides(path).map_err(|e| e.to_string())?,
        None => serde_json::Map::new(),
    };
    let settings = RollSettings::resolve(&overrides);

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let query = query.join(" ");
    for outcome in handle_query(&query, &settings, &mut rng) {
        println!("{}", outcome.title.bold());
        for line in outcome.subtitle.lines() {
            println!("  {}", line.dimmed());
        }
    }

    Ok(())
}
