mod configuration;
mod database;

use anyhow::{Context, Result};
use clap::Parser;
use gtfs_records::{DropColumn, GtfsReader, LegacyTranslations};
use log::info;

use crate::configuration::Configuration;
use crate::database::DatabaseConnection;

fn reader(config: &Configuration) -> GtfsReader {
    let reader = GtfsReader::default()
        .skip_invalid_records(config.skip_invalid)
        .quoted_fields(config.quoted)
        .parallel(config.parallel);
    if config.legacy_nmbs {
        reader
            .transform("trips.txt", DropColumn::new("trip_type"))
            .transform("translations.txt", LegacyTranslations)
    } else {
        reader
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let config = Configuration::parse();

    let gtfs = reader(&config)
        .read(&config.feed)
        .with_context(|| format!("Read GTFS {}", config.feed))?;

    if config.json {
        let stdout = std::io::stdout();
        serde_json::to_writer(stdout.lock(), &gtfs).context("Write GTFS as json")?;
        println!();
    } else {
        gtfs.print_stats();
    }

    if let Some(path) = &config.database {
        let mut db = DatabaseConnection::open(path)?;
        if config.reset {
            db.reset()?;
        }
        db.add_gtfs(&gtfs)?;
        info!("{} objects written in {}", gtfs.len(), path);
    }
    Ok(())
}
