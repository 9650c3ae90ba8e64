use anyhow::{Context, Result};

use csv_average::config::AveragerConfig;
use csv_average::data::loader::average_directory;

fn main() -> Result<()> {
    env_logger::init();

    let config = AveragerConfig::default();
    let report = average_directory(&config)
        .with_context(|| format!("averaging {}", config.directory.display()))?;

    println!("{report}");
    Ok(())
}
