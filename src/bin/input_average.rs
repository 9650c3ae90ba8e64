use anyhow::Result;

use csv_average::input::{StdinSource, average_input};

fn main() -> Result<()> {
    env_logger::init();

    let report = average_input(&mut StdinSource)?;
    println!("{report}");
    Ok(())
}
