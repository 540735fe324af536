use std::env;
use std::error::Error;
use std::path::PathBuf;

use log::{info, LevelFilter};

use hv_wfg::metrics::hv_wfg::{Strategy, StrategyConfig};
use hv_wfg::metrics::{compute_hypervolume, HyperVolume};

/// Calculate the hyper-volume of the front stored in a JSON file with every strategy. The file
/// contains the points, the reference point and, optionally, the strategy and the objective
/// direction:
///
/// `{ "points": [[1.0, 2.0], [2.0, 1.0]], "reference_point": [3.0, 3.0] }`
///
/// Run the example with the bundled front with 4 objectives:
///
/// `cargo run --example hv_from_json --release`
///
/// or pass the path to another file as first argument.
fn main() -> Result<(), Box<dyn Error>> {
    // Add log
    env_logger::builder().filter_level(LevelFilter::Info).init();

    let file = match env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("demos")
            .join("data")
            .join("front_4d.json"),
    };

    let hv = HyperVolume::from_file(&file)?;
    info!(
        "Loaded {} points with {} objectives from {:?}",
        hv.front().len(),
        hv.front().number_of_objectives(),
        file
    );
    info!("Hyper-volume is {}", hv.compute()?);

    // all strategies return the same value
    for strategy in [
        Strategy::NoPreprocessing,
        Strategy::Presort,
        Strategy::Slice2D,
        Strategy::Slice3D,
    ] {
        let config = StrategyConfig::new(strategy, hv.config().direction);
        let value = compute_hypervolume(hv.front(), hv.reference_point(), &config)?;
        info!("Hyper-volume with {} is {}", strategy, value);
    }

    Ok(())
}
