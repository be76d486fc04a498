//! Smooths the y column of a two-column CSV signature and writes the result.
//!
//! Usage: `cargo run --example smooth_csv -- input.csv output.csv [SG:M-nL-nR] [from] [to]`

use std::error::Error;

use savgol_signature::{catalog, read_signature_from_path, write_signature_to_path};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (input_path, output_path) = match (args.first(), args.get(1)) {
        (Some(input), Some(output)) => (input.as_str(), output.as_str()),
        _ => return Err("usage: smooth_csv <input.csv> <output.csv> [SG:M-nL-nR] [from] [to]".into()),
    };
    let filter_name = args.get(2).map(String::as_str).unwrap_or("SG:2-10-10");
    let from = args.get(3).map(|s| s.parse::<f64>()).transpose()?.unwrap_or(f64::NEG_INFINITY);
    let to = args.get(4).map(|s| s.parse::<f64>()).transpose()?.unwrap_or(f64::INFINITY);

    let signature = read_signature_from_path(input_path, "x", "y")?;
    let filter = catalog::find(filter_name)?;
    let smoothed = filter.apply(&signature, from, to)?;

    write_signature_to_path(output_path, &smoothed, "x", "y")?;
    tracing::info!(points = smoothed.len(), %filter, output = output_path, "smoothed signature written");
    Ok(())
}
