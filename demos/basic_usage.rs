//! Example usage of the Savitzky-Golay signature smoothing crate

use savgol_signature::{catalog, SavitzkyGolayFilter, Signature};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    println!("=== Savitzky-Golay Signature Smoothing ===\n");

    // A reflectance-like curve with some deterministic noise
    let signature: Signature = (0..40)
        .map(|i| {
            let x = 400.0 + 10.0 * i as f64;
            let y = 0.3 + 0.2 * (x / 80.0).sin() + 0.02 * (i as f64 * 2.3).sin();
            (x, y)
        })
        .collect();

    println!("Original signature:");
    print_signature(&signature);

    // 1. Catalog filter over the whole curve
    println!("\n1. SG:2-5-5 over the whole curve:");
    let filter = catalog::find("SG:2-5-5")?;
    print_signature(&filter.apply_all(&signature)?);

    // 2. Only a sub-range of the abscissa
    println!("\n2. SG:2-2-2 between 500 and 600 (inclusive):");
    let filter = catalog::find("SG:2-2-2")?;
    print_signature(&filter.apply(&signature, 500.0, 600.0)?);

    // 3. A caller-defined filter
    println!("\n3. Custom 3-point moving average:");
    let moving_average = SavitzkyGolayFilter::new(0, 1, 1, vec![1.0 / 3.0; 3])?;
    print_signature(&moving_average.apply_all(&signature)?);

    // 4. The catalog
    println!("\n4. Available filters:");
    for name in catalog::names() {
        println!("  {name}");
    }

    Ok(())
}

fn print_signature(signature: &Signature) {
    for (i, point) in signature.iter().enumerate() {
        print!("{:6.3}", point.y);
        if (i + 1) % 10 == 0 {
            println!();
        }
    }
    if signature.len() % 10 != 0 {
        println!();
    }
}
