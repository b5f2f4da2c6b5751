//! # Spectral Gap Report
//!
//! Checks the published eigenvalues, or a JSON config given as the first
//! argument, and prints the report both as a table and as JSON.
//!
//! Run: `cargo run -p spectral_verifier --example gap_report '{"tolerance": 1e-12}'`

use spectral_verifier::{SpectralVerifier, VerifierConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(json) => serde_json::from_str::<VerifierConfig>(&json)?,
        None => VerifierConfig::published(),
    };
    let verifier = SpectralVerifier::new(config)?;
    let report = verifier.describe();

    println!("━━━ Spectral gap ━━━");
    println!("  λ₀(P)          {:>16.12}", verifier.lambda0_p());
    println!("  λ₀(NP)         {:>16.12}", verifier.lambda0_np());
    println!("  gap            {:>16.12}", report.gap);
    println!("  reference      {:>16.12}", verifier.reference_gap());
    println!("  tolerance      {:>16.3e}", verifier.tolerance());
    println!();
    println!("  positive                 {}", report.positive);
    println!("  within tolerance         {}", report.within_tolerance);
    println!("  eigenvalues in (0, 1)    {}", report.eigenvalues_in_unit_interval);
    println!();
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
