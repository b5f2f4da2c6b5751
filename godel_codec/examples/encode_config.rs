//! # Encoding walkthrough
//!
//! Encodes a handful of configurations, prints their Gödel numbers, decodes
//! them back, and shows how malformed numbers are rejected.
//!
//! Run: `RUST_LOG=debug cargo run -p godel_codec --example encode_config [NUMBER...]`

use godel_codec::{Codec, CodecConfig, DomainError, EncodedValue, TMConfig};

fn main() -> Result<(), DomainError> {
    env_logger::init();

    let codec = Codec::with_config(CodecConfig::with_alphabet(2))?;

    println!("━━━ Encoding ━━━");
    let configs = [
        TMConfig::new(1, 0, vec![]),
        TMConfig::new(0, 1, vec![0, 1]),
        TMConfig::new(2, 3, vec![1, 1, 0]),
    ];
    for tm in &configs {
        let value = codec.encode(tm)?;
        let back = codec.decode(&value)?;
        println!(
            "  state={:<3} head={:<3} tape={:<12} → {:>10}  (round trip: {})",
            tm.state(),
            tm.head(),
            format!("{:?}", tm.tape()),
            value,
            back == *tm
        );
    }
    println!();

    println!("━━━ Decoding ━━━");
    let inputs: Vec<String> = std::env::args().skip(1).collect();
    let inputs = if inputs.is_empty() {
        ["735", "7", "9", "0"].map(String::from).to_vec()
    } else {
        inputs
    };
    for text in &inputs {
        match text.parse::<EncodedValue>().and_then(|v| codec.decode(&v)) {
            Ok(tm) => println!(
                "  {:>10} → state={} head={} tape={:?}",
                text,
                tm.state(),
                tm.head(),
                tm.tape()
            ),
            Err(err) => println!("  {:>10} → DomainError: {}", text, err),
        }
    }

    Ok(())
}
