//! # godel_codec
//!
//! Prime-power (Gödel) numbering of Turing-machine configurations.
//!
//! A configuration `(state, head, tape)` maps to
//! `2^state · 3^head · 5^(tape[0]+1) · 7^(tape[1]+1) · …` and back. The map
//! is a bijection between valid configurations (head at most one past the
//! end of a finite tape, non-negative symbols) and the naturals it produces.
//!
//! ## Usage
//!
//! ```
//! use godel_codec::prelude::*;
//!
//! let tm = TMConfig::new(0, 1, vec![0, 1]);
//! let value = encode(&tm).unwrap();
//! assert_eq!(value.to_string(), "735");
//! assert_eq!(decode(&value).unwrap(), tm);
//! ```

pub mod codec;
pub mod encoded;
pub mod error;
pub mod primes;
#[cfg(test)]
mod tests;
pub mod tm_config;

pub use codec::{decode, encode, Codec, CodecConfig};
pub use encoded::EncodedValue;
pub use error::DomainError;
pub use primes::PrimeTable;
pub use tm_config::{Symbol, TMConfig};

pub mod prelude {
    pub use crate::codec::*;
    pub use crate::encoded::*;
    pub use crate::error::DomainError;
    pub use crate::tm_config::*;
}
