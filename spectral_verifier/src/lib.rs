//! # spectral_verifier
//!
//! Numeric consistency checks for the published spectral-gap constants.
//!
//! ```text
//! λ₀(P)  = 0.2221441469
//! λ₀(NP) = 0.168176418230
//!   gap  = λ₀(P) - λ₀(NP) ≈ 0.0539677287   (tolerance 1e-8, strict)
//! ```
//!
//! ## Usage
//!
//! ```
//! use spectral_verifier::prelude::*;
//!
//! let verifier = SpectralVerifier::new(VerifierConfig::published()).unwrap();
//! let report = verifier.describe();
//! assert!(report.positive && report.within_tolerance);
//! ```

pub mod constants;
pub mod error;
pub mod verifier;

pub use error::DomainError;
pub use verifier::{GapReport, SpectralVerifier, VerifierConfig};

pub mod prelude {
    pub use crate::constants::*;
    pub use crate::error::DomainError;
    pub use crate::verifier::*;
}
