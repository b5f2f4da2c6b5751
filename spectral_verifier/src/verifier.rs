//! Arithmetic consistency checks on a pair of ground-state eigenvalues.
//!
//! # Checks
//!
//! Given `λ₀(P)` and `λ₀(NP)` the verifier answers three questions:
//! 1. Is the gap `λ₀(P) - λ₀(NP)` positive?
//! 2. Is it within `tolerance` of a reference value (strictly)?
//! 3. Do both eigenvalues lie in the open unit interval?
//!
//! Every value comes in through [`VerifierConfig`]; the published constants
//! are only its default. Plain `f64` arithmetic, no eigensolver.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{LAMBDA0_NP, LAMBDA0_P, REFERENCE_GAP, TOLERANCE};
use crate::error::{DomainError, Result};

/// Inputs to a [`SpectralVerifier`].
///
/// Reads and writes camelCase JSON (`lambda0P`, `lambda0NP`,
/// `referenceGap`, `tolerance`); omitted fields take the published values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VerifierConfig {
    /// Ground-state eigenvalue λ₀(P)
    pub lambda0_p: f64,
    /// Ground-state eigenvalue λ₀(NP)
    #[serde(rename = "lambda0NP")]
    pub lambda0_np: f64,
    /// Gap the computed one is compared against
    pub reference_gap: f64,
    /// Strict bound on |computed - reference|; must be positive
    pub tolerance: f64,
}

impl VerifierConfig {
    /// The published constants.
    pub fn published() -> Self {
        Self {
            lambda0_p: LAMBDA0_P,
            lambda0_np: LAMBDA0_NP,
            reference_gap: REFERENCE_GAP,
            tolerance: TOLERANCE,
        }
    }

    /// Published reference and tolerance around caller-supplied eigenvalues.
    pub fn with_eigenvalues(lambda0_p: f64, lambda0_np: f64) -> Self {
        Self {
            lambda0_p,
            lambda0_np,
            ..Self::published()
        }
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self::published()
    }
}

/// Outcome of [`SpectralVerifier::describe`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapReport {
    pub gap: f64,
    pub within_tolerance: bool,
    pub positive: bool,
    pub eigenvalues_in_unit_interval: bool,
}

/// Immutable holder of two eigenvalues, a reference gap and a tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralVerifier {
    lambda0_p: f64,
    lambda0_np: f64,
    reference_gap: f64,
    tolerance: f64,
}

impl SpectralVerifier {
    /// Fails only if the tolerance is not a positive finite number.
    pub fn new(config: VerifierConfig) -> Result<Self> {
        if !(config.tolerance > 0.0 && config.tolerance.is_finite()) {
            debug!("rejected verifier config {:?}", config);
            return Err(DomainError::NonPositiveTolerance(config.tolerance));
        }
        debug!(
            "verifier over lambda0_p={} lambda0_np={} reference_gap={} tolerance={:e}",
            config.lambda0_p, config.lambda0_np, config.reference_gap, config.tolerance
        );
        Ok(Self {
            lambda0_p: config.lambda0_p,
            lambda0_np: config.lambda0_np,
            reference_gap: config.reference_gap,
            tolerance: config.tolerance,
        })
    }

    /// Verifier over the published constants.
    pub fn published() -> Self {
        Self {
            lambda0_p: LAMBDA0_P,
            lambda0_np: LAMBDA0_NP,
            reference_gap: REFERENCE_GAP,
            tolerance: TOLERANCE,
        }
    }

    pub fn lambda0_p(&self) -> f64 {
        self.lambda0_p
    }

    pub fn lambda0_np(&self) -> f64 {
        self.lambda0_np
    }

    pub fn reference_gap(&self) -> f64 {
        self.reference_gap
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Spectral gap: λ₀(P) - λ₀(NP)
    pub fn compute_gap(&self) -> f64 {
        self.lambda0_p - self.lambda0_np
    }

    /// True iff the gap is strictly positive.
    pub fn verify_positive(&self) -> bool {
        self.compute_gap() > 0.0
    }

    /// True iff `|gap - reference_gap| < tolerance`.
    ///
    /// Strict, so a difference exactly equal to `tolerance` fails. A NaN
    /// anywhere also fails.
    pub fn verify_within_tolerance(&self, reference_gap: f64, tolerance: f64) -> bool {
        (self.compute_gap() - reference_gap).abs() < tolerance
    }

    /// [`verify_within_tolerance`](Self::verify_within_tolerance) against the
    /// configured reference and tolerance.
    pub fn verify_reference(&self) -> bool {
        self.verify_within_tolerance(self.reference_gap, self.tolerance)
    }

    /// Both eigenvalues in the open interval (0, 1).
    pub fn eigenvalues_in_unit_interval(&self) -> bool {
        let open_unit = |x: f64| x > 0.0 && x < 1.0;
        open_unit(self.lambda0_p) && open_unit(self.lambda0_np)
    }

    /// Every check at once. Total: defined for any stored values.
    pub fn describe(&self) -> GapReport {
        let report = GapReport {
            gap: self.compute_gap(),
            within_tolerance: self.verify_reference(),
            positive: self.verify_positive(),
            eigenvalues_in_unit_interval: self.eigenvalues_in_unit_interval(),
        };
        debug!("{:?}", report);
        report
    }
}

impl Default for SpectralVerifier {
    fn default() -> Self {
        Self::published()
    }
}

// ─── Kani formal verification harnesses ─────────────────────────────────────
#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Prove describe() never panics for any f64 inputs.
    #[kani::proof]
    fn describe_no_panic() {
        let verifier = SpectralVerifier {
            lambda0_p: kani::any(),
            lambda0_np: kani::any(),
            reference_gap: kani::any(),
            tolerance: kani::any(),
        };
        let _ = verifier.describe();
    }

    /// Prove a difference equal to the tolerance is never within it.
    #[kani::proof]
    fn tolerance_bound_is_strict() {
        let reference: f64 = kani::any();
        let verifier = SpectralVerifier {
            lambda0_p: kani::any(),
            lambda0_np: kani::any(),
            ..SpectralVerifier::published()
        };
        let distance = (verifier.compute_gap() - reference).abs();
        assert!(!verifier.verify_within_tolerance(reference, distance));
    }

    /// Prove construction rejects every non-positive tolerance.
    #[kani::proof]
    fn non_positive_tolerance_rejected() {
        let tolerance: f64 = kani::any();
        kani::assume(!(tolerance > 0.0));
        let config = VerifierConfig {
            tolerance,
            ..VerifierConfig::published()
        };
        assert!(matches!(
            SpectralVerifier::new(config),
            Err(DomainError::NonPositiveTolerance(_))
        ));
    }
}
