//! Published spectral constants.
//!
//! Ground-state eigenvalues of the two spectral constructions and the gap
//! between them, as stated alongside their machine-checked bounds.

/// Ground-state eigenvalue of the P-side construction.
pub const LAMBDA0_P: f64 = 0.222_144_146_9;

/// Ground-state eigenvalue of the NP-side construction.
pub const LAMBDA0_NP: f64 = 0.168_176_418_230;

/// Published gap `LAMBDA0_P - LAMBDA0_NP`.
pub const REFERENCE_GAP: f64 = 0.053_967_728_7;

/// Absolute error allowed between the computed and published gap.
pub const TOLERANCE: f64 = 1e-8;

// ─── Kani formal verification harnesses ─────────────────────────────────────
#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Prove the published constants are finite and in their declared ranges.
    #[kani::proof]
    fn constants_are_valid() {
        assert!(LAMBDA0_P > 0.0 && LAMBDA0_P < 1.0);
        assert!(LAMBDA0_NP > 0.0 && LAMBDA0_NP < 1.0);
        assert!(REFERENCE_GAP > 0.0 && REFERENCE_GAP.is_finite());
        assert!(TOLERANCE > 0.0 && TOLERANCE.is_finite());
    }
}
