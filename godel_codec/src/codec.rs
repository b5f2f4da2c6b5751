//! Prime-power numbering of Turing-machine configurations.
//!
//! # Scheme
//!
//! ```text
//! encode(c) = 2^state · 3^head · Π_{j=0}^{n-1} p_{j+2}^(tape[j] + 1)
//! ```
//!
//! where `p_i` is the i-th prime counted from `p_0 = 2`. Tape exponents are
//! shifted by one so that symbol 0 still leaves a factor behind; this is
//! what lets the decoder recover the tape length from the number alone.
//!
//! # Decoding
//!
//! The exponents of 2 and 3 give state and head. Tape primes are then
//! stripped in order until the cofactor reaches 1. A tape prime with a zero
//! exponent while the cofactor is still above 1 means the tape has a hole,
//! which no encoder output contains, so the value is rejected. Since every
//! prime from 5 upwards is a tape prime, this also covers "foreign" factors.
//!
//! All arithmetic is exact; nothing here touches floating point.

use std::sync::OnceLock;

use log::debug;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::encoded::EncodedValue;
use crate::error::{DomainError, Result};
use crate::primes::{PrimeTable, HEAD_PRIME, STATE_PRIME};
use crate::tm_config::{Symbol, TMConfig};

/// Recognised codec options.
///
/// Deserializes from `{"alphabetSize": k}`; omitted fields take defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodecConfig {
    /// Symbols must lie in `[0, k)` when set. `None` only rules out
    /// negative symbols.
    pub alphabet_size: Option<u64>,
}

impl CodecConfig {
    pub fn with_alphabet(alphabet_size: u64) -> Self {
        Self {
            alphabet_size: Some(alphabet_size),
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self.alphabet_size {
            Some(0) => Err(DomainError::InvalidAlphabet),
            _ => Ok(()),
        }
    }

    pub(crate) fn check_symbol(&self, index: usize, symbol: Symbol) -> Result<()> {
        if symbol < 0 {
            return Err(DomainError::NegativeSymbol { index, symbol });
        }
        if let Some(alphabet_size) = self.alphabet_size {
            if symbol as u64 >= alphabet_size {
                return Err(DomainError::SymbolOutOfAlphabet {
                    index,
                    symbol,
                    alphabet_size,
                });
            }
        }
        Ok(())
    }
}

/// Encoder/decoder between [`TMConfig`] and [`EncodedValue`].
///
/// Holds its options and a prime cache; both are read-only from the
/// caller's point of view, so one codec can be shared across threads.
#[derive(Debug, Default)]
pub struct Codec {
    config: CodecConfig,
    primes: PrimeTable,
}

impl Codec {
    /// Codec with an unconstrained alphabet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CodecConfig) -> Result<Self> {
        config.validate()?;
        debug!("codec configured with {:?}", config);
        Ok(Self {
            config,
            primes: PrimeTable::new(),
        })
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode `tm` as a single natural number.
    ///
    /// Fails if a symbol is negative or outside the alphabet, if the head is
    /// beyond one-past-end, or if an exponent does not fit in 32 bits.
    pub fn encode(&self, tm: &TMConfig) -> Result<EncodedValue> {
        let value = self
            .encode_inner(tm)
            .inspect_err(|err| debug!("encode rejected {:?}: {}", tm, err))?;
        debug!(
            "encoded state={} head={} tape_len={} into {} bits",
            tm.state(),
            tm.head(),
            tm.tape().len(),
            value.bits()
        );
        Ok(value)
    }

    /// Recover the unique configuration whose encoding is `value`.
    pub fn decode(&self, value: &EncodedValue) -> Result<TMConfig> {
        let tm = self
            .decode_inner(value)
            .inspect_err(|err| debug!("decode rejected {}: {}", value, err))?;
        debug!(
            "decoded {} bits into state={} head={} tape_len={}",
            value.bits(),
            tm.state(),
            tm.head(),
            tm.tape().len()
        );
        Ok(tm)
    }

    /// Whether `value` is the encoding of some valid configuration.
    pub fn is_valid_encoding(&self, value: &EncodedValue) -> bool {
        self.decode_inner(value).is_ok()
    }

    fn encode_inner(&self, tm: &TMConfig) -> Result<EncodedValue> {
        tm.check(&self.config)?;

        let head = u32::try_from(tm.head())
            .map_err(|_| DomainError::ExponentOverflow { field: "head" })?;
        let mut value =
            BigUint::from(STATE_PRIME).pow(tm.state()) * BigUint::from(HEAD_PRIME).pow(head);

        for (cell, &symbol) in tm.tape().iter().enumerate() {
            let exponent = symbol
                .checked_add(1)
                .and_then(|e| u32::try_from(e).ok())
                .ok_or(DomainError::ExponentOverflow {
                    field: "tape symbol",
                })?;
            value *= BigUint::from(self.primes.tape_prime(cell)).pow(exponent);
        }

        Ok(EncodedValue::new(value))
    }

    fn decode_inner(&self, value: &EncodedValue) -> Result<TMConfig> {
        if value.is_zero() {
            return Err(DomainError::NonPositiveValue);
        }

        let mut rest = value.as_biguint().clone();
        let state = u32::try_from(strip_power(&mut rest, STATE_PRIME))
            .map_err(|_| DomainError::ExponentOverflow { field: "state" })?;
        let head = usize::try_from(strip_power(&mut rest, HEAD_PRIME))
            .map_err(|_| DomainError::ExponentOverflow { field: "head" })?;

        let mut tape = Vec::new();
        while !rest.is_one() {
            let cell = tape.len();
            let exponent = strip_power(&mut rest, self.primes.tape_prime(cell));
            if exponent == 0 {
                return Err(DomainError::NonContiguousTape { index: cell });
            }
            let symbol = Symbol::try_from(exponent - 1).map_err(|_| {
                DomainError::ExponentOverflow {
                    field: "tape symbol",
                }
            })?;
            self.config.check_symbol(cell, symbol)?;
            tape.push(symbol);
        }

        if head > tape.len() {
            return Err(DomainError::HeadOutOfRange {
                head,
                tape_len: tape.len(),
            });
        }

        Ok(TMConfig::new(state, head, tape))
    }
}

/// Divide out every factor of `base` from `rest`, returning the count.
///
/// Powers of two come off as a single shift. Other bases are divided by
/// `base`, `base²`, `base⁴`, … while those divide, then by the same powers
/// on the way back down, so the division count is logarithmic in the
/// exponent.
fn strip_power(rest: &mut BigUint, base: u64) -> u64 {
    if rest.is_zero() {
        return 0;
    }
    if base == 2 {
        let zeros = rest.trailing_zeros().unwrap_or(0);
        *rest >>= zeros;
        return zeros;
    }

    let mut exponent = 0u64;
    let mut powers: Vec<BigUint> = Vec::new();
    let mut power = BigUint::from(base);
    while divides(&power, rest) {
        *rest /= &power;
        exponent += 1u64 << powers.len();
        let next = &power * &power;
        powers.push(power);
        power = next;
    }
    // What is left has an exponent below 2^powers.len(); take it bit by bit.
    for (level, power) in powers.iter().enumerate().rev() {
        if divides(power, rest) {
            *rest /= power;
            exponent += 1u64 << level;
        }
    }
    exponent
}

fn divides(divisor: &BigUint, value: &BigUint) -> bool {
    divisor.bits() <= value.bits() && (value % divisor).is_zero()
}

fn default_codec() -> &'static Codec {
    static CODEC: OnceLock<Codec> = OnceLock::new();
    CODEC.get_or_init(Codec::new)
}

/// Encode with the shared, unconstrained codec.
pub fn encode(tm: &TMConfig) -> Result<EncodedValue> {
    default_codec().encode(tm)
}

/// Decode with the shared, unconstrained codec.
pub fn decode(value: &EncodedValue) -> Result<TMConfig> {
    default_codec().decode(value)
}
