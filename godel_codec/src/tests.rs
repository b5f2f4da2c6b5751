use std::thread;

use num_bigint::BigUint;
use num_traits::One;
use proptest::prelude::*;

use crate::{decode, encode, Codec, CodecConfig, DomainError, EncodedValue, Symbol, TMConfig};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn value(n: u64) -> EncodedValue {
    EncodedValue::from(n)
}

// ── Concrete encodings ─────────────────────────────────────────────────

#[test]
fn state_only_encodes_as_power_of_two() {
    init_logger();
    let tm = TMConfig::new(1, 0, vec![]);
    assert_eq!(encode(&tm).unwrap(), value(2));
}

#[test]
fn small_tape_encodes_to_735() {
    init_logger();
    // 2^0 · 3^1 · 5^1 · 7^2
    let tm = TMConfig::new(0, 1, vec![0, 1]);
    assert_eq!(encode(&tm).unwrap(), value(735));
}

#[test]
fn blank_state_zero_encodes_to_one() {
    assert_eq!(encode(&TMConfig::blank(0)).unwrap(), value(1));
    assert_eq!(decode(&value(1)).unwrap(), TMConfig::blank(0));
}

#[test]
fn long_tape_uses_successive_primes() {
    // 5^1 · 7^1 · 11^1 · 13^2 · 17^1
    let tm = TMConfig::new(0, 0, vec![0, 0, 0, 1, 0]);
    let expected = BigUint::from(5u32 * 7 * 11 * 13 * 13 * 17);
    assert_eq!(encode(&tm).unwrap().as_biguint(), &expected);
}

#[test]
fn head_past_end_is_allowed() {
    let tm = TMConfig::new(2, 2, vec![1, 0]);
    // 2^2 · 3^2 · 5^2 · 7^1
    assert_eq!(encode(&tm).unwrap(), value(4 * 9 * 25 * 7));
    assert!(tm.is_head_past_end());
}

// ── Encode rejections ──────────────────────────────────────────────────

#[test]
fn negative_symbol_is_rejected() {
    init_logger();
    let tm = TMConfig::new(0, 0, vec![-1]);
    assert_eq!(
        encode(&tm).unwrap_err(),
        DomainError::NegativeSymbol {
            index: 0,
            symbol: -1,
        }
    );
}

#[test]
fn negative_symbol_reports_its_cell() {
    let tm = TMConfig::new(0, 0, vec![0, 3, -7]);
    assert_eq!(
        encode(&tm).unwrap_err(),
        DomainError::NegativeSymbol {
            index: 2,
            symbol: -7,
        }
    );
}

#[test]
fn head_beyond_blank_cell_is_rejected() {
    let tm = TMConfig::new(0, 2, vec![0]);
    assert_eq!(
        encode(&tm).unwrap_err(),
        DomainError::HeadOutOfRange {
            head: 2,
            tape_len: 1,
        }
    );
}

#[test]
fn head_on_empty_tape_must_be_zero() {
    let tm = TMConfig::new(4, 1, vec![]);
    assert_eq!(
        encode(&tm).unwrap_err(),
        DomainError::HeadOutOfRange {
            head: 1,
            tape_len: 0,
        }
    );
}

#[test]
fn symbol_outside_alphabet_is_rejected() {
    let codec = Codec::with_config(CodecConfig::with_alphabet(2)).unwrap();
    let tm = TMConfig::new(0, 0, vec![1, 2]);
    assert_eq!(
        codec.encode(&tm).unwrap_err(),
        DomainError::SymbolOutOfAlphabet {
            index: 1,
            symbol: 2,
            alphabet_size: 2,
        }
    );
}

#[test]
fn oversized_symbol_overflows_exponent() {
    let tm = TMConfig::new(0, 0, vec![u32::MAX as Symbol]);
    assert_eq!(
        encode(&tm).unwrap_err(),
        DomainError::ExponentOverflow {
            field: "tape symbol",
        }
    );
    let tm = TMConfig::new(0, 0, vec![Symbol::MAX]);
    assert_eq!(
        encode(&tm).unwrap_err(),
        DomainError::ExponentOverflow {
            field: "tape symbol",
        }
    );
}

// ── Decode ─────────────────────────────────────────────────────────────

#[test]
fn decode_recovers_735() {
    init_logger();
    assert_eq!(
        decode(&value(735)).unwrap(),
        TMConfig::new(0, 1, vec![0, 1])
    );
}

#[test]
fn decode_zero_is_rejected() {
    assert_eq!(
        decode(&value(0)).unwrap_err(),
        DomainError::NonPositiveValue
    );
}

#[test]
fn decode_rejects_missing_first_cell() {
    // 7 = 7^1 with no factor of 5: cell 0 is a hole.
    assert_eq!(
        decode(&value(7)).unwrap_err(),
        DomainError::NonContiguousTape { index: 0 }
    );
}

#[test]
fn decode_rejects_gap_inside_tape() {
    // 5 · 11: cell 1 (prime 7) is missing.
    assert_eq!(
        decode(&value(5 * 11)).unwrap_err(),
        DomainError::NonContiguousTape { index: 1 }
    );
}

#[test]
fn decode_rejects_large_foreign_prime() {
    // 2 · 3 · 5 · 1_000_003: the big prime can never follow contiguously.
    assert_eq!(
        decode(&value(2 * 3 * 5 * 1_000_003)).unwrap_err(),
        DomainError::NonContiguousTape { index: 1 }
    );
}

#[test]
fn decode_rejects_head_past_tape() {
    // 9 = 3^2 with an empty tape.
    assert_eq!(
        decode(&value(9)).unwrap_err(),
        DomainError::HeadOutOfRange {
            head: 2,
            tape_len: 0,
        }
    );
}

#[test]
fn decode_enforces_alphabet() {
    let codec = Codec::with_config(CodecConfig::with_alphabet(2)).unwrap();
    // 5^3 → symbol 2
    assert_eq!(
        codec.decode(&value(125)).unwrap_err(),
        DomainError::SymbolOutOfAlphabet {
            index: 0,
            symbol: 2,
            alphabet_size: 2,
        }
    );
    assert_eq!(
        codec.decode(&value(25)).unwrap(),
        TMConfig::new(0, 0, vec![1])
    );
}

#[test]
fn decode_huge_power_of_two() {
    init_logger();
    let k = 200_000u32;
    let huge = EncodedValue::new(BigUint::one() << k as usize);
    let tm = decode(&huge).unwrap();
    assert_eq!(tm.state(), k);
    assert_eq!(tm.head(), 0);
    assert!(tm.tape().is_empty());
    assert_eq!(encode(&tm).unwrap(), huge);
}

#[test]
fn decode_huge_tape_exponent() {
    // 3 · 5^20000: one cell holding symbol 19_999, head on it.
    let huge = EncodedValue::new(BigUint::from(5u32).pow(20_000) * 3u32);
    let tm = decode(&huge).unwrap();
    assert_eq!(tm, TMConfig::new(0, 1, vec![19_999]));
}

#[test]
fn decode_parsed_decimal() {
    let parsed: EncodedValue = "735".parse().unwrap();
    assert_eq!(decode(&parsed).unwrap().tape(), &[0, 1]);
}

#[test]
fn validity_check_matches_decode() {
    let codec = Codec::new();
    assert!(codec.is_valid_encoding(&value(735)));
    assert!(!codec.is_valid_encoding(&value(7)));
    assert!(!codec.is_valid_encoding(&value(0)));
}

// ── Round trips ────────────────────────────────────────────────────────

#[test]
fn every_valid_small_value_reencodes_to_itself() {
    let codec = Codec::new();
    let mut valid = 0;
    for n in 1..5_000u64 {
        if let Ok(tm) = codec.decode(&value(n)) {
            assert_eq!(codec.encode(&tm).unwrap(), value(n), "value {}", n);
            valid += 1;
        }
    }
    assert!(valid > 50, "only {} valid encodings below 5000", valid);
}

#[test]
fn large_configuration_round_trips() {
    let tape: Vec<Symbol> = (0..64).map(|i| i % 5).collect();
    let tm = TMConfig::new(17, 40, tape);
    let encoded = encode(&tm).unwrap();
    assert!(encoded.bits() > 64);
    assert_eq!(decode(&encoded).unwrap(), tm);
}

#[test]
fn shared_codec_across_threads() {
    let codec = Codec::with_config(CodecConfig::with_alphabet(3)).unwrap();
    thread::scope(|s| {
        for t in 0..4u32 {
            let codec = &codec;
            s.spawn(move || {
                for len in 0..20usize {
                    let tape: Vec<Symbol> = (0..len)
                        .map(|i| ((i as u32 + t) % 3) as Symbol)
                        .collect();
                    let tm = TMConfig::new(t, len / 2, tape);
                    let encoded = codec.encode(&tm).unwrap();
                    assert_eq!(codec.decode(&encoded).unwrap(), tm);
                }
            });
        }
    });
}

#[test]
fn head_step_multiplies_by_three() {
    let tm = TMConfig::new(3, 0, vec![2, 0, 1]);
    let base = encode(&tm).unwrap().into_biguint();
    let stepped = encode(&tm.with_head(1)).unwrap().into_biguint();
    assert_eq!(stepped, base * 3u32);
}

// ── Properties ─────────────────────────────────────────────────────────

fn config_strategy() -> impl Strategy<Value = TMConfig> {
    (0u32..24, prop::collection::vec(0 as Symbol..4, 0..10)).prop_flat_map(|(state, tape)| {
        let len = tape.len();
        (0..=len).prop_map(move |head| TMConfig::new(state, head, tape.clone()))
    })
}

proptest! {
    #[test]
    fn decode_inverts_encode(tm in config_strategy()) {
        let codec = Codec::with_config(CodecConfig::with_alphabet(4)).unwrap();
        let encoded = codec.encode(&tm).unwrap();
        prop_assert_eq!(codec.decode(&encoded).unwrap(), tm);
    }

    #[test]
    fn encode_inverts_decode(tm in config_strategy()) {
        let encoded = encode(&tm).unwrap();
        let decoded = decode(&encoded).unwrap();
        prop_assert_eq!(encode(&decoded).unwrap(), encoded);
    }

    #[test]
    fn advancing_head_triples_value(tm in config_strategy()) {
        prop_assume!(tm.head() < tm.tape().len());
        let before = encode(&tm).unwrap().into_biguint();
        let after = encode(&tm.with_head(tm.head() + 1)).unwrap().into_biguint();
        prop_assert_eq!(after, before * 3u32);
    }

    #[test]
    fn incrementing_state_doubles_value(tm in config_strategy()) {
        let before = encode(&tm).unwrap().into_biguint();
        let after = encode(&tm.with_state(tm.state() + 1)).unwrap().into_biguint();
        prop_assert_eq!(after, before * 2u32);
    }

    #[test]
    fn distinct_configs_encode_distinctly(a in config_strategy(), b in config_strategy()) {
        prop_assume!(a != b);
        prop_assert_ne!(encode(&a).unwrap(), encode(&b).unwrap());
    }
}
