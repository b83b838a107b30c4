//! Property-based tests for ordering and round-trips.

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use proptest::prelude::*;

use super::boolean::{decode_bool, encode_bool};
use super::double::{decode_f64, encode_f64};
use super::int64::{decode_i64, encode_i64};
use super::string::{decode_str, encode_str};
use super::KeyReader;

/// Strategy for strings with no U+0000.
fn arb_key_string() -> impl Strategy<Value = String> {
    "[^\\x00]*"
}

/// Strategy for doubles that are not NaN, with the special values boosted.
fn arb_ordered_f64() -> impl Strategy<Value = f64> {
    prop_oneof![
        1 => Just(f64::NEG_INFINITY),
        1 => Just(f64::INFINITY),
        1 => Just(-0.0),
        1 => Just(0.0),
        1 => Just(f64::MIN_POSITIVE),
        1 => Just(-f64::MIN_POSITIVE),
        10 => any::<f64>().prop_filter("not NaN", |f| !f.is_nan()),
    ]
}

proptest! {
    #[test]
    fn int64_order_matches(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(a.cmp(&b), encode_i64(a).cmp(&encode_i64(b)));
    }

    #[test]
    fn int64_roundtrip(i in any::<i64>()) {
        let encoded = encode_i64(i);
        prop_assert_eq!(encoded.len(), 8);
        prop_assert_eq!(decode_i64(&encoded).unwrap(), i);
    }

    #[test]
    fn double_order_matches(a in arb_ordered_f64(), b in arb_ordered_f64()) {
        // Without NaN, total order is numeric order with -0.0 below +0.0.
        prop_assert_eq!(a.total_cmp(&b), encode_f64(a).cmp(&encode_f64(b)));
        if a < b {
            prop_assert!(encode_f64(a) < encode_f64(b));
        }
    }

    #[test]
    fn double_roundtrip_preserves_bits(bits in any::<u64>()) {
        // Covers NaN payloads and both zeros.
        let f = f64::from_bits(bits);
        let encoded = encode_f64(f);
        prop_assert_eq!(encoded.len(), 8);
        prop_assert_eq!(decode_f64(&encoded).unwrap().to_bits(), bits);
    }

    #[test]
    fn bool_order_matches(a in any::<bool>(), b in any::<bool>()) {
        prop_assert_eq!(a.cmp(&b), encode_bool(a).cmp(&encode_bool(b)));
        prop_assert_eq!(decode_bool(&encode_bool(a)).unwrap(), a);
    }

    #[test]
    fn string_order_matches(a in arb_key_string(), b in arb_key_string()) {
        let ea = encode_str(&a).unwrap();
        let eb = encode_str(&b).unwrap();
        prop_assert_eq!(a.as_bytes().cmp(b.as_bytes()), ea.cmp(&eb));
    }

    #[test]
    fn string_prefix_sorts_first(a in arb_key_string(), suffix in "[^\\x00]+") {
        let longer = format!("{a}{suffix}");
        prop_assert!(encode_str(&a).unwrap() < encode_str(&longer).unwrap());
    }

    #[test]
    fn string_roundtrip(s in arb_key_string()) {
        let encoded = encode_str(&s).unwrap();
        prop_assert_eq!(encoded.len(), s.len() + 1);
        prop_assert_eq!(decode_str(&encoded).unwrap(), s);
    }

    #[test]
    fn string_with_nul_rejected(a in arb_key_string(), b in arb_key_string()) {
        let s = format!("{a}\0{b}");
        prop_assert!(encode_str(&s).is_err());
    }

    #[test]
    fn reader_recovers_sequence(
        i in any::<i64>(),
        f in arb_ordered_f64(),
        flag in any::<bool>(),
        s in arb_key_string(),
    ) {
        let mut buf = Vec::new();
        buf.extend_from_slice(&encode_str(&s).unwrap());
        buf.extend_from_slice(&encode_i64(i));
        buf.extend_from_slice(&encode_bool(flag));
        buf.extend_from_slice(&encode_f64(f));

        let mut reader = KeyReader::new(&buf);
        prop_assert_eq!(reader.read_str().unwrap(), s.as_str());
        prop_assert_eq!(reader.read_i64().unwrap(), i);
        prop_assert_eq!(reader.read_bool().unwrap(), flag);
        prop_assert_eq!(reader.read_f64().unwrap().to_bits(), f.to_bits());
        prop_assert!(reader.finish().is_ok());
    }
}
