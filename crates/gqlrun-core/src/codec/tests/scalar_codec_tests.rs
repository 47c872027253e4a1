use crate::codec::CodecError;
use crate::codec::ScalarCodec;
use crate::value::ScalarValue;
use proptest::prelude::*;

fn round_trip(value: ScalarValue) {
    let bytes = ScalarCodec::encode(&value).expect("scalar encodes");
    assert_eq!(bytes.len(), ScalarCodec::encoded_len(&value));
    assert_eq!(ScalarCodec::decode(&bytes), Ok(value));
}

#[test]
fn boundary_values_round_trip() {
    for i in [0, 1, -1, i32::MIN, i32::MAX] {
        round_trip(ScalarValue::Int(i));
    }
    for l in [0, -1, i64::MIN, i64::MAX] {
        round_trip(ScalarValue::Long(l));
    }
    for f in [0.0, -0.5, f32::MIN, f32::MAX, f32::MIN_POSITIVE] {
        round_trip(ScalarValue::Float(f));
    }
    for d in [0.0, -2.25, f64::MIN, f64::MAX, f64::EPSILON] {
        round_trip(ScalarValue::Double(d));
    }
    round_trip(ScalarValue::Boolean(false));
    round_trip(ScalarValue::Boolean(true));
    round_trip(ScalarValue::String(String::new()));
    round_trip(ScalarValue::String("Ünïcödé ✓".to_string()));
}

#[test]
fn layout_is_tag_then_little_endian_payload() {
    assert_eq!(ScalarCodec::encode(&ScalarValue::Int(1)), Ok(vec![0x02, 1, 0, 0, 0]));
    assert_eq!(
        ScalarCodec::encode(&ScalarValue::String("hi".to_string())),
        Ok(vec![0x01, 2, 0, 0, 0, b'h', b'i']),
    );
    assert_eq!(ScalarCodec::encode(&ScalarValue::Boolean(true)), Ok(vec![0x06, 1]));
}

#[test]
fn encode_into_reports_a_short_buffer() {
    let value = ScalarValue::String("hello".to_string());
    let mut bytes = vec![0u8; 7];
    assert_eq!(
        ScalarCodec::encode_into(&value, &mut bytes),
        Err(CodecError::Truncated { available: 2, needed: 5, offset: 5 }),
    );
}

#[test]
fn decode_rejects_unknown_tags() {
    assert_eq!(ScalarCodec::decode(&[0x7f, 0]), Err(CodecError::UnknownTag { tag: 0x7f }));
}

#[test]
fn decode_rejects_truncated_input() {
    assert!(matches!(ScalarCodec::decode(&[]), Err(CodecError::Truncated { .. })));
    assert!(matches!(ScalarCodec::decode(&[0x03, 1, 2]), Err(CodecError::Truncated { .. })));
    assert_eq!(
        ScalarCodec::decode(&[0x01, 5, 0, 0, 0, b'a']),
        Err(CodecError::Truncated { available: 1, needed: 5, offset: 5 }),
    );
}

#[test]
fn decode_rejects_trailing_bytes() {
    assert_eq!(
        ScalarCodec::decode(&[0x06, 0, 0xff, 0xff]),
        Err(CodecError::TrailingBytes { trailing: 2 }),
    );
}

#[test]
fn decode_rejects_invalid_utf8() {
    assert_eq!(
        ScalarCodec::decode(&[0x01, 2, 0, 0, 0, 0xc3, 0x28]),
        Err(CodecError::InvalidUtf8),
    );
}

fn scalar_value() -> impl Strategy<Value = ScalarValue> {
    prop_oneof![
        any::<bool>().prop_map(ScalarValue::Boolean),
        any::<i32>().prop_map(ScalarValue::Int),
        any::<i64>().prop_map(ScalarValue::Long),
        any::<f32>().prop_filter("NaN never equals itself", |f| !f.is_nan()).prop_map(ScalarValue::Float),
        any::<f64>().prop_filter("NaN never equals itself", |d| !d.is_nan()).prop_map(ScalarValue::Double),
        any::<String>().prop_map(ScalarValue::String),
    ]
}

proptest! {
    #[test]
    fn decode_inverts_encode(value in scalar_value()) {
        let bytes = ScalarCodec::encode(&value).expect("scalar encodes");
        prop_assert_eq!(ScalarCodec::decode(&bytes), Ok(value));
    }

    #[test]
    fn decode_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..32)) {
        let _ = ScalarCodec::decode(&bytes);
    }
}
