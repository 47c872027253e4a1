use crate::codec::BinaryData;
use crate::codec::CodecError;
use crate::value::ScalarValue;

type Result<T> = std::result::Result<T, CodecError>;

const TAG_STRING: u8 = 0x01;
const TAG_INT: u8 = 0x02;
const TAG_LONG: u8 = 0x03;
const TAG_FLOAT: u8 = 0x04;
const TAG_DOUBLE: u8 = 0x05;
const TAG_BOOLEAN: u8 = 0x06;

/// Encodes a [`ScalarValue`] as a one-byte kind tag followed by its
/// little-endian payload. Strings are a `u32` byte length followed by UTF-8.
pub struct ScalarCodec;

impl ScalarCodec {
    pub fn decode(bytes: &[u8]) -> Result<ScalarValue> {
        let tag = u8::parse_le(bytes, 0)?;
        let offset = u8::SIZE;
        let (value, end) = match tag {
            TAG_STRING => {
                let len = u32::parse_le(bytes, offset)? as usize;
                let start = offset + u32::SIZE;
                let payload = start
                    .checked_add(len)
                    .and_then(|end| bytes.get(start..end))
                    .ok_or(CodecError::Truncated {
                        available: bytes.len().saturating_sub(start),
                        needed: len,
                        offset: start,
                    })?;
                let s = std::str::from_utf8(payload)
                    .map_err(|_| CodecError::InvalidUtf8)?;
                (ScalarValue::String(s.to_string()), start + len)
            },
            TAG_INT => (ScalarValue::Int(i32::parse_le(bytes, offset)?), offset + i32::SIZE),
            TAG_LONG => (ScalarValue::Long(i64::parse_le(bytes, offset)?), offset + i64::SIZE),
            TAG_FLOAT => (ScalarValue::Float(f32::parse_le(bytes, offset)?), offset + f32::SIZE),
            TAG_DOUBLE => (ScalarValue::Double(f64::parse_le(bytes, offset)?), offset + f64::SIZE),
            TAG_BOOLEAN => (ScalarValue::Boolean(bool::parse_le(bytes, offset)?), offset + bool::SIZE),
            tag => return Err(CodecError::UnknownTag { tag }),
        };

        if end < bytes.len() {
            return Err(CodecError::TrailingBytes {
                trailing: bytes.len() - end,
            });
        }
        Ok(value)
    }

    /// Fails only for strings longer than `u32::MAX` bytes.
    pub fn encode(value: &ScalarValue) -> Result<Vec<u8>> {
        let mut bytes = vec![0u8; Self::encoded_len(value)];
        Self::encode_into(value, &mut bytes)?;
        Ok(bytes)
    }

    /// The exact number of bytes [`ScalarCodec::encode`] produces for
    /// `value`.
    pub fn encoded_len(value: &ScalarValue) -> usize {
        u8::SIZE + match value {
            ScalarValue::Boolean(_) => bool::SIZE,
            ScalarValue::Double(_) => f64::SIZE,
            ScalarValue::Float(_) => f32::SIZE,
            ScalarValue::Int(_) => i32::SIZE,
            ScalarValue::Long(_) => i64::SIZE,
            ScalarValue::String(s) => u32::SIZE + s.len(),
        }
    }

    /// Writes the encoding of `value` to the start of `bytes`, which must be
    /// at least [`ScalarCodec::encoded_len`] bytes long.
    pub fn encode_into(value: &ScalarValue, bytes: &mut [u8]) -> Result<()> {
        let offset = u8::SIZE;
        match value {
            ScalarValue::Boolean(b) => {
                TAG_BOOLEAN.store_le(bytes, 0)?;
                b.store_le(bytes, offset)
            },
            ScalarValue::Double(d) => {
                TAG_DOUBLE.store_le(bytes, 0)?;
                d.store_le(bytes, offset)
            },
            ScalarValue::Float(f) => {
                TAG_FLOAT.store_le(bytes, 0)?;
                f.store_le(bytes, offset)
            },
            ScalarValue::Int(i) => {
                TAG_INT.store_le(bytes, 0)?;
                i.store_le(bytes, offset)
            },
            ScalarValue::Long(l) => {
                TAG_LONG.store_le(bytes, 0)?;
                l.store_le(bytes, offset)
            },
            ScalarValue::String(s) => {
                TAG_STRING.store_le(bytes, 0)?;
                let len = u32::try_from(s.len())
                    .map_err(|_| CodecError::StringTooLong { len: s.len() })?;
                len.store_le(bytes, offset)?;
                let start = offset + u32::SIZE;
                let available = bytes.len().saturating_sub(start);
                bytes
                    .get_mut(start..start + s.len())
                    .ok_or(CodecError::Truncated {
                        available,
                        needed: s.len(),
                        offset: start,
                    })?
                    .copy_from_slice(s.as_bytes());
                Ok(())
            },
        }
    }
}
