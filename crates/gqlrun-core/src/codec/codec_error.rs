use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum CodecError {
    #[error("string payload is not valid UTF-8")]
    InvalidUtf8,

    #[error("byte {value:#04x} at offset {offset} is not a valid boolean")]
    InvalidBoolean { offset: usize, value: u8 },

    #[error("string of {len} bytes does not fit a u32 length prefix")]
    StringTooLong { len: usize },

    #[error("{trailing} unexpected byte(s) after the encoded value")]
    TrailingBytes { trailing: usize },

    #[error("needed {needed} byte(s) at offset {offset} but only {available} remain")]
    Truncated { available: usize, needed: usize, offset: usize },

    #[error("unknown scalar kind tag {tag:#04x}")]
    UnknownTag { tag: u8 },
}
