//! Fixed-width little-endian encoding of scalar values for crossing a wire
//! boundary. The execution engine does not use this for in-process shaping.

mod binary_data;
mod codec_error;
mod scalar_codec;

pub use binary_data::BinaryData;
pub use codec_error::CodecError;
pub use scalar_codec::ScalarCodec;

#[cfg(test)]
mod tests;
