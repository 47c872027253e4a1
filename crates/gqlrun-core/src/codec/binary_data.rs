use crate::codec::CodecError;

type Result<T> = std::result::Result<T, CodecError>;

/// A fixed-width value that can be read from and written to a byte buffer in
/// little-endian order.
pub trait BinaryData: Sized {
    /// Width of the encoded value in bytes.
    const SIZE: usize;

    fn parse_le(bytes: &[u8], offset: usize) -> Result<Self>;

    fn store_le(self, bytes: &mut [u8], offset: usize) -> Result<()>;
}

fn window<const N: usize>(bytes: &[u8], offset: usize) -> Result<[u8; N]> {
    offset
        .checked_add(N)
        .and_then(|end| bytes.get(offset..end))
        .and_then(|slice| slice.try_into().ok())
        .ok_or(CodecError::Truncated {
            available: bytes.len().saturating_sub(offset),
            needed: N,
            offset,
        })
}

fn window_mut(bytes: &mut [u8], offset: usize, size: usize) -> Result<&mut [u8]> {
    let available = bytes.len().saturating_sub(offset);
    offset
        .checked_add(size)
        .and_then(|end| bytes.get_mut(offset..end))
        .ok_or(CodecError::Truncated {
            available,
            needed: size,
            offset,
        })
}

macro_rules! impl_binary_data_for_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl BinaryData for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();

                fn parse_le(bytes: &[u8], offset: usize) -> Result<Self> {
                    Ok(<$ty>::from_le_bytes(window(bytes, offset)?))
                }

                fn store_le(self, bytes: &mut [u8], offset: usize) -> Result<()> {
                    window_mut(bytes, offset, Self::SIZE)?
                        .copy_from_slice(&self.to_le_bytes());
                    Ok(())
                }
            }
        )*
    };
}

impl_binary_data_for_number!(i8, u8, i32, u32, i64, f32, f64);

impl BinaryData for bool {
    const SIZE: usize = 1;

    fn parse_le(bytes: &[u8], offset: usize) -> Result<Self> {
        match u8::parse_le(bytes, offset)? {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(CodecError::InvalidBoolean { offset, value }),
        }
    }

    fn store_le(self, bytes: &mut [u8], offset: usize) -> Result<()> {
        u8::from(self).store_le(bytes, offset)
    }
}
