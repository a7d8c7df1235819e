use std::io::{Read, Result};
use std::slice::Iter;

use bitstream_io::{BigEndian, BitWrite, BitWriter};

use crate::media::PixelBuffer;

/// Reads the least significant bits of the channel bytes of a [`PixelBuffer`]
/// in raster order and packs them into bytes, most significant bit first.
///
/// Trailing bits that do not form a whole byte are never returned.
///
/// ## Example of usage
/// ```rust
/// use std::io::Read;
/// use stegolab_core::codec::ChannelDecoder;
/// use stegolab_core::media::PixelBuffer;
///
/// let image = PixelBuffer::new(3, 1, vec![0, 1, 0, 1, 0, 1, 0, 1, 1]).unwrap();
/// let mut secret = Vec::new();
/// ChannelDecoder::new(&image)
///     .read_to_end(&mut secret)
///     .expect("Cannot read from decoder");
///
/// assert_eq!(secret, vec![0b0101_0101]);
/// ```
pub struct ChannelDecoder<'i> {
    colors: Iter<'i, u8>,
}

impl<'i> ChannelDecoder<'i> {
    pub fn new(input: &'i PixelBuffer) -> Self {
        Self {
            colors: input.as_bytes().iter(),
        }
    }

    /// number of whole bytes left to read
    pub fn remaining_bytes(&self) -> usize {
        self.colors.len() / 8
    }
}

impl Iterator for ChannelDecoder<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        self.colors.next().map(|c| c & 1 == 1)
    }
}

impl Read for ChannelDecoder<'_> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let bytes = buf.len().min(self.remaining_bytes());
        let mut writer = BitWriter::endian(&mut buf[..bytes], BigEndian);
        for _ in 0..bytes * 8 {
            if let Some(bit) = self.next() {
                writer.write_bit(bit)?;
            }
        }

        Ok(bytes)
    }
}
