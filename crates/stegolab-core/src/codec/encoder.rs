use std::io::{Result, Write};
use std::slice::IterMut;

use crate::bit_iterator::BitIterator;
use crate::media::PixelBuffer;

pub trait HideBit {
    fn hide_bit(self, bit: bool);
}

impl HideBit for &mut u8 {
    fn hide_bit(self, bit: bool) {
        *self = (*self & (u8::MAX - 1)) | u8::from(bit);
    }
}

/// Writes data into the least significant bits of the channel bytes of a [`PixelBuffer`],
/// in raster order and most significant bit first.
///
/// Only bytes whose 8 bits were all hidden count as written. When the carrier runs out
/// in the middle of a byte, the bits that fit are kept, the rest is dropped and the byte
/// is not counted, so `write_all` fails with `ErrorKind::WriteZero` on the next attempt.
///
/// ## Example of usage
/// ```rust
/// use std::io::Write;
/// use stegolab_core::codec::ChannelEncoder;
/// use stegolab_core::media::PixelBuffer;
///
/// let mut carrier = PixelBuffer::new(3, 1, vec![0xFF; 9]).unwrap();
/// {
///     let mut encoder = ChannelEncoder::new(&mut carrier);
///     encoder.write_all(&[0b0101_0101]).expect("8 bits fit into 9 channels");
/// }
/// assert_eq!(&carrier.as_bytes()[..3], &[0xFE, 0xFF, 0xFE]);
/// ```
pub struct ChannelEncoder<'a> {
    colors: IterMut<'a, u8>,
    bits_written: usize,
}

impl<'a> ChannelEncoder<'a> {
    pub fn new(carrier: &'a mut PixelBuffer) -> Self {
        Self {
            colors: carrier.as_bytes_mut().iter_mut(),
            bits_written: 0,
        }
    }

    pub fn bits_written(&self) -> usize {
        self.bits_written
    }

    /// number of channel bytes that are still untouched
    pub fn remaining_capacity(&self) -> usize {
        self.colors.len()
    }
}

impl Write for ChannelEncoder<'_> {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let mut hidden = 0;
        for (bit, color) in BitIterator::new(buf).zip(self.colors.by_ref()) {
            color.hide_bit(bit == 1);
            hidden += 1;
        }
        self.bits_written += hidden;

        Ok(hidden / 8)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_4x3_linear_growing_colors;
    use std::io::ErrorKind;

    #[test]
    fn should_hide_a_bit() {
        let mut color = 8_u8;
        (&mut color).hide_bit(true);
        assert_eq!(color, 9);
        (&mut color).hide_bit(false);
        assert_eq!(color, 8);
    }

    #[test]
    fn should_only_touch_the_least_significant_bits() {
        let original = prepare_4x3_linear_growing_colors();
        let mut carrier = original.clone();
        {
            let mut encoder = ChannelEncoder::new(&mut carrier);
            encoder.write_all(&[0xFF, 0x00, 0xA5]).unwrap();
            assert_eq!(encoder.bits_written(), 24);
            assert_eq!(encoder.remaining_capacity(), 12);
        }

        for (i, (a, b)) in original
            .as_bytes()
            .iter()
            .zip(carrier.as_bytes())
            .enumerate()
        {
            assert_eq!(a & 0xFE, b & 0xFE, "high bits of channel {i} changed");
        }
        assert!(carrier.as_bytes()[..8].iter().all(|c| c & 1 == 1));
        assert!(carrier.as_bytes()[8..16].iter().all(|c| c & 1 == 0));
        assert_eq!(&carrier.as_bytes()[24..], &original.as_bytes()[24..]);
    }

    #[test]
    fn should_report_write_zero_once_the_carrier_is_full() {
        let mut carrier = PixelBuffer::new(2, 1, vec![0xFF; 6]).unwrap();
        let mut encoder = ChannelEncoder::new(&mut carrier);

        assert_eq!(encoder.write(&[0x00, 0x00]).unwrap(), 0);
        assert_eq!(encoder.bits_written(), 6);
        assert_eq!(encoder.write(&[0x00]).unwrap(), 0);

        let err = encoder.write_all(&[0x00]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WriteZero);
    }

    #[test]
    fn should_fail_when_the_last_byte_only_fits_partially() {
        // 36 channel bytes hold the 32 header bits and half of 'A'
        let mut carrier = PixelBuffer::new(4, 3, vec![0; 36]).unwrap();
        let mut encoder = ChannelEncoder::new(&mut carrier);

        let err = encoder.write_all(&[0, 0, 0, 1, b'A']).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WriteZero);
        assert_eq!(encoder.bits_written(), 36);
        assert_eq!(encoder.remaining_capacity(), 0);
    }

    #[test]
    fn should_count_whole_bytes_only() {
        let mut carrier = PixelBuffer::new(4, 1, vec![0; 12]).unwrap();
        let mut encoder = ChannelEncoder::new(&mut carrier);

        assert_eq!(encoder.write(&[0xFF, 0xFF]).unwrap(), 1);
        assert_eq!(encoder.bits_written(), 12);
    }
}
