use std::io::Write;

use log::{debug, warn};

use super::{ChannelDecoder, ChannelEncoder, CodecOptions};
use crate::error::StegoError;
use crate::media::PixelBuffer;
use crate::message::{BitMessage, LENGTH_PREFIX_BYTES};
use crate::result::Result;

/// Hides a text in the least significant bit of every color channel byte
/// and reads it back.
///
/// ## Example of usage
/// ```rust
/// use stegolab_core::codec::LsbCodec;
/// use stegolab_core::media::PixelBuffer;
///
/// let carrier = PixelBuffer::from_fn(8, 8, |x, y| [x as u8 * 30, y as u8 * 30, 128]).unwrap();
/// let stego = LsbCodec::encode(&carrier, "Hello World!");
///
/// assert_eq!(LsbCodec::decode(&stego), "Hello World!");
/// assert_eq!(LsbCodec::capacity(&carrier), 8 * 8 * 3);
/// ```
pub struct LsbCodec;

impl LsbCodec {
    /// capacity in bits, one per channel byte
    pub fn capacity(buffer: &PixelBuffer) -> usize {
        buffer.channel_count()
    }

    /// capacity in whole bytes, including the length header
    pub fn capacity_bytes(buffer: &PixelBuffer) -> usize {
        Self::capacity(buffer) / 8
    }

    /// longest text in bytes that is embedded without truncation
    pub fn max_message_len(buffer: &PixelBuffer) -> usize {
        Self::capacity_bytes(buffer).saturating_sub(LENGTH_PREFIX_BYTES)
    }

    /// Returns a copy of `buffer` with `message` hidden inside.
    ///
    /// A message longer than the capacity is truncated silently and can not be
    /// read back in full.
    pub fn encode(buffer: &PixelBuffer, message: &str) -> PixelBuffer {
        Self::hide(buffer, &BitMessage::from_text(message))
    }

    /// Like [`LsbCodec::encode`], but checks the message against the payload fraction
    /// of the capacity and rejects it in strict mode.
    pub fn encode_with_options(
        buffer: &PixelBuffer,
        message: &str,
        opts: &CodecOptions,
    ) -> Result<PixelBuffer> {
        opts.validate()?;
        let message = BitMessage::from_text(message);
        let eligible = opts.eligible_capacity(Self::capacity(buffer));

        if message.bit_len() > eligible {
            if opts.strict_capacity {
                return Err(StegoError::CapacityExceeded {
                    required: message.bit_len(),
                    available: eligible,
                });
            }
            warn!(
                "message needs {} bits, exceeding the {}% payload of {eligible} bits",
                message.bit_len(),
                opts.payload * 100.0
            );
        }

        Ok(Self::hide(buffer, &message))
    }

    fn hide(buffer: &PixelBuffer, message: &BitMessage) -> PixelBuffer {
        let mut stego = buffer.clone();
        let hidden = Self::hide_into(&mut stego, message);
        if hidden < message.bit_len() {
            warn!(
                "message truncated: {} bits required, {} bits available",
                message.bit_len(),
                Self::capacity(buffer)
            );
        }
        debug!(
            "hid {hidden} bits in a {}x{} carrier",
            buffer.width(),
            buffer.height()
        );

        stego
    }

    /// writes the framed message into `carrier` and returns the number of bits that fit
    fn hide_into(carrier: &mut PixelBuffer, message: &BitMessage) -> usize {
        let mut encoder = Self::encoder(carrier);
        if let Err(e) = encoder.write_all(message.as_bytes()) {
            debug!("encoder stopped early: {e}");
        }

        encoder.bits_written()
    }

    /// Reads a hidden text, see [`BitMessage::read_text`] for the handling of damaged data.
    pub fn decode(buffer: &PixelBuffer) -> String {
        BitMessage::read_text(&mut Self::decoder(buffer))
    }

    /// builds a LSB decoder that implements Read
    pub fn decoder(input: &PixelBuffer) -> ChannelDecoder<'_> {
        ChannelDecoder::new(input)
    }

    /// builds a LSB encoder that implements Write
    pub fn encoder(carrier: &mut PixelBuffer) -> ChannelEncoder<'_> {
        ChannelEncoder::new(carrier)
    }
}
