use std::io::Read;

use byteorder::{BigEndian, ByteOrder, ReadBytesExt};
use log::{debug, warn};

use crate::bit_iterator::BitIterator;

/// size of the big endian length header in front of every message
pub const LENGTH_PREFIX_BYTES: usize = 4;
pub const LENGTH_PREFIX_BITS: usize = LENGTH_PREFIX_BYTES * 8;

/// The serialization format of a hidden text:
/// a 32 bit big endian byte length followed by the UTF-8 bytes of the text.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BitMessage {
    raw: Vec<u8>,
}

impl BitMessage {
    /// Frames the given text.
    ///
    /// A length beyond `u32::MAX` bytes saturates at `u32::MAX` instead of wrapping
    /// around modulo 2^32, so the header never claims a shorter text than the one
    /// that follows. No carrier holds that many bits, the text is truncated anyway.
    pub fn from_text(text: &str) -> Self {
        let text = text.as_bytes();
        let len = u32::try_from(text.len()).unwrap_or(u32::MAX);
        let mut raw = vec![0; LENGTH_PREFIX_BYTES];
        BigEndian::write_u32(&mut raw, len);
        raw.extend_from_slice(text);

        Self { raw }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    /// number of bits including the length header
    pub fn bit_len(&self) -> usize {
        self.raw.len() * 8
    }

    pub fn bits(&self) -> BitIterator<&[u8]> {
        BitIterator::new(&self.raw[..])
    }

    /// Reads a framed text back.
    ///
    /// Never fails: a source shorter than the length header yields an empty text,
    /// a declared length beyond the available bytes is clamped to what is there
    /// and invalid UTF-8 sequences are replaced by `U+FFFD`.
    pub fn read_text<R: Read>(dec: &mut R) -> String {
        let Ok(declared) = dec.read_u32::<BigEndian>() else {
            debug!("not enough data for a length header");
            return String::new();
        };

        let mut text = Vec::new();
        if let Err(e) = dec.take(declared as u64).read_to_end(&mut text) {
            warn!("Error reading message body: {e}");
        }
        if text.len() < declared as usize {
            warn!(
                "message declares {declared} bytes, but only {} are available",
                text.len()
            );
        }

        String::from_utf8_lossy(&text).into_owned()
    }
}
