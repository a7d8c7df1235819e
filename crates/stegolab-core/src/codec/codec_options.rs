use crate::error::StegoError;
use crate::result::Result;

/// Options for embedding a message
#[derive(Debug, Clone, PartialEq)]
pub struct CodecOptions {
    /// Fraction of the carrier capacity that a message is allowed to occupy, in `(0, 1]`.
    ///
    /// Only used to check a message against the capacity; the bits are always
    /// written sequentially from the first channel byte on.
    pub payload: f64,

    /// If true a message that does not fit into the eligible capacity is rejected
    /// instead of being truncated
    pub strict_capacity: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            payload: 1.0,
            strict_capacity: false,
        }
    }
}

impl CodecOptions {
    pub fn with_payload(mut self, payload: f64) -> Self {
        self.payload = payload;
        self
    }

    pub fn with_strict_capacity(mut self, strict: bool) -> Self {
        self.strict_capacity = strict;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.payload > 0.0 && self.payload <= 1.0 {
            Ok(())
        } else {
            Err(StegoError::InvalidPayload(self.payload))
        }
    }

    /// bits of `capacity` a message may use under this payload fraction
    pub fn eligible_capacity(&self, capacity: usize) -> usize {
        (capacity as f64 * self.payload).floor() as usize
    }
}
