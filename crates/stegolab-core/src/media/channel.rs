use crate::error::StegoError;

/// one of the three interleaved color channels of a [`PixelBuffer`](super::PixelBuffer)
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// offset of this channel inside a pixel triple
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

impl TryFrom<usize> for Channel {
    type Error = StegoError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value)
            .copied()
            .ok_or(StegoError::InvalidChannel(value))
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
        };
        f.write_str(name)
    }
}
