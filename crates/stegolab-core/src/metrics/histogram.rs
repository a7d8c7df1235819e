use crate::media::{Channel, PixelBuffer};

/// byte value frequencies per color channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    pub red: [u64; 256],
    pub green: [u64; 256],
    pub blue: [u64; 256],
}

impl Histogram {
    pub fn channel(&self, channel: Channel) -> &[u64; 256] {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }
}

pub fn histogram(buffer: &PixelBuffer) -> Histogram {
    let mut h = Histogram {
        red: [0; 256],
        green: [0; 256],
        blue: [0; 256],
    };
    for p in buffer.pixels() {
        h.red[p[0] as usize] += 1;
        h.green[p[1] as usize] += 1;
        h.blue[p[2] as usize] += 1;
    }

    h
}

/// 256 bin histogram of a single channel
pub(crate) fn channel_histogram(buffer: &PixelBuffer, channel: Channel) -> [u64; 256] {
    let mut h = [0; 256];
    for v in buffer.channel(channel) {
        h[v as usize] += 1;
    }

    h
}

/// Shannon entropy in bits of all channel bytes pooled into one histogram, within `[0, 8]`.
pub fn entropy(buffer: &PixelBuffer) -> f64 {
    let mut h = [0_u64; 256];
    for v in buffer.as_bytes() {
        h[*v as usize] += 1;
    }
    let total = buffer.channel_count() as f64;

    h.iter()
        .filter(|count| **count > 0)
        .map(|count| {
            let p = *count as f64 / total;
            -p * p.log2()
        })
        .sum()
}
