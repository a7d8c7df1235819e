use std::io::{ErrorKind, Read};
use std::slice;

/// Iterates over the bits of a byte source, most significant bit of every byte first.
/// Every item is either `0` or `1`.
pub struct BitIterator<I> {
    i: u32,
    iter: I,
    byte: Option<u8>,
}

impl<I> BitIterator<I> {
    pub fn new(s: I) -> Self {
        BitIterator {
            i: 0,
            iter: s,
            byte: None,
        }
    }
}

impl<I> Iterator for BitIterator<I>
where
    I: Read,
{
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        let bit = (self.i % 8) as u8;
        if bit == 0 {
            self.byte = loop {
                let mut b = 0;
                match self.iter.read(slice::from_mut(&mut b)) {
                    Ok(0) => break None,
                    Ok(..) => break Some(b),
                    Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(_) => break None,
                }
            };
        }
        let byte = self.byte?;
        self.i += 1;

        Some((byte >> (7 - bit)) & 1)
    }
}
