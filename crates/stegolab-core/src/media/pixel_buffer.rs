use std::slice::ChunksExact;

use image::RgbImage;

use crate::error::StegoError;
use crate::media::Channel;
use crate::result::Result;

/// number of interleaved color channels per pixel
pub const CHANNELS: usize = 3;

/// Raw interleaved RGB pixel data, row-major, no padding and no alpha.
///
/// A `PixelBuffer` can only be built through [`PixelBuffer::new`] (or the
/// conversions built on top of it), which guarantees
/// `as_bytes().len() == width * height * 3` for every value in the program.
///
/// ## Example of usage
/// ```rust
/// use stegolab_core::media::PixelBuffer;
///
/// let buffer = PixelBuffer::new(2, 1, vec![10, 20, 30, 40, 50, 60])
///     .expect("two RGB pixels are well formed");
/// assert_eq!(buffer.pixel(1, 0), [40, 50, 60]);
///
/// assert!(PixelBuffer::new(2, 1, vec![10, 20, 30]).is_err());
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(StegoError::EmptyBuffer(width, height));
        }
        let malformed = |expected| StegoError::MalformedBuffer {
            width,
            height,
            expected,
            actual: data.len(),
        };
        let Some(expected) = Self::byte_len(width, height) else {
            return Err(malformed(usize::MAX));
        };
        if data.len() != expected {
            return Err(malformed(expected));
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// builds a buffer by asking `f` for the color of every pixel at `(x, y)`
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> [u8; CHANNELS],
    {
        let mut data = Vec::with_capacity(Self::byte_len(width, height).unwrap_or_default());
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }

        Self::new(width, height, data)
    }

    /// `width * height * 3`, `None` when it does not fit into `usize`
    fn byte_len(width: u32, height: u32) -> Option<usize> {
        usize::try_from(width)
            .ok()?
            .checked_mul(usize::try_from(height).ok()?)?
            .checked_mul(CHANNELS)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn same_dimensions(&self, other: &PixelBuffer) -> bool {
        self.dimensions() == other.dimensions()
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// number of channel bytes, equals `pixel_count() * 3`
    pub fn channel_count(&self) -> usize {
        self.data.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// # Panics
    /// when `(x, y)` lies outside of the buffer
    pub fn pixel(&self, x: u32, y: u32) -> [u8; CHANNELS] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) is out of bounds for a {}x{} buffer",
            self.width,
            self.height
        );
        let i = (y as usize * self.width as usize + x as usize) * CHANNELS;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// iterates over the RGB triples in raster order
    pub fn pixels(&self) -> ChunksExact<'_, u8> {
        self.data.chunks_exact(CHANNELS)
    }

    /// iterates over the values of a single color channel in raster order
    pub fn channel(&self, channel: Channel) -> impl Iterator<Item = u8> + '_ {
        self.data
            .iter()
            .skip(channel.index())
            .step_by(CHANNELS)
            .copied()
    }

    pub fn to_rgb_image(&self) -> Result<RgbImage> {
        RgbImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or(StegoError::ImageEncodingError)
    }
}

impl TryFrom<RgbImage> for PixelBuffer {
    type Error = StegoError;

    fn try_from(img: RgbImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        Self::new(width, height, img.into_raw())
    }
}
