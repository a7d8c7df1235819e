//! # Stegolab Core API
//!
//! Hides text messages in the least significant bits of RGB images and measures
//! how much the hiding gives away.
//!
//! - [`PixelBuffer`][buf] the validated raw RGB data every operation works on
//! - [`LsbCodec`][codec] for writing a message into and reading it from a buffer
//! - [`metrics`][metrics] entropy, correlation, NPCR/UACI, PSNR, SSIM and the chi-square test
//! - [`api`][api] builders that work on image files
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use stegolab_core::media::{Persist, PixelBuffer};
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! PixelBuffer::from_fn(64, 64, |x, y| [x as u8, y as u8, (x ^ y) as u8])
//!     .expect("Failed to build carrier")
//!     .save_as(&carrier)
//!     .expect("Failed to save carrier");
//!
//! let report = stegolab_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_image(&carrier)
//!     .with_output(temp_dir.path().join("image-with-a-message-inside.png"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//! assert!(report.psnr > 50.0);
//!
//! let message = stegolab_core::api::unveil::prepare()
//!     .from_secret_file(temp_dir.path().join("image-with-a-message-inside.png"))
//!     .execute()
//!     .expect("Failed to unveil message from image");
//! assert_eq!(message, "Hello, World!");
//! ```
//!
//! ## Compare a cover with a stego buffer
//!
//! ```rust
//! use stegolab_core::codec::LsbCodec;
//! use stegolab_core::media::PixelBuffer;
//! use stegolab_core::metrics;
//!
//! let cover = PixelBuffer::from_fn(32, 32, |x, y| [x as u8 * 8, y as u8 * 8, 77]).unwrap();
//! let stego = LsbCodec::encode(&cover, "secret");
//!
//! assert!(metrics::psnr(&cover, &stego).unwrap() > 50.0);
//! assert_eq!(metrics::psnr(&cover, &cover).unwrap(), f64::INFINITY);
//! ```
//!
//! [buf]: ./media/struct.PixelBuffer.html
//! [codec]: ./codec/struct.LsbCodec.html
//! [metrics]: ./metrics/index.html
//! [api]: ./api/index.html

#![warn(clippy::redundant_else)]

pub mod bit_iterator;
pub use bit_iterator::BitIterator;

pub mod message;
pub use message::BitMessage;

pub mod api;
pub mod codec;
pub mod commands;
pub mod error;
pub mod media;
pub mod metrics;
pub mod result;

pub use crate::codec::{CodecOptions, LsbCodec};
pub use crate::error::StegoError;
pub use crate::media::{Channel, PixelBuffer};
pub use crate::result::Result;

#[cfg(test)]
mod test_utils {
    use crate::media::PixelBuffer;

    /// This buffer has some traits:
    /// --------------x-------------
    /// | 0,0 -> (0, 1, 2)    | 1,0 -> (3, 4, 5)    | ...
    /// | 0,1 -> (12, 13, 14) | 1,1 -> (15, 16, 17) | ...
    /// y ...
    pub fn prepare_4x3_linear_growing_colors() -> PixelBuffer {
        PixelBuffer::from_fn(4, 3, |x, y| {
            let i = ((y * 4 + x) * 3) as u8;
            [i, i + 1, i + 2]
        })
        .unwrap()
    }

    /// deterministic pseudo random colors (xorshift32)
    pub fn prepare_noise_image(width: u32, height: u32) -> PixelBuffer {
        let mut state: u32 = 0x9E37_79B9;
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        };

        PixelBuffer::from_fn(width, height, |_, _| [next(), next(), next()]).unwrap()
    }

    /// 16x16 grey ramp, every value from 0 to 255 appears exactly once per channel
    pub fn prepare_uniform_histogram_image() -> PixelBuffer {
        PixelBuffer::from_fn(16, 16, |x, y| {
            let i = (y * 16 + x) as u8;
            [i, i, i]
        })
        .unwrap()
    }
}
