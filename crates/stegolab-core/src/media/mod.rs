mod channel;
pub mod image_file;
mod pixel_buffer;

pub use channel::Channel;
pub use image_file::Persist;
pub use pixel_buffer::{PixelBuffer, CHANNELS};
