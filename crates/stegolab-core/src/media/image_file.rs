use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use image::io::Reader as ImageReader;
use image::{DynamicImage, ImageFormat};
use log::{debug, error};

use crate::error::StegoError;
use crate::media::PixelBuffer;
use crate::result::Result;

pub trait Persist {
    fn save_as(&self, _: &Path) -> Result<()>;
}

impl PixelBuffer {
    /// Decodes a PNG or JPEG image into raw RGB, any alpha channel is dropped.
    ///
    /// Files without a `png`, `jpg` or `jpeg` extension are recognised by their content.
    pub fn from_file(f: impl AsRef<Path>) -> Result<Self> {
        let f = f.as_ref();
        let ext = f
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        let img = match ext.as_deref() {
            Some("png" | "jpg" | "jpeg") => image::open(f).map_err(|e| {
                error!("Error opening image {f:?}: {e}");
                StegoError::InvalidImageMedia
            })?,
            _ => Self::decode_guessed(f)?,
        };

        Self::try_from(img.to_rgb8())
    }

    fn decode_guessed(f: &Path) -> Result<DynamicImage> {
        let reader = ImageReader::open(f)?.with_guessed_format()?;
        match reader.format() {
            Some(format @ (ImageFormat::Png | ImageFormat::Jpeg)) => {
                debug!("{f:?} recognised as {format:?} by its content");
                reader.decode().map_err(|e| {
                    error!("Error decoding image {f:?}: {e}");
                    StegoError::InvalidImageMedia
                })
            }
            _ => Err(StegoError::UnsupportedMedia),
        }
    }

    /// Writes the buffer as PNG, the only supported format that keeps every least significant bit.
    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        self.to_rgb_image()?
            .write_to(&mut writer, ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                StegoError::ImageEncodingError
            })?;

        writer
            .flush()
            .map_err(|source| StegoError::WriteError { source })
    }
}

impl Persist for PixelBuffer {
    fn save_as(&self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            StegoError::WriteError { source: e }
        })?;

        self.save_to_writer(BufWriter::new(f))
    }
}
