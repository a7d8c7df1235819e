use std::path::{Path, PathBuf};

use log::info;

use crate::codec::{CodecOptions, LsbCodec};
use crate::media::{Persist, PixelBuffer};
use crate::message::BitMessage;
use crate::metrics::{psnr, ssim};
use crate::{Result, StegoError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

/// `<dir>/<stem>_stego.png` next to the given carrier image
pub fn default_output_path(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    image.with_file_name(format!("{stem}_stego.png"))
}

/// What happened while hiding a message
#[derive(Debug, Clone, PartialEq)]
pub struct HideReport {
    pub output: PathBuf,
    pub capacity_bits: usize,
    /// bits of the framed message, including the length header
    pub message_bits: usize,
    pub payload: f64,
    pub psnr: f64,
    pub ssim: f64,
}

impl HideReport {
    pub fn truncated(&self) -> bool {
        self.message_bits > self.capacity_bits
    }
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<HideReport> {
        let Some(image) = self.image else {
            return Err(StegoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegoError::TargetNotSet);
        };
        let Some(message) = self.message else {
            return Err(StegoError::MissingMessage);
        };

        let cover = PixelBuffer::from_file(&image)?;
        let stego = LsbCodec::encode_with_options(&cover, &message, &self.options)?;
        stego.save_as(&output)?;
        info!("hid {} bytes from {image:?} in {output:?}", message.len());

        Ok(HideReport {
            capacity_bits: LsbCodec::capacity(&cover),
            message_bits: BitMessage::from_text(&message).bit_len(),
            payload: self.options.payload,
            psnr: psnr(&cover, &stego)?,
            ssim: ssim(&cover, &stego)?,
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_derive_the_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("pics/cat.jpg")),
            PathBuf::from("pics/cat_stego.png")
        );
        assert_eq!(
            default_output_path(Path::new("cat.png")),
            PathBuf::from("cat_stego.png")
        );
    }

    #[test]
    fn should_require_a_carrier() {
        let result = prepare().with_message("hi").with_output("out.png").execute();
        assert!(matches!(result, Err(StegoError::CarrierNotSet)));
    }

    #[test]
    fn should_require_a_target() {
        let result = prepare().with_message("hi").with_image("in.png").execute();
        assert!(matches!(result, Err(StegoError::TargetNotSet)));
    }

    #[test]
    fn should_require_a_message() {
        let result = prepare()
            .use_message(None::<&str>)
            .with_image("in.png")
            .with_output("out.png")
            .execute();
        assert!(matches!(result, Err(StegoError::MissingMessage)));
    }
}
