use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::codec::LsbCodec;
use crate::media::PixelBuffer;
use crate::{Result, StegoError};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_file: Option<PathBuf>,
}

impl UnveilApi {
    pub fn from_secret_file<A: AsRef<Path>>(mut self, secret_media: A) -> Self {
        self.secret_media = Some(secret_media.as_ref().to_path_buf());
        self
    }

    /// The message will also be written as UTF-8 into this file
    pub fn into_file<A: AsRef<Path>>(mut self, output_file: A) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    pub fn use_output_file(mut self, output_file: Option<PathBuf>) -> Self {
        self.output_file = output_file;
        self
    }

    pub fn execute(self) -> Result<String> {
        let Some(secret_media) = self.secret_media else {
            return Err(StegoError::CarrierNotSet);
        };

        let message = LsbCodec::decode(&PixelBuffer::from_file(&secret_media)?);

        if let Some(output_file) = self.output_file {
            fs::write(&output_file, message.as_bytes())
                .map_err(|source| StegoError::WriteError { source })?;
            info!("unveiled message written to {output_file:?}");
        }

        Ok(message)
    }
}
