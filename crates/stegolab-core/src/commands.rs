use std::path::Path;

use crate::api::hide::HideReport;
use crate::codec::{CodecOptions, LsbCodec};
use crate::media::PixelBuffer;
use crate::metrics::AnalysisReport;
use crate::Result;

/// capacity figures of a carrier image
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Capacity {
    pub bits: usize,
    pub bytes: usize,
    pub max_message_len: usize,
}

impl From<&PixelBuffer> for Capacity {
    fn from(buffer: &PixelBuffer) -> Self {
        Self {
            bits: LsbCodec::capacity(buffer),
            bytes: LsbCodec::capacity_bytes(buffer),
            max_message_len: LsbCodec::max_message_len(buffer),
        }
    }
}

pub fn hide(
    media: &Path,
    write_to_file: &Path,
    message: &str,
    options: CodecOptions,
) -> Result<HideReport> {
    crate::api::hide::prepare()
        .with_options(options)
        .with_image(media)
        .with_output(write_to_file)
        .with_message(message)
        .execute()
}

pub fn unveil(secret_media: &Path, output_file: Option<&Path>) -> Result<String> {
    crate::api::unveil::prepare()
        .from_secret_file(secret_media)
        .use_output_file(output_file.map(Path::to_path_buf))
        .execute()
}

pub fn analyze(cover: &Path, stego: &Path, output_dir: Option<&Path>) -> Result<AnalysisReport> {
    crate::api::analyze::prepare()
        .with_cover(cover)
        .with_stego(stego)
        .use_output_dir(output_dir.map(Path::to_path_buf))
        .execute()
}

pub fn capacity(media: &Path) -> Result<Capacity> {
    Ok(Capacity::from(&PixelBuffer::from_file(media)?))
}
