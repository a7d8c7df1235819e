use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::codec::LsbCodec;
use crate::media::PixelBuffer;
use crate::metrics::AnalysisReport;
use crate::{Result, StegoError};

pub const MESSAGE_FILE: &str = "message.txt";
pub const REPORT_FILE: &str = "report.txt";

pub fn prepare() -> AnalyzeApi {
    AnalyzeApi::default()
}

#[derive(Default, Debug)]
pub struct AnalyzeApi {
    cover: Option<PathBuf>,
    stego: Option<PathBuf>,
    output_dir: Option<PathBuf>,
}

impl AnalyzeApi {
    pub fn with_cover<A: AsRef<Path>>(mut self, cover: A) -> Self {
        self.cover = Some(cover.as_ref().to_path_buf());
        self
    }

    pub fn with_stego<A: AsRef<Path>>(mut self, stego: A) -> Self {
        self.stego = Some(stego.as_ref().to_path_buf());
        self
    }

    /// Results are stored below `<output_dir>/<cover file stem>/`
    pub fn into_output_dir<A: AsRef<Path>>(mut self, output_dir: A) -> Self {
        self.output_dir = Some(output_dir.as_ref().to_path_buf());
        self
    }

    pub fn use_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        self.output_dir = output_dir;
        self
    }

    pub fn execute(self) -> Result<AnalysisReport> {
        let Some(cover_file) = self.cover else {
            return Err(StegoError::MissingCover);
        };
        let Some(stego_file) = self.stego else {
            return Err(StegoError::MissingStego);
        };

        let cover = PixelBuffer::from_file(&cover_file)?;
        let stego = PixelBuffer::from_file(&stego_file)?;
        let report = AnalysisReport::compare(&cover, &stego)?;

        if let Some(output_dir) = self.output_dir {
            let stem = cover_file
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "cover".to_string());
            let target = output_dir.join(stem);
            fs::create_dir_all(&target).map_err(|source| StegoError::WriteError { source })?;

            fs::write(target.join(MESSAGE_FILE), LsbCodec::decode(&stego))
                .map_err(|source| StegoError::WriteError { source })?;
            fs::write(target.join(REPORT_FILE), format!("{report}\n"))
                .map_err(|source| StegoError::WriteError { source })?;
            info!("analysis results written to {target:?}");
        }

        Ok(report)
    }
}
