use std::fmt;

use super::{
    chi_square_all_channels, correlation, entropy, npcr_uaci, psnr, ssim, ChiSquareReport,
    Correlation, NpcrUaci,
};
use crate::media::PixelBuffer;
use crate::result::Result;

/// All measures for a cover image and the stego image derived from it
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub psnr: f64,
    pub ssim: f64,
    pub entropy_cover: f64,
    pub entropy_stego: f64,
    pub correlation_cover: Correlation,
    pub correlation_stego: Correlation,
    pub npcr_uaci: NpcrUaci,
    /// pairs-of-values test of the stego image
    pub detection: ChiSquareReport,
}

impl AnalysisReport {
    pub fn compare(cover: &PixelBuffer, stego: &PixelBuffer) -> Result<Self> {
        Ok(Self {
            psnr: psnr(cover, stego)?,
            ssim: ssim(cover, stego)?,
            entropy_cover: entropy(cover),
            entropy_stego: entropy(stego),
            correlation_cover: correlation(cover),
            correlation_stego: correlation(stego),
            npcr_uaci: npcr_uaci(cover, stego)?,
            detection: chi_square_all_channels(stego),
        })
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PSNR: {:.2} dB", self.psnr)?;
        writeln!(f, "SSIM: {:.6}", self.ssim)?;
        writeln!(
            f,
            "Entropy (cover/stego): {:.4} / {:.4} bits",
            self.entropy_cover, self.entropy_stego
        )?;
        for (name, c) in [
            ("cover", &self.correlation_cover),
            ("stego", &self.correlation_stego),
        ] {
            writeln!(
                f,
                "Correlation {name} (h/v/d): {:.6} / {:.6} / {:.6}",
                c.horizontal, c.vertical, c.diagonal
            )?;
        }
        writeln!(f, "NPCR: {:.2}%", self.npcr_uaci.npcr)?;
        writeln!(f, "UACI: {:.2}%", self.npcr_uaci.uaci)?;
        for r in self.detection.channels.iter() {
            writeln!(
                f,
                "Chi-square {}: {:.4} (dof {}, p {:.4})",
                r.channel, r.chi_square, r.degrees_of_freedom, r.p_value
            )?;
        }
        write!(
            f,
            "Detection: {}",
            if self.detection.overall_detected {
                "DETECTED"
            } else {
                "NOT DETECTED"
            }
        )
    }
}
