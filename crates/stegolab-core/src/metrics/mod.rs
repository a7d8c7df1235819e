//! Statistical and quality measures over one or two [`PixelBuffer`]s.
//!
//! All functions are pure. Functions comparing two buffers require identical
//! dimensions and return [`StegoError::DimensionMismatch`] otherwise.

mod analysis;
mod chi_square;
mod correlation;
mod differential;
mod fidelity;
mod histogram;
pub mod stats;

pub use analysis::AnalysisReport;
pub use chi_square::{
    chi_square, chi_square_all_channels, ChiSquareReport, ChiSquareResult, DETECTION_THRESHOLD,
};
pub use correlation::{correlation, Correlation};
pub use differential::{npcr_uaci, NpcrUaci};
pub use fidelity::{psnr, ssim, ssim_textbook};
pub use histogram::{entropy, histogram, Histogram};

pub use crate::media::Channel;

use crate::error::StegoError;
use crate::media::PixelBuffer;
use crate::result::Result;

/// largest value of a channel byte
pub(crate) const MAX_VALUE: f64 = u8::MAX as f64;

fn ensure_same_dimensions(left: &PixelBuffer, right: &PixelBuffer) -> Result<()> {
    if left.same_dimensions(right) {
        Ok(())
    } else {
        Err(StegoError::DimensionMismatch {
            left: left.dimensions(),
            right: right.dimensions(),
        })
    }
}
