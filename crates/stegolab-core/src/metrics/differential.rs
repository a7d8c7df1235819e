use super::{ensure_same_dimensions, MAX_VALUE};
use crate::media::{PixelBuffer, CHANNELS};
use crate::result::Result;

/// differential measures between two images, both in percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NpcrUaci {
    /// share of pixels whose RGB triple differs at all
    pub npcr: f64,
    /// mean absolute channel difference relative to the full value range
    pub uaci: f64,
}

pub fn npcr_uaci(a: &PixelBuffer, b: &PixelBuffer) -> Result<NpcrUaci> {
    ensure_same_dimensions(a, b)?;

    let mut changed = 0_usize;
    let mut total_difference = 0_u64;
    for (p, q) in a.pixels().zip(b.pixels()) {
        if p != q {
            changed += 1;
        }
        total_difference += p
            .iter()
            .zip(q)
            .map(|(x, y)| x.abs_diff(*y) as u64)
            .sum::<u64>();
    }
    let pixels = a.pixel_count() as f64;

    Ok(NpcrUaci {
        npcr: changed as f64 / pixels * 100.0,
        uaci: total_difference as f64 / (pixels * CHANNELS as f64 * MAX_VALUE) * 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StegoError;
    use crate::test_utils::prepare_noise_image;

    #[test]
    fn should_be_zero_for_identical_images() {
        let x = prepare_noise_image(8, 8);
        assert_eq!(
            npcr_uaci(&x, &x).unwrap(),
            NpcrUaci {
                npcr: 0.0,
                uaci: 0.0
            }
        );
    }

    #[test]
    fn should_reach_100_percent_for_inverted_extremes() {
        let black = PixelBuffer::new(2, 2, vec![0; 12]).unwrap();
        let white = PixelBuffer::new(2, 2, vec![255; 12]).unwrap();
        let r = npcr_uaci(&black, &white).unwrap();

        assert_eq!(r.npcr, 100.0);
        assert_eq!(r.uaci, 100.0);
    }

    #[test]
    fn should_count_a_pixel_once_when_several_channels_change() {
        let a = PixelBuffer::new(2, 1, vec![0, 0, 0, 0, 0, 0]).unwrap();
        let b = PixelBuffer::new(2, 1, vec![51, 51, 0, 0, 0, 0]).unwrap();
        let r = npcr_uaci(&a, &b).unwrap();

        assert_eq!(r.npcr, 50.0);
        assert!((r.uaci - 102.0 / (6.0 * 255.0) * 100.0).abs() < 1e-12);
    }

    #[test]
    fn should_reject_mismatching_dimensions() {
        let a = prepare_noise_image(4, 2);
        let b = prepare_noise_image(2, 4);
        assert!(matches!(
            npcr_uaci(&a, &b),
            Err(StegoError::DimensionMismatch { .. })
        ));
    }
}
