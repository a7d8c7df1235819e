use super::stats::{covariance, mean, variance};
use super::{ensure_same_dimensions, MAX_VALUE};
use crate::media::{Channel, PixelBuffer};
use crate::result::Result;

/// Peak signal-to-noise ratio in dB over all channel bytes,
/// `f64::INFINITY` for identical images.
pub fn psnr(cover: &PixelBuffer, stego: &PixelBuffer) -> Result<f64> {
    ensure_same_dimensions(cover, stego)?;

    let squared_error: u64 = cover
        .as_bytes()
        .iter()
        .zip(stego.as_bytes())
        .map(|(a, b)| {
            let d = a.abs_diff(*b) as u64;
            d * d
        })
        .sum();
    if squared_error == 0 {
        return Ok(f64::INFINITY);
    }
    let mse = squared_error as f64 / cover.channel_count() as f64;

    Ok(10.0 * (MAX_VALUE * MAX_VALUE / mse).log10())
}

/// Structural similarity, computed per channel over the whole image as one window
/// and averaged over R, G and B.
///
/// The stabilizing constants are `0.01 * 255` and `0.03 * 255` *without* squaring.
/// Results are therefore not comparable with other SSIM implementations,
/// see [`ssim_textbook`] for that.
pub fn ssim(cover: &PixelBuffer, stego: &PixelBuffer) -> Result<f64> {
    global_ssim(cover, stego, 0.01 * MAX_VALUE, 0.03 * MAX_VALUE)
}

/// Like [`ssim`], but with the conventional constants `(0.01 * 255)²` and `(0.03 * 255)²`.
pub fn ssim_textbook(cover: &PixelBuffer, stego: &PixelBuffer) -> Result<f64> {
    let (k1, k2) = (0.01 * MAX_VALUE, 0.03 * MAX_VALUE);
    global_ssim(cover, stego, k1 * k1, k2 * k2)
}

fn global_ssim(cover: &PixelBuffer, stego: &PixelBuffer, c1: f64, c2: f64) -> Result<f64> {
    ensure_same_dimensions(cover, stego)?;

    let total: f64 = Channel::ALL
        .iter()
        .map(|c| {
            let x: Vec<u8> = cover.channel(*c).collect();
            let y: Vec<u8> = stego.channel(*c).collect();
            let (mu1, mu2) = (mean(&x), mean(&y));
            let sigma1_sq = variance(&x, mu1);
            let sigma2_sq = variance(&y, mu2);
            let sigma12 = covariance(&x, &y, mu1, mu2);

            ((2.0 * mu1 * mu2 + c1) * (2.0 * sigma12 + c2))
                / ((mu1 * mu1 + mu2 * mu2 + c1) * (sigma1_sq + sigma2_sq + c2))
        })
        .sum();

    Ok(total / Channel::ALL.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::LsbCodec;
    use crate::error::StegoError;
    use crate::test_utils::prepare_noise_image;

    #[test]
    fn should_be_infinite_for_identical_images() {
        let x = prepare_noise_image(8, 8);
        assert_eq!(psnr(&x, &x).unwrap(), f64::INFINITY);
    }

    #[test]
    fn should_compute_psnr_over_all_bytes() {
        // one byte off by 255 out of 3 bytes: mse = 255² / 3
        let a = PixelBuffer::new(1, 1, vec![0, 0, 0]).unwrap();
        let b = PixelBuffer::new(1, 1, vec![255, 0, 0]).unwrap();
        let expected = 10.0 * 3.0_f64.log10();

        assert!((psnr(&a, &b).unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn should_keep_lsb_embedding_above_50_db() {
        let cover = prepare_noise_image(32, 32);
        let stego = LsbCodec::encode(&cover, "Hello World!");
        assert!(psnr(&cover, &stego).unwrap() > 50.0);
    }

    #[test]
    fn should_be_one_for_identical_images() {
        let x = prepare_noise_image(8, 8);
        assert!((ssim(&x, &x).unwrap() - 1.0).abs() < 1e-9);
        assert!((ssim_textbook(&x, &x).unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn should_be_one_for_flat_identical_images() {
        let x = PixelBuffer::new(2, 2, vec![0; 12]).unwrap();
        assert!((ssim(&x, &x).unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn should_use_unsquared_constants() {
        // flat black vs. flat white: means 0 and 255, no variance at all
        let a = PixelBuffer::new(1, 1, vec![0, 0, 0]).unwrap();
        let b = PixelBuffer::new(1, 1, vec![255, 255, 255]).unwrap();
        let c1 = 0.01 * 255.0;
        let expected = c1 / (255.0 * 255.0 + c1);
        let textbook = c1 * c1 / (255.0 * 255.0 + c1 * c1);

        assert!((ssim(&a, &b).unwrap() - expected).abs() < 1e-12);
        assert!((ssim_textbook(&a, &b).unwrap() - textbook).abs() < 1e-12);
    }

    #[test]
    fn should_drop_for_an_inverted_image() {
        let a = prepare_noise_image(16, 16);
        let inverted = PixelBuffer::new(
            16,
            16,
            a.as_bytes().iter().map(|v| u8::MAX - v).collect(),
        )
        .unwrap();

        assert!(ssim(&a, &inverted).unwrap() < 0.5);
    }

    #[test]
    fn should_reject_mismatching_dimensions() {
        let a = prepare_noise_image(4, 4);
        let b = prepare_noise_image(4, 5);
        assert!(matches!(psnr(&a, &b), Err(StegoError::DimensionMismatch { .. })));
        assert!(matches!(ssim(&a, &b), Err(StegoError::DimensionMismatch { .. })));
    }
}
