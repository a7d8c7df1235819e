use super::histogram::channel_histogram;
use crate::media::{Channel, PixelBuffer};

/// p-values below this threshold flag a channel as carrying LSB embedded data
pub const DETECTION_THRESHOLD: f64 = 0.05;

/// Outcome of the pairs-of-values test for one channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChiSquareResult {
    pub channel: Channel,
    pub chi_square: f64,
    /// number of value pairs `(2k, 2k+1)` that occurred at all
    pub degrees_of_freedom: usize,
    /// `exp(-chi_square / (2 * degrees_of_freedom))`, an approximation and no survival function
    pub p_value: f64,
    pub detected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChiSquareReport {
    pub channels: [ChiSquareResult; 3],
    pub overall_detected: bool,
}

/// Chi-square pairs-of-values test over the histogram of one channel.
///
/// LSB embedding equalizes the frequencies of the values `2k` and `2k+1`,
/// so a small chi-square (and a small p-value) hints at hidden data.
/// Pairs that never occur are skipped; a valid buffer has at least one pixel,
/// hence at least one degree of freedom.
pub fn chi_square(buffer: &PixelBuffer, channel: Channel) -> ChiSquareResult {
    let h = channel_histogram(buffer, channel);

    let mut chi_square = 0.0;
    let mut degrees_of_freedom = 0;
    for pair in h.chunks_exact(2) {
        let total = pair[0] + pair[1];
        if total == 0 {
            continue;
        }
        let expected = total as f64 / 2.0;
        chi_square += pair
            .iter()
            .map(|observed| (*observed as f64 - expected).powi(2) / expected)
            .sum::<f64>();
        degrees_of_freedom += 1;
    }
    let p_value = (-chi_square / (2.0 * degrees_of_freedom as f64)).exp();

    ChiSquareResult {
        channel,
        chi_square,
        degrees_of_freedom,
        p_value,
        detected: p_value < DETECTION_THRESHOLD,
    }
}

pub fn chi_square_all_channels(buffer: &PixelBuffer) -> ChiSquareReport {
    let channels = Channel::ALL.map(|c| chi_square(buffer, c));

    ChiSquareReport {
        overall_detected: channels.iter().any(|r| r.detected),
        channels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_uniform_histogram_image;

    #[test]
    fn should_not_detect_a_uniform_histogram() {
        let report = chi_square_all_channels(&prepare_uniform_histogram_image());

        for r in report.channels.iter() {
            assert_eq!(r.chi_square, 0.0, "channel {}", r.channel);
            assert_eq!(r.degrees_of_freedom, 128);
            assert_eq!(r.p_value, 1.0);
            assert!(!r.detected);
        }
        assert!(!report.overall_detected);
    }

    #[test]
    fn should_detect_fully_unbalanced_pairs() {
        // red only holds even values, green and blue are balanced
        let buf = PixelBuffer::from_fn(64, 1, |x, _| {
            [(x as u8 % 8) * 2, x as u8 % 2, 100 + x as u8 % 2]
        })
        .unwrap();
        let report = chi_square_all_channels(&buf);
        let red = report.channels[0];

        // 8 pairs with 8 observations each, all on the even value
        assert_eq!(red.degrees_of_freedom, 8);
        assert_eq!(red.chi_square, 64.0);
        assert!((red.p_value - (-4.0_f64).exp()).abs() < 1e-12);
        assert!(red.detected);
        assert!(!report.channels[1].detected);
        assert!(!report.channels[2].detected);
        assert!(report.overall_detected);
    }

    #[test]
    fn should_only_look_at_the_selected_channel() {
        let buf = PixelBuffer::new(2, 1, vec![0, 7, 7, 1, 7, 7]).unwrap();
        let r = chi_square(&buf, Channel::Red);

        assert_eq!(r.channel, Channel::Red);
        assert_eq!(r.degrees_of_freedom, 1);
        assert_eq!(r.chi_square, 0.0);

        let g = chi_square(&buf, Channel::Green);
        assert_eq!(g.degrees_of_freedom, 1);
        assert_eq!(g.chi_square, 2.0);
    }
}
