use super::MAX_VALUE;
use crate::media::PixelBuffer;

/// Average absolute intensity difference between neighbouring pixels, normalized to `[0, 1]`.
///
/// Each direction is divided by the total pixel count, pixels without a neighbour
/// in a direction contribute 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correlation {
    pub horizontal: f64,
    pub vertical: f64,
    pub diagonal: f64,
}

fn intensity(buffer: &PixelBuffer, x: u32, y: u32) -> f64 {
    let [r, g, b] = buffer.pixel(x, y);
    (r as f64 + g as f64 + b as f64) / 3.0
}

fn difference(buffer: &PixelBuffer, at: (u32, u32), neighbour: (u32, u32)) -> f64 {
    (intensity(buffer, at.0, at.1) - intensity(buffer, neighbour.0, neighbour.1)).abs() / MAX_VALUE
}

pub fn correlation(buffer: &PixelBuffer) -> Correlation {
    let (width, height) = buffer.dimensions();
    let (mut horizontal, mut vertical, mut diagonal) = (0.0, 0.0, 0.0);

    for y in 0..height {
        for x in 0..width {
            let right = x + 1 < width;
            let below = y + 1 < height;
            if right {
                horizontal += difference(buffer, (x, y), (x + 1, y));
            }
            if below {
                vertical += difference(buffer, (x, y), (x, y + 1));
            }
            if right && below {
                diagonal += difference(buffer, (x, y), (x + 1, y + 1));
            }
        }
    }
    let count = buffer.pixel_count() as f64;

    Correlation {
        horizontal: horizontal / count,
        vertical: vertical / count,
        diagonal: diagonal / count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_be_zero_for_a_flat_image() {
        let buf = PixelBuffer::new(4, 4, vec![100; 48]).unwrap();
        let c = correlation(&buf);
        assert_eq!(c.horizontal, 0.0);
        assert_eq!(c.vertical, 0.0);
        assert_eq!(c.diagonal, 0.0);
    }

    #[test]
    fn should_divide_by_the_total_pixel_count() {
        // black | white
        // black | white
        let buf = PixelBuffer::from_fn(2, 2, |x, _| if x == 0 { [0; 3] } else { [255; 3] })
            .unwrap();
        let c = correlation(&buf);

        // 2 horizontal pairs of difference 1.0 over 4 pixels
        assert!((c.horizontal - 0.5).abs() < 1e-12);
        assert_eq!(c.vertical, 0.0);
        // 1 diagonal pair of difference 1.0 over 4 pixels
        assert!((c.diagonal - 0.25).abs() < 1e-12);
    }

    #[test]
    fn should_use_the_mean_of_the_channels() {
        let buf = PixelBuffer::new(2, 1, vec![30, 0, 0, 0, 0, 0]).unwrap();
        let c = correlation(&buf);
        assert!((c.horizontal - (10.0 / 255.0) / 2.0).abs() < 1e-12);
    }
}
