//! Population statistics over the values of a single channel plane.

pub fn mean(values: &[u8]) -> f64 {
    values.iter().map(|v| *v as f64).sum::<f64>() / values.len() as f64
}

pub fn variance(values: &[u8], mean: f64) -> f64 {
    covariance(values, values, mean, mean)
}

pub fn covariance(a: &[u8], b: &[u8], mean_a: f64, mean_b: f64) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (*x as f64 - mean_a) * (*y as f64 - mean_b))
        .sum::<f64>()
        / a.len() as f64
}
