//! One-dimensional Gaussian kernel density estimate.
//!
//! Bandwidth follows Scott's rule: the sample standard deviation (n - 1
//! denominator) scaled by `n^(-1/5)`.

use std::f64::consts::PI;

#[derive(Debug, Clone)]
pub struct GaussianKde {
    samples: Vec<f64>,
    bandwidth: f64,
}

impl GaussianKde {
    /// `None` for fewer than two samples or zero spread, where no density
    /// can be fitted.
    #[expect(clippy::cast_precision_loss, reason = "sample counts stay far below 2^53")]
    pub fn fit(samples: Vec<f64>) -> Option<Self> {
        let n = samples.len();
        if n < 2 {
            return None;
        }
        let nf = n as f64;
        let mean = samples.iter().sum::<f64>() / nf;
        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (nf - 1.0);
        let bandwidth = variance.sqrt() * nf.powf(-0.2);
        if !bandwidth.is_finite() || bandwidth <= 0.0 {
            return None;
        }
        Some(Self { samples, bandwidth })
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    #[expect(clippy::cast_precision_loss, reason = "sample counts stay far below 2^53")]
    pub fn density(&self, x: f64) -> f64 {
        let h = self.bandwidth;
        let norm = 1.0 / ((2.0 * PI).sqrt() * h * self.samples.len() as f64);
        self.samples.iter().map(|xi| (-0.5 * ((x - xi) / h).powi(2)).exp()).sum::<f64>() * norm
    }
}

/// `points` evenly spaced values from `start` to `end`, both included.
#[expect(clippy::cast_precision_loss, reason = "point counts are small")]
pub fn linspace(start: f64, end: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (points - 1) as f64;
            (0..points)
                .map(|i| if i == points - 1 { end } else { start + step * i as f64 })
                .collect()
        },
    }
}
