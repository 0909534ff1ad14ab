//! Longitude and latitude sample ranges.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::layout::SphereLayout;

/// The `phi` (longitude) and `theta` (latitude) samples of a sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterRanges {
    /// `n_phi` longitudes in `[0, 2π)`, endpoint excluded.
    pub phi: Vec<f64>,
    /// `n_theta - 2` latitudes strictly between the poles, south to north.
    pub theta: Vec<f64>,
}

impl ParameterRanges {
    /// Compute the sample ranges for a layout.
    pub fn new(layout: &SphereLayout) -> Self {
        let n_phi = layout.points_per_circle();
        let phi = linspace(0.0, TAU, n_phi, false);

        // Keep one latitude step between the outermost rows and the poles
        let step = PI / (layout.num_circles() - 1) as f64;
        let theta = linspace(-FRAC_PI_2 + step, FRAC_PI_2 - step, layout.num_rows(), true);

        Self { phi, theta }
    }
}

/// `num` evenly spaced samples from `start` towards `stop`.
///
/// With `endpoint` the last sample is `stop`; otherwise the interval is split
/// into `num` steps and `stop` is excluded. A single sample is `start`.
fn linspace(start: f64, stop: f64, num: usize, endpoint: bool) -> Vec<f64> {
    let divisions = if endpoint { num.saturating_sub(1) } else { num };
    if divisions == 0 {
        return vec![start; num];
    }
    let step = (stop - start) / divisions as f64;
    (0..num)
        .map(|k| {
            if endpoint && k + 1 == num {
                stop
            } else {
                start + step * k as f64
            }
        })
        .collect()
}
