//! Domain-to-pixel scales used by the chart layout.

use serde::{Deserialize, Serialize};

use crate::ticks::linear_ticks;

/// Maps a domain value onto a pixel coordinate.
pub trait Scale<T> {
    /// Returns the pixel position for `value`.
    fn scale(&self, value: T) -> f64;
}

/// Continuous proportional mapping between two numeric intervals.
///
/// Inputs outside the domain are extrapolated, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Creates a scale mapping `domain` onto `range`. Either interval may be
    /// descending.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Returns the input interval.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the output interval ordered as `(min, max)`.
    pub fn range_extent(&self) -> (f64, f64) {
        let (a, b) = self.range;
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Returns roughly `count` evenly spaced, human friendly domain values.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        linear_ticks(self.domain.0, self.domain.1, count)
    }

    fn normalize(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let span = d1 - d0;
        if span == 0.0 {
            0.0
        } else {
            (value - d0) / span
        }
    }
}

impl Scale<f64> for LinearScale {
    fn scale(&self, value: f64) -> f64 {
        let (r0, r1) = self.range;
        r0 + (r1 - r0) * self.normalize(value)
    }
}

/// Ordinal scale assigning each index `0..len` an evenly spaced band.
///
/// Band boundaries are rounded to whole pixels. The outer padding equals the
/// inner padding, and the leftover from rounding is split evenly on both
/// sides of the band run. A descending range assigns bands right to left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandScale {
    len: usize,
    reverse: bool,
    step: f64,
    offset: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Builds a rounded band scale over `len` indices spanning `range`.
    pub fn rounded(len: usize, range: (f64, f64), padding: f64) -> Self {
        let reverse = range.1 < range.0;
        let (start, stop) = if reverse {
            (range.1, range.0)
        } else {
            (range.0, range.1)
        };
        let n = len as f64;
        let step = ((stop - start) / (n - padding + 2.0 * padding)).floor();
        let error = stop - start - (n - padding) * step;
        let offset = start + (error / 2.0).round();
        let bandwidth = (step * (1.0 - padding)).round();
        Self {
            len,
            reverse,
            step,
            offset,
            bandwidth,
        }
    }

    /// Number of indices in the domain.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when the domain holds no indices.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Distance between the starts of neighbouring bands.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Position of the leftmost band.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Rounded pixel width of a single band.
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }
}

impl Scale<usize> for BandScale {
    fn scale(&self, index: usize) -> f64 {
        let slot = if self.reverse && index < self.len {
            self.len - 1 - index
        } else {
            index
        };
        self.offset + self.step * slot as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_linear_scale_hits_endpoints_exactly() {
        let y = LinearScale::new((0.0, 1.0), (250.0, 0.0));
        assert_eq!(y.scale(0.0), 250.0);
        assert_eq!(y.scale(1.0), 0.0);
        assert_eq!(y.scale(0.5), 125.0);
        assert_eq!(y.range_extent(), (0.0, 250.0));
    }

    #[test]
    fn linear_scale_extrapolates() {
        let y = LinearScale::new((0.0, 1.0), (250.0, 0.0));
        assert_eq!(y.scale(1.2), -50.0);
        assert_eq!(y.scale(-0.2), 300.0);
        assert!(y.scale(f64::NAN).is_nan());
    }

    #[test]
    fn collapsed_domain_maps_to_range_start() {
        let y = LinearScale::new((0.5, 0.5), (250.0, 0.0));
        assert_eq!(y.scale(0.9), 250.0);
    }

    #[test]
    fn three_bands_over_520_pixels() {
        let x = BandScale::rounded(3, (0.0, 520.0), 0.1);
        assert_eq!(x.step(), 167.0);
        assert_eq!(x.offset(), 18.0);
        assert_eq!(x.bandwidth(), 150.0);
        assert_eq!(x.scale(0), 18.0);
        assert_eq!(x.scale(1), 185.0);
        assert_eq!(x.scale(2), 352.0);
    }

    #[test]
    fn empty_band_scale_has_no_indices() {
        let x = BandScale::rounded(0, (0.0, 520.0), 0.1);
        assert!(x.is_empty());
        assert!(x.step().is_finite());
    }

    #[test]
    fn descending_range_assigns_bands_right_to_left() {
        let x = BandScale::rounded(2, (0.0, -50.0), 0.1);
        assert_eq!(x.step(), 23.0);
        assert_eq!(x.offset(), -47.0);
        assert_eq!(x.bandwidth(), 21.0);
        assert_eq!(x.scale(0), -24.0);
        assert_eq!(x.scale(1), -47.0);
    }

    #[test]
    fn zero_extent_collapses_bands() {
        let x = BandScale::rounded(5, (0.0, 0.0), 0.1);
        assert_eq!(x.step(), 0.0);
        assert_eq!(x.bandwidth(), 0.0);
        assert_eq!(x.scale(3), 0.0);
    }
}
