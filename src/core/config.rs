//! # Configuration
//!
//! Knobs for the codec and the random population generator.
//!
//! - `Encoding` - which on-disk form `write`/`read` use
//! - `Bounds` - the closed sampling range of every axis
//! - `GeneratorConfig` - the optional retry cap for rejection sampling

use super::point::{Point, Scalar};
use crate::ports::{GeoError, GeoResult};

/// On-disk encoding of a container
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Encoding {
    /// Raw in-memory records, concatenated. Not portable across builds.
    #[default]
    Binary,
    /// One comma-separated line per record
    Text,
}

impl Encoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Binary => "binary",
            Encoding::Text => "text",
        }
    }
}

/// Closed `[lo, hi]` range for each axis
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds<T, const N: usize> {
    ranges: [(T, T); N],
}

/// 2-dimensional bounds
pub type Bounds2<T> = Bounds<T, 2>;

/// 3-dimensional bounds
pub type Bounds3<T> = Bounds<T, 3>;

impl<T: Scalar, const N: usize> Bounds<T, N> {
    /// Create bounds from one `(lo, hi)` pair per axis
    ///
    /// Fails with `InvalidRange` if `lo > hi`, either end is not finite, or
    /// the range is too wide to sample uniformly.
    pub fn new(ranges: [(T, T); N]) -> GeoResult<Self> {
        for (axis, &(lo, hi)) in ranges.iter().enumerate() {
            // Negated so NaN fails too
            if !(lo <= hi) || !lo.is_finite() || !hi.is_finite() || !samplable_width(hi - lo) {
                return Err(GeoError::InvalidRange { axis });
            }
        }
        Ok(Self { ranges })
    }

    /// Same range on every axis
    pub fn uniform(lo: T, hi: T) -> GeoResult<Self> {
        Self::new([(lo, hi); N])
    }

    pub fn ranges(&self) -> &[(T, T); N] {
        &self.ranges
    }

    /// Whether `point` lies inside the bounds, ends included
    pub fn contains(&self, point: &Point<T, N>) -> bool {
        point
            .coords()
            .iter()
            .zip(self.ranges.iter())
            .all(|(&c, &(lo, hi))| lo <= c && c <= hi)
    }
}

/// `rand` scales an inclusive float range by `1 / (1 - ε)` and requires the
/// result to stay finite
fn samplable_width<T: Scalar>(width: T) -> bool {
    (width / (T::one() - T::epsilon())).is_finite()
}

/// Random population generator configuration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Maximum number of sampled candidates before giving up
    ///
    /// `None` (the default) retries forever: an unsatisfiable predicate
    /// never returns.
    pub max_attempts: Option<u64>,
}

impl GeneratorConfig {
    /// Unbounded rejection sampling
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the number of sampled candidates
    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::point::Point2;

    #[test]
    fn test_default_encoding_is_binary() {
        assert_eq!(Encoding::default(), Encoding::Binary);
        assert_eq!(Encoding::Text.as_str(), "text");
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = Bounds2::new([(0.0_f64, 1.0), (-1.0, 1.0)]).unwrap();
        assert!(bounds.contains(&Point2::from_xy(0.0, -1.0)));
        assert!(bounds.contains(&Point2::from_xy(1.0, 1.0)));
        assert!(!bounds.contains(&Point2::from_xy(1.5, 0.0)));
    }

    #[test]
    fn test_bounds_degenerate_range_allowed() {
        let bounds = Bounds3::uniform(2.0_f32, 2.0).unwrap();
        assert_eq!(bounds.ranges()[2], (2.0, 2.0));
    }

    #[test]
    fn test_bounds_rejects_inverted_range() {
        let result = Bounds2::new([(0.0_f64, 1.0), (1.0, 0.0)]);
        assert!(matches!(result, Err(GeoError::InvalidRange { axis: 1 })));
    }

    #[test]
    fn test_bounds_rejects_nan() {
        let result = Bounds2::new([(f32::NAN, 1.0), (0.0, 1.0)]);
        assert!(matches!(result, Err(GeoError::InvalidRange { axis: 0 })));
    }

    #[test]
    fn test_bounds_rejects_infinite() {
        let result = Bounds2::<f64>::uniform(f64::NEG_INFINITY, f64::INFINITY);
        assert!(matches!(result, Err(GeoError::InvalidRange { axis: 0 })));

        let result = Bounds3::new([(0.0_f32, 1.0), (0.0, 1.0), (0.0, f32::INFINITY)]);
        assert!(matches!(result, Err(GeoError::InvalidRange { axis: 2 })));
    }

    #[test]
    fn test_bounds_rejects_overflowing_width() {
        let result = Bounds2::new([(0.0_f64, 1.0), (-f64::MAX, f64::MAX)]);
        assert!(matches!(result, Err(GeoError::InvalidRange { axis: 1 })));

        // Width exactly MAX overflows once scaled for inclusive sampling
        let result = Bounds2::new([(0.0_f32, f32::MAX), (0.0, 1.0)]);
        assert!(matches!(result, Err(GeoError::InvalidRange { axis: 0 })));

        let wide = Bounds2::uniform(-f64::MAX / 4.0, f64::MAX / 4.0).unwrap();
        assert_eq!(wide.ranges()[1], (-f64::MAX / 4.0, f64::MAX / 4.0));
    }

    #[test]
    fn test_generator_config() {
        assert_eq!(GeneratorConfig::new().max_attempts, None);
        assert_eq!(GeneratorConfig::new().with_max_attempts(10).max_attempts, Some(10));
    }
}
