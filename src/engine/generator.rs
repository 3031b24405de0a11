//! # Population Generator
//!
//! Rejection sampling of points inside per-axis bounds.
//!
//! Each candidate draws one value per axis from the injected sampler, then
//! goes through the caller's predicate. Rejected candidates are discarded
//! and resampled until `count` have been accepted, or until the configured
//! attempt cap is hit.

use tracing::{debug, trace};

use crate::adapters::storage::{PointSet, RefPointSet};
use crate::core::config::{Bounds, GeneratorConfig};
use crate::core::{Id, Point, RefPoint, Scalar};
use crate::ports::{GeoError, GeoResult, UniformSampler};

/// Random population generator
///
/// Wraps a [`UniformSampler`] so tests can drive it deterministically.
#[derive(Clone, Debug)]
pub struct Generator<S> {
    sampler: S,
    config: GeneratorConfig,
}

impl<S> Generator<S> {
    /// Generator with the default (unbounded) configuration
    pub fn new(sampler: S) -> Self {
        Self::with_config(sampler, GeneratorConfig::default())
    }

    pub fn with_config(sampler: S, config: GeneratorConfig) -> Self {
        Self { sampler, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn into_sampler(self) -> S {
        self.sampler
    }

    /// Generate `count` id-less points
    pub fn generate_points<T: Scalar, const N: usize>(
        &mut self,
        count: usize,
        bounds: &Bounds<T, N>,
        accept: Option<&dyn Fn(&Point<T, N>) -> bool>,
    ) -> GeoResult<PointSet<T, N>>
    where
        S: UniformSampler<T>,
    {
        let points = self.fill(count, bounds, |_, point| point, accept)?;
        Ok(PointSet::from(points))
    }

    /// Generate `count` registered points with ids `0..count`
    ///
    /// The predicate sees each candidate with the id it would receive.
    /// Fails with `IdSpaceExhausted` before sampling when `count` exceeds
    /// `u32::MAX`.
    pub fn generate_ref_points<T: Scalar, const N: usize>(
        &mut self,
        count: usize,
        bounds: &Bounds<T, N>,
        accept: Option<&dyn Fn(&RefPoint<T, N>) -> bool>,
    ) -> GeoResult<RefPointSet<T, N>>
    where
        S: UniformSampler<T>,
    {
        if u32::try_from(count).is_err() {
            return Err(GeoError::IdSpaceExhausted { requested: count });
        }
        // `accepted < count <= u32::MAX`, so the cast is lossless
        let points = self.fill(
            count,
            bounds,
            |accepted, point| RefPoint::from_point(Id::new(accepted as u32), point),
            accept,
        )?;
        Ok(points.into_iter().collect())
    }

    fn sample<T: Scalar, const N: usize>(&mut self, bounds: &Bounds<T, N>) -> Point<T, N>
    where
        S: UniformSampler<T>,
    {
        let ranges = bounds.ranges();
        Point::new(std::array::from_fn(|axis| {
            let (lo, hi) = ranges[axis];
            self.sampler.sample(lo, hi)
        }))
    }

    fn fill<T: Scalar, const N: usize, R>(
        &mut self,
        count: usize,
        bounds: &Bounds<T, N>,
        mut candidate: impl FnMut(usize, Point<T, N>) -> R,
        accept: Option<&dyn Fn(&R) -> bool>,
    ) -> GeoResult<Vec<R>>
    where
        S: UniformSampler<T>,
    {
        let mut accepted = Vec::with_capacity(count);
        let mut attempts: u64 = 0;

        while accepted.len() < count {
            if let Some(max) = self.config.max_attempts {
                if attempts >= max {
                    return Err(GeoError::AttemptsExhausted {
                        accepted: accepted.len(),
                        attempts,
                    });
                }
            }
            attempts += 1;

            let item = candidate(accepted.len(), self.sample(bounds));
            if accept.map_or(true, |f| f(&item)) {
                accepted.push(item);
            } else {
                trace!(attempts, accepted = accepted.len(), "candidate rejected");
            }
        }

        debug!(count, attempts, dims = N, "generated population");
        Ok(accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::RngSampler;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn counting_sampler() -> impl FnMut(f64, f64) -> f64 {
        let mut next = 0.0;
        move |_, _| {
            let v = next;
            next += 1.0;
            v
        }
    }

    #[test]
    fn test_generate_points_within_bounds() {
        let bounds = Bounds::new([(-1.0, 1.0), (10.0, 20.0), (0.0, 0.0)]).unwrap();
        let mut gen = Generator::new(RngSampler::new(StdRng::seed_from_u64(42)));

        let set = gen.generate_points(200, &bounds, None).unwrap();
        assert_eq!(set.len(), 200);
        assert!(set.iter().all(|p| bounds.contains(p)));
        assert!(set.iter().all(|p| p.z() == 0.0));
    }

    #[test]
    fn test_generate_is_reproducible_with_seed() {
        let bounds = Bounds::uniform(0.0_f32, 5.0).unwrap();
        let a = Generator::new(RngSampler::new(StdRng::seed_from_u64(9)))
            .generate_points::<f32, 2>(20, &bounds, None)
            .unwrap();
        let b = Generator::new(RngSampler::new(StdRng::seed_from_u64(9)))
            .generate_points::<f32, 2>(20, &bounds, None)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_ref_points_assigns_ids_in_acceptance_order() {
        let bounds = Bounds::uniform(0.0, 100.0).unwrap();
        let mut gen = Generator::new(counting_sampler());
        let keep_multiples_of_four = |p: &RefPoint<f64, 2>| p.x() % 4.0 == 0.0;

        let set = gen
            .generate_ref_points(3, &bounds, Some(&keep_multiples_of_four))
            .unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(set.at(Id::new(0)).unwrap().coords(), &[0.0, 1.0]);
        assert_eq!(set.at(Id::new(1)).unwrap().coords(), &[4.0, 5.0]);
        assert_eq!(set.at(Id::new(2)).unwrap().coords(), &[8.0, 9.0]);
    }

    #[test]
    fn test_predicate_sees_candidate_id() {
        let bounds = Bounds::uniform(0.0, 1.0).unwrap();
        let mut gen = Generator::new(RngSampler::new(StdRng::seed_from_u64(1)));
        let ids_below_limit = |p: &RefPoint<f64, 3>| p.id().get() < 10;

        let set = gen
            .generate_ref_points(10, &bounds, Some(&ids_below_limit))
            .unwrap();
        assert_eq!(set.len(), 10);
        assert!((0..10).all(|i| set.contains(Id::new(i))));
    }

    #[test]
    fn test_generate_zero_count() {
        let bounds = Bounds::uniform(0.0, 1.0).unwrap();
        let never = |_: &Point<f64, 2>| false;
        let mut gen = Generator::new(counting_sampler());

        let set = gen.generate_points(0, &bounds, Some(&never)).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_attempt_cap_reports_progress() {
        let bounds = Bounds::uniform(0.0, 100.0).unwrap();
        let config = GeneratorConfig::new().with_max_attempts(10);
        let mut gen = Generator::with_config(counting_sampler(), config);
        let only_first = |p: &Point<f64, 2>| p.x() == 0.0;

        let result = gen.generate_points(3, &bounds, Some(&only_first));
        assert!(matches!(
            result,
            Err(GeoError::AttemptsExhausted {
                accepted: 1,
                attempts: 10
            })
        ));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_generate_ref_points_rejects_count_beyond_id_space() {
        let bounds = Bounds::uniform(0.0, 1.0).unwrap();
        let mut gen = Generator::new(counting_sampler());
        let requested = u32::MAX as usize + 1;

        let result = gen.generate_ref_points::<f64, 2>(requested, &bounds, None);
        assert!(matches!(
            result,
            Err(GeoError::IdSpaceExhausted { requested: r }) if r == requested
        ));
        // Rejected before any sampling
        let mut sampler = gen.into_sampler();
        assert_eq!(sampler(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_generate_with_very_wide_bounds() {
        let bounds = Bounds::uniform(-f64::MAX / 4.0, f64::MAX / 4.0).unwrap();
        let set = PointSet::<f64, 3>::random_generate(10, &bounds, None).unwrap();
        assert_eq!(set.len(), 10);
        assert!(set.iter().all(|p| bounds.contains(p)));
    }

    #[test]
    fn test_attempt_cap_not_hit_when_satisfiable() {
        let bounds = Bounds::uniform(0.0, 1.0).unwrap();
        let config = GeneratorConfig::new().with_max_attempts(5);
        let mut gen = Generator::with_config(RngSampler::new(StdRng::seed_from_u64(3)), config);

        let set = gen.generate_points::<f64, 2>(5, &bounds, None).unwrap();
        assert_eq!(set.len(), 5);
    }

    proptest! {
        #[test]
        fn prop_generated_points_satisfy_predicate(seed in any::<u64>(), count in 0usize..64) {
            let bounds = Bounds::new([(-5.0, 5.0), (-5.0, 5.0)]).unwrap();
            let upper_half = |p: &Point<f64, 2>| p.y() >= 0.0;
            let mut gen = Generator::new(RngSampler::new(StdRng::seed_from_u64(seed)));

            let set = gen.generate_points(count, &bounds, Some(&upper_half)).unwrap();
            prop_assert_eq!(set.len(), count);
            for p in &set {
                prop_assert!(bounds.contains(p));
                prop_assert!(upper_half(p));
            }
        }
    }
}
