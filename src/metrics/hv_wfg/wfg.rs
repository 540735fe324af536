use log::debug;

use crate::core::{Front, HvError, Point};
use crate::metrics::hv_wfg::front_set::FrontSet;
use crate::metrics::hv_wfg::sort::sort_improving;
use crate::metrics::hv_wfg::strategy::{Strategy, StrategyConfig};
use crate::metrics::hypervolume::check_args;
use crate::metrics::hypervolume_2d::hv_2d;
use crate::metrics::hypervolume_3d::hv_3d;

/// This struct implements the algorithm by While et al. (2012) to calculate the exact
/// hyper-volume of a front of points. The volume of the front is the sum of the exclusive volumes
/// of its points; the exclusive volume of a point is its inclusive volume minus the volume of the
/// front bounded by the point (the limit set), which is calculated recursively.
///
/// Depending on the [`Strategy`], the front is sorted at each recursion level and the last
/// objective is sliced, so that the recursion ends on the closed forms for two or three
/// objectives.
///
/// > Lyndon While, Lucas Bradstreet, and Luigi Barone. A Fast Way of Calculating Exact
/// > Hypervolumes. IEEE Transactions on Evolutionary Computation 16(1), 2012.
///
/// # Example
/// ```
///  use hv_wfg::core::{Front, ObjectiveDirection, Point};
///  use hv_wfg::metrics::hv_wfg::{Strategy, StrategyConfig, Wfg};
///
///  let front = Front::from_values(&[vec![1.0, 2.0, 3.0], vec![3.0, 2.0, 1.0]]).unwrap();
///  let reference_point = Point::from([4.0, 4.0, 4.0]);
///  let config = StrategyConfig::new(Strategy::Slice3D, ObjectiveDirection::Minimise);
///  let hv = Wfg::new(&front, &reference_point, config).unwrap();
///  assert_eq!(hv.calculate().unwrap(), 6.0 + 6.0 - 2.0);
/// ```
#[derive(Debug)]
pub struct Wfg<'a> {
    /// The reference point coordinates.
    reference_point: &'a [f64],
    /// The points whose hyper-volume is calculated.
    front: &'a [Point],
    /// The number of objectives.
    number_of_objectives: usize,
    /// The strategy and objective direction.
    config: StrategyConfig,
}

impl<'a> Wfg<'a> {
    /// Initialise the `Wfg` structure to calculate hyper-volume. This returns an error if the
    /// reference point has a different number of objectives, if a coordinate is not a finite
    /// number or if a point lies outside the region bounded by the reference point.
    ///
    /// # Arguments
    ///
    /// * `front`: The front. The points are never modified.
    /// * `reference_point`: The reference point.
    /// * `config`: The strategy and the objective direction.
    ///
    /// returns: `Result<Wfg, HvError>`
    pub fn new(
        front: &'a Front,
        reference_point: &'a Point,
        config: StrategyConfig,
    ) -> Result<Self, HvError> {
        check_args(front, reference_point, config.direction)?;
        Ok(Self::from_checked(front, reference_point, config))
    }

    /// Initialise the structure with input already validated with [`check_args`].
    pub(crate) fn from_checked(
        front: &'a Front,
        reference_point: &'a Point,
        config: StrategyConfig,
    ) -> Self {
        Self {
            reference_point: reference_point.objectives(),
            front: front.points(),
            number_of_objectives: front.number_of_objectives(),
            config,
        }
    }

    /// Calculate the hyper-volume. The input points are copied, so the front is never sorted or
    /// modified.
    ///
    /// returns: `Result<f64, HvError>`
    pub fn calculate(&self) -> Result<f64, HvError> {
        if self.front.is_empty() {
            return Ok(0.0);
        }

        let mut set = FrontSet::new(
            self.config.strategy,
            self.front.len(),
            self.number_of_objectives,
        )?;
        let mut points = Vec::new();
        points
            .try_reserve_exact(self.front.len())
            .map_err(|e| HvError::AllocationFailure(e.to_string()))?;
        points.extend_from_slice(self.front);

        debug!(
            "Calculating hyper-volume of {} points with {} {} objectives using {}",
            points.len(),
            self.number_of_objectives,
            self.config.direction,
            self.config.strategy
        );
        let volume = self.volume(&mut set, &mut points, self.number_of_objectives)?;
        debug!(
            "Reached recursion depth {} with {} allocated fronts",
            set.max_depth(),
            set.allocated_depth()
        );

        Ok(volume)
    }

    /// Calculate the hyper-volume of a front using its first `obj_count` objectives.
    ///
    /// # Arguments
    ///
    /// * `set`: The calculation context.
    /// * `front`: The front. This is sorted in place when the strategy requires it.
    /// * `obj_count`: The number of objectives to process.
    ///
    /// returns: `Result<f64, HvError>`
    fn volume(
        &self,
        set: &mut FrontSet,
        front: &mut [Point],
        obj_count: usize,
    ) -> Result<f64, HvError> {
        match front.len() {
            0 => return Ok(0.0),
            1 => return Ok(self.inclusive_hv(&front[0], obj_count)),
            _ => {}
        }

        let strategy = self.config.strategy;
        let direction = self.config.direction;
        if strategy.sorts() {
            sort_improving(
                front,
                direction,
                obj_count,
                strategy.ignored_objectives(set.depth()),
            );
        }

        if !strategy.slices() {
            let mut volume = 0.0;
            for p in 0..front.len() {
                volume += self.exclusive_hv(set, front, p, obj_count)?;
            }
            return Ok(volume);
        }

        match obj_count {
            1 => return Ok(self.hv_1d(front)),
            2 => return Ok(hv_2d(front, self.reference_point, direction)),
            3 if strategy == Strategy::Slice3D => {
                return Ok(hv_3d(
                    front,
                    self.reference_point,
                    direction,
                    set.stairs_mut(),
                ));
            }
            _ => {}
        }

        // the slices are taken from the best point along the last objective
        let last = obj_count - 1;
        let mut volume = 0.0;
        for p in (0..front.len()).rev() {
            let slice = (front[p].objectives()[last] - self.reference_point[last]).abs();
            volume += slice * self.exclusive_hv(set, front, p, last)?;
        }
        Ok(volume)
    }

    /// Calculate the volume dominated only by the point at index `p` and not by the points after
    /// it.
    ///
    /// # Arguments
    ///
    /// * `set`: The calculation context.
    /// * `front`: The front.
    /// * `p`: The point index.
    /// * `obj_count`: The number of objectives to process.
    ///
    /// returns: `Result<f64, HvError>`
    fn exclusive_hv(
        &self,
        set: &mut FrontSet,
        front: &[Point],
        p: usize,
        obj_count: usize,
    ) -> Result<f64, HvError> {
        let volume = self.inclusive_hv(&front[p], obj_count);
        if p + 1 == front.len() {
            return Ok(volume);
        }

        let ignored_trailing = self.config.strategy.ignored_objectives(set.depth());
        let mut frame = set.limit_set(
            front,
            p,
            obj_count,
            self.config.direction,
            ignored_trailing,
        )?;
        let limit_volume = self.volume(set, frame.points_mut(), obj_count);
        set.release(frame);

        Ok(volume - limit_volume?)
    }

    /// Calculate the volume of the box between a point and the reference point.
    ///
    /// # Arguments
    ///
    /// * `point`: The point.
    /// * `obj_count`: The number of objectives to process.
    ///
    /// returns: `f64`
    fn inclusive_hv(&self, point: &Point, obj_count: usize) -> f64 {
        point
            .objectives()
            .iter()
            .zip(self.reference_point)
            .take(obj_count)
            .map(|(v, r)| (v - r).abs())
            .product()
    }

    /// The length of the longest segment between a point and the reference point when only the
    /// first objective is used.
    fn hv_1d(&self, front: &[Point]) -> f64 {
        front
            .iter()
            .map(|p| (p.objectives()[0] - self.reference_point[0]).abs())
            .fold(0.0, f64::max)
    }
}
