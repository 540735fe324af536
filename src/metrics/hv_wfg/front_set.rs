use std::mem;

use crate::core::{HvError, ObjectiveDirection, Point};
use crate::metrics::hv_wfg::dominance::{dominance, Dominance};
use crate::metrics::hv_wfg::strategy::Strategy;

/// A front used at one recursion depth. The buffer of points is only ever grown, so that it can
/// be reused by sibling calls at the same depth.
#[derive(Debug, Default)]
pub(crate) struct Frame {
    /// The point buffer. Only the first `number_of_individuals` points are live.
    points: Vec<Point>,
    /// The number of live points in the frame.
    number_of_individuals: usize,
}

impl Frame {
    /// Create a frame with `number_of_points` points with `number_of_objectives` objectives.
    ///
    /// # Arguments
    ///
    /// * `number_of_points`: The number of points to allocate.
    /// * `number_of_objectives`: The number of objectives of each point.
    ///
    /// returns: `Result<Frame, HvError>`
    fn with_capacity(number_of_points: usize, number_of_objectives: usize) -> Result<Self, HvError> {
        let mut frame = Frame::default();
        frame.ensure(number_of_points, number_of_objectives)?;
        Ok(frame)
    }

    /// Make sure that the frame can store `number_of_points` points with at least
    /// `number_of_objectives` objectives.
    ///
    /// # Arguments
    ///
    /// * `number_of_points`: The number of points the frame must hold.
    /// * `number_of_objectives`: The number of objectives of each point.
    ///
    /// returns: `Result<(), HvError>`
    fn ensure(&mut self, number_of_points: usize, number_of_objectives: usize) -> Result<(), HvError> {
        if self.points.len() < number_of_points {
            self.points
                .try_reserve_exact(number_of_points - self.points.len())
                .map_err(|e| HvError::AllocationFailure(e.to_string()))?;
        }
        for point in self.points.iter_mut().take(number_of_points) {
            point.ensure_objectives(number_of_objectives)?;
        }
        while self.points.len() < number_of_points {
            self.points.push(Point::try_zeros(number_of_objectives)?);
        }
        Ok(())
    }

    /// Get the live points.
    ///
    /// returns: `&mut [Point]`
    pub(crate) fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points[..self.number_of_individuals]
    }
}

/// The context of one hyper-volume calculation: the recursion depth and the arena of fronts
/// indexed by depth. Only one front per depth is live at any time.
#[derive(Debug)]
pub(crate) struct FrontSet {
    /// The fronts. The front at index `i` is the one built at depth `i`.
    fronts: Vec<Frame>,
    /// The current recursion depth.
    depth: usize,
    /// The maximum recursion depth reached so far.
    max_depth: usize,
    /// The staircase buffer used by the 3D base case.
    stairs: Vec<(f64, f64)>,
}

impl FrontSet {
    /// Allocate the recursion fronts for a strategy. Fronts beyond the preallocated depth are
    /// created when first needed.
    ///
    /// # Arguments
    ///
    /// * `strategy`: The strategy.
    /// * `number_of_points`: The number of points in the front whose hyper-volume is calculated.
    /// * `number_of_objectives`: The number of objectives.
    ///
    /// returns: `Result<FrontSet, HvError>`
    pub(crate) fn new(
        strategy: Strategy,
        number_of_points: usize,
        number_of_objectives: usize,
    ) -> Result<Self, HvError> {
        let depth = strategy.preallocated_depth(number_of_objectives);
        let mut fronts = Vec::new();
        fronts
            .try_reserve_exact(depth)
            .map_err(|e| HvError::AllocationFailure(e.to_string()))?;
        for d in 0..depth {
            fronts.push(Frame::with_capacity(
                number_of_points,
                strategy.frame_objectives(number_of_objectives, d),
            )?);
        }

        let mut stairs = Vec::new();
        stairs
            .try_reserve_exact(strategy.staircase_capacity(number_of_points))
            .map_err(|e| HvError::AllocationFailure(e.to_string()))?;

        Ok(Self {
            fronts,
            depth: 0,
            max_depth: 0,
            stairs,
        })
    }

    /// Get the current recursion depth.
    ///
    /// returns: `usize`
    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    /// Get the maximum recursion depth reached so far.
    ///
    /// returns: `usize`
    pub(crate) fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Get the number of fronts in the arena.
    ///
    /// returns: `usize`
    pub(crate) fn allocated_depth(&self) -> usize {
        self.fronts.len()
    }

    /// Get the staircase buffer of the 3D base case.
    ///
    /// returns: `&mut Vec<(f64, f64)>`
    pub(crate) fn stairs_mut(&mut self) -> &mut Vec<(f64, f64)> {
        &mut self.stairs
    }

    /// Build the limit set of the point at index `p` in the frame at the current depth: each point
    /// after `p` is bounded by `front[p]` (the worse coordinate is taken for each objective) and
    /// the dominated points are removed. Identical points are kept once. The frame is moved out
    /// of the arena and the depth increased; it must be given back with [`FrontSet::release`].
    ///
    /// # Arguments
    ///
    /// * `front`: The front being processed.
    /// * `p`: The index of the pivot point.
    /// * `obj_count`: The number of objectives to process.
    /// * `direction`: Whether the objectives are minimised or maximised.
    /// * `ignored_trailing`: The trailing objectives to skip in the dominance test.
    ///
    /// returns: `Result<Frame, HvError>`
    pub(crate) fn limit_set(
        &mut self,
        front: &[Point],
        p: usize,
        obj_count: usize,
        direction: ObjectiveDirection,
        ignored_trailing: usize,
    ) -> Result<Frame, HvError> {
        if self.depth >= self.fronts.len() {
            self.fronts
                .try_reserve(self.depth + 1 - self.fronts.len())
                .map_err(|e| HvError::AllocationFailure(e.to_string()))?;
            self.fronts.resize_with(self.depth + 1, Frame::default);
        }
        let mut frame = mem::take(&mut self.fronts[self.depth]);

        let pivot = front[p].objectives();
        let others = &front[p + 1..];
        frame.ensure(others.len(), obj_count)?;
        for (bounded, q) in frame.points.iter_mut().zip(others) {
            let bounded = bounded.objectives_mut();
            let q = q.objectives();
            for j in 0..obj_count {
                bounded[j] = direction.worse(pivot[j], q[j]);
            }
        }

        // remove dominated points by swapping them past the live points
        let mut size = others.len().min(1);
        for i in 1..others.len() {
            let mut j = 0;
            let mut keep = true;
            while j < size && keep {
                match dominance(
                    frame.points[i].objectives(),
                    frame.points[j].objectives(),
                    direction,
                    obj_count,
                    ignored_trailing,
                ) {
                    Dominance::Dominates => {
                        size -= 1;
                        frame.points.swap(j, size);
                    }
                    Dominance::Incomparable => j += 1,
                    Dominance::Dominated | Dominance::Equal => keep = false,
                }
            }
            if keep {
                frame.points.swap(size, i);
                size += 1;
            }
        }
        frame.number_of_individuals = size;

        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        Ok(frame)
    }

    /// Give back the frame taken with [`FrontSet::limit_set`] and go back one recursion level.
    ///
    /// # Arguments
    ///
    /// * `frame`: The frame.
    ///
    /// returns: `()`
    pub(crate) fn release(&mut self, frame: Frame) {
        self.depth -= 1;
        self.fronts[self.depth] = frame;
    }
}

#[cfg(test)]
mod test {
    use crate::core::{ObjectiveDirection, Point};
    use crate::metrics::hv_wfg::front_set::FrontSet;
    use crate::metrics::hv_wfg::strategy::Strategy;

    fn points(values: &[[f64; 3]]) -> Vec<Point> {
        values.iter().map(|v| Point::from(*v)).collect()
    }

    fn sorted_values(points: &mut [Point]) -> Vec<Vec<f64>> {
        let mut values: Vec<Vec<f64>> = points.iter().map(|p| p.objectives().to_vec()).collect();
        values.sort_by(|a, b| a.partial_cmp(b).unwrap());
        values
    }

    #[test]
    fn test_preallocation() {
        let set = FrontSet::new(Strategy::Slice2D, 10, 5).unwrap();
        assert_eq!(set.allocated_depth(), 3);
        assert_eq!(set.fronts[0].points.len(), 10);
        assert_eq!(set.fronts[0].points[0].number_of_objectives(), 4);
        assert_eq!(set.fronts[2].points[0].number_of_objectives(), 2);

        let set = FrontSet::new(Strategy::NoPreprocessing, 10, 5).unwrap();
        assert_eq!(set.allocated_depth(), 0);

        let set = FrontSet::new(Strategy::Slice3D, 10, 5).unwrap();
        assert!(set.stairs.capacity() >= 12);
    }

    #[test]
    /// Points are bounded by the pivot and dominated points are removed
    fn test_limit_set() {
        let front = points(&[
            [2.0, 2.0, 5.0],
            [1.0, 3.0, 4.0],
            [3.0, 1.0, 3.0],
            [4.0, 4.0, 2.0],
            [1.0, 3.0, 1.0],
        ]);
        let mut set = FrontSet::new(Strategy::NoPreprocessing, front.len(), 3).unwrap();
        let mut frame = set
            .limit_set(&front, 0, 3, ObjectiveDirection::Minimise, 0)
            .unwrap();
        assert_eq!(set.depth(), 1);

        // bounded points are [2, 3, 5], [3, 2, 5], [4, 4, 5], [2, 3, 5]
        assert_eq!(
            sorted_values(frame.points_mut()),
            vec![vec![2.0, 3.0, 5.0], vec![3.0, 2.0, 5.0]]
        );

        set.release(frame);
        assert_eq!(set.depth(), 0);
        assert_eq!(set.max_depth(), 1);
        assert_eq!(set.allocated_depth(), 1);
    }

    #[test]
    /// The limit set of the second to last point has one point
    fn test_limit_set_last_point() {
        let front = points(&[[2.0, 2.0, 5.0], [1.0, 3.0, 4.0]]);
        let mut set = FrontSet::new(Strategy::Presort, front.len(), 3).unwrap();
        let mut frame = set
            .limit_set(&front, 0, 3, ObjectiveDirection::Minimise, 0)
            .unwrap();
        assert_eq!(sorted_values(frame.points_mut()), vec![vec![2.0, 3.0, 5.0]]);
        set.release(frame);
    }

    #[test]
    /// The frame buffer is reused at the same depth
    fn test_frame_reuse() {
        let front = points(&[
            [1.0, 5.0, 1.0],
            [2.0, 4.0, 1.0],
            [3.0, 3.0, 1.0],
            [4.0, 2.0, 1.0],
        ]);
        let mut set = FrontSet::new(Strategy::NoPreprocessing, front.len(), 3).unwrap();
        let mut frame = set
            .limit_set(&front, 0, 3, ObjectiveDirection::Minimise, 0)
            .unwrap();
        // bounded points share the last two coordinates: only the best in the first one stays
        assert_eq!(sorted_values(frame.points_mut()), vec![vec![2.0, 5.0, 1.0]]);
        set.release(frame);

        let mut frame = set
            .limit_set(&front, 2, 3, ObjectiveDirection::Minimise, 0)
            .unwrap();
        assert_eq!(sorted_values(frame.points_mut()), vec![vec![4.0, 3.0, 1.0]]);
        assert_eq!(frame.points.len(), 3);
        set.release(frame);
    }

    #[test]
    fn test_limit_set_maximise() {
        let front = points(&[
            [2.0, 2.0, 2.0],
            [3.0, 1.0, 3.0],
            [1.0, 3.0, 3.0],
            [3.0, 3.0, 1.0],
        ]);
        let mut set = FrontSet::new(Strategy::NoPreprocessing, front.len(), 3).unwrap();
        let mut frame = set
            .limit_set(&front, 0, 3, ObjectiveDirection::Maximise, 0)
            .unwrap();
        // bounded points are [2, 1, 2], [1, 2, 2], [2, 2, 1]
        assert_eq!(
            sorted_values(frame.points_mut()),
            vec![vec![1.0, 2.0, 2.0], vec![2.0, 1.0, 2.0], vec![2.0, 2.0, 1.0]]
        );
        set.release(frame);
    }
}
