use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::core::ObjectiveDirection;

/// The algorithmic variant to use when calculating the hyper-volume. All variants return the
/// same value (up to the floating-point summation order); the choice only affects performance.
#[derive(Default, PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum Strategy {
    /// Do not apply any optimisation. The recursion depth is bounded by the number of points and
    /// the recursion fronts are allocated when a new depth is reached.
    NoPreprocessing,
    /// Sort the points before each recursion level, so that the objectives fixed by the
    /// recursion are not compared again.
    Presort,
    /// Sort the points and slice the front along the last objective, saving a level of recursion.
    /// Fronts with two objectives are solved in closed form.
    #[default]
    Slice2D,
    /// Like [`Strategy::Slice2D`], but fronts with three objectives are solved with a dimension
    /// sweep.
    Slice3D,
}

impl Strategy {
    /// Get the optimisation level of the strategy.
    ///
    /// return: `usize`
    pub fn level(&self) -> usize {
        match self {
            Strategy::NoPreprocessing => 0,
            Strategy::Presort => 1,
            Strategy::Slice2D => 2,
            Strategy::Slice3D => 3,
        }
    }

    /// Whether the front is sorted at each recursion level.
    ///
    /// return: `bool`
    pub fn sorts(&self) -> bool {
        self.level() > 0
    }

    /// Whether the last objective is sliced at each recursion level.
    ///
    /// return: `bool`
    pub fn slices(&self) -> bool {
        self.level() > 1
    }

    /// The number of trailing objectives that do not need to be compared at a recursion depth.
    /// With pre-sorting, each level fixes the value of one more trailing objective.
    ///
    /// # Arguments
    ///
    /// * `depth`: The recursion depth.
    ///
    /// return: `usize`
    pub(crate) fn ignored_objectives(&self, depth: usize) -> usize {
        match self {
            Strategy::Presort => depth,
            _ => 0,
        }
    }

    /// The number of recursion fronts to allocate upfront. Slicing saves a level of recursion.
    /// This is `0` when the fronts are allocated lazily.
    ///
    /// # Arguments
    ///
    /// * `number_of_objectives`: The number of objectives.
    ///
    /// return: `usize`
    pub(crate) fn preallocated_depth(&self, number_of_objectives: usize) -> usize {
        match self {
            Strategy::NoPreprocessing => 0,
            _ => number_of_objectives.saturating_sub(self.level() / 2 + 1),
        }
    }

    /// The number of steps to allocate for the staircase of the 3D base case. This is `0` for
    /// the other strategies. The staircase needs space for the two sentinels.
    ///
    /// # Arguments
    ///
    /// * `number_of_points`: The number of points in the front.
    ///
    /// return: `usize`
    pub(crate) fn staircase_capacity(&self, number_of_points: usize) -> usize {
        match self {
            Strategy::Slice3D => number_of_points + 2,
            _ => 0,
        }
    }

    /// The number of objectives of the front at a recursion depth. Slicing saves one objective
    /// at each level.
    ///
    /// # Arguments
    ///
    /// * `number_of_objectives`: The number of objectives.
    /// * `depth`: The recursion depth.
    ///
    /// return: `usize`
    pub(crate) fn frame_objectives(&self, number_of_objectives: usize, depth: usize) -> usize {
        number_of_objectives.saturating_sub((depth + 1) * (self.level() / 2))
    }
}

impl PartialOrd for Strategy {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.level().cmp(&other.level()))
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::NoPreprocessing => f.write_str("no pre-processing"),
            Strategy::Presort => f.write_str("pre-sorting"),
            Strategy::Slice2D => f.write_str("slicing to 2D"),
            Strategy::Slice3D => f.write_str("slicing to 3D"),
        }
    }
}

/// The options to calculate the hyper-volume.
#[derive(Default, PartialEq, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// The algorithmic variant. This is a performance lever only.
    #[serde(default)]
    pub strategy: Strategy,
    /// Whether the objectives are minimised or maximised.
    #[serde(default)]
    pub direction: ObjectiveDirection,
}

impl StrategyConfig {
    /// Create the options.
    ///
    /// # Arguments
    ///
    /// * `strategy`: The algorithmic variant.
    /// * `direction`: Whether the objectives are minimised or maximised.
    ///
    /// returns: `StrategyConfig`
    pub fn new(strategy: Strategy, direction: ObjectiveDirection) -> Self {
        Self {
            strategy,
            direction,
        }
    }
}
