use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Whether the objectives should be minimised or maximised. Default is minimise. The direction
/// is shared by all the objectives of a front.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectiveDirection {
    #[default]
    /// Minimise the objectives.
    Minimise,
    /// Maximise the objectives.
    Maximise,
}

impl ObjectiveDirection {
    /// Check whether the objective value `x` strictly beats `y`.
    ///
    /// # Arguments
    ///
    /// * `x`: The first objective value.
    /// * `y`: The second objective value.
    ///
    /// returns: `bool`
    #[inline]
    pub fn beats(&self, x: f64, y: f64) -> bool {
        match self {
            ObjectiveDirection::Minimise => x < y,
            ObjectiveDirection::Maximise => x > y,
        }
    }

    /// Get the worse value between two objective values. When the two values are equal, `y` is
    /// returned.
    ///
    /// # Arguments
    ///
    /// * `x`: The first objective value.
    /// * `y`: The second objective value.
    ///
    /// returns: `f64`
    #[inline]
    pub fn worse(&self, x: f64, y: f64) -> f64 {
        if self.beats(y, x) {
            x
        } else {
            y
        }
    }

    /// The sign to apply to an objective value to convert it to a minimised objective.
    ///
    /// returns: `f64`
    pub(crate) fn sign(&self) -> f64 {
        match self {
            ObjectiveDirection::Minimise => 1.0,
            ObjectiveDirection::Maximise => -1.0,
        }
    }
}

impl Display for ObjectiveDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjectiveDirection::Minimise => f.write_str("minimised"),
            ObjectiveDirection::Maximise => f.write_str("maximised"),
        }
    }
}
