use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::core::HvError;

/// A point in the objective space. The number of objectives is set when the point is created
/// and cannot be changed afterward.
///
/// # Example
/// ```
///  use hv_wfg::core::Point;
///
///  let p = Point::new(vec![0.5, 1.5]);
///  assert_eq!(p.number_of_objectives(), 2);
///  assert_eq!(p.objective(1).unwrap(), 1.5);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point(Vec<f64>);

impl Point {
    /// Create a new point.
    ///
    /// # Arguments
    ///
    /// * `objectives`: The objective values or coordinates.
    ///
    /// returns: `Point`
    pub fn new(objectives: Vec<f64>) -> Self {
        Self(objectives)
    }

    /// Create a point with all coordinates set to `0.0`. Used for the recursion frames.
    pub(crate) fn try_zeros(number_of_objectives: usize) -> Result<Self, HvError> {
        let mut point = Self(Vec::new());
        point.ensure_objectives(number_of_objectives)?;
        Ok(point)
    }

    /// Get the objective values.
    ///
    /// returns: `&[f64]`
    pub fn objectives(&self) -> &[f64] {
        &self.0
    }

    /// Get an objective value.
    ///
    /// # Arguments
    ///
    /// * `index`: The objective index.
    ///
    /// returns: `Result<f64, HvError>`: The objective or an error if the `index` does not exist.
    pub fn objective(&self, index: usize) -> Result<f64, HvError> {
        self.0.get(index).copied().ok_or(HvError::Generic(format!(
            "The objective index {} does not exist",
            index
        )))
    }

    /// Get the number of objectives.
    ///
    /// returns: `usize`
    pub fn number_of_objectives(&self) -> usize {
        self.0.len()
    }

    /// Mutable access to the coordinates. Only frame copies are ever rewritten.
    pub(crate) fn objectives_mut(&mut self) -> &mut [f64] {
        &mut self.0
    }

    /// Grow the point so that it can store at least `number_of_objectives` coordinates.
    ///
    /// # Arguments
    ///
    /// * `number_of_objectives`: The number of coordinates the point must hold.
    ///
    /// returns: `Result<(), HvError>`
    pub(crate) fn ensure_objectives(&mut self, number_of_objectives: usize) -> Result<(), HvError> {
        if self.0.len() < number_of_objectives {
            self.0
                .try_reserve_exact(number_of_objectives - self.0.len())
                .map_err(|e| HvError::AllocationFailure(e.to_string()))?;
            self.0.resize(number_of_objectives, 0.0);
        }
        Ok(())
    }

    /// Check that the point has the expected number of objectives and that all its coordinates
    /// are finite numbers.
    ///
    /// # Arguments
    ///
    /// * `name`: The point name to use in the error messages.
    /// * `number_of_objectives`: The expected number of objectives.
    ///
    /// returns: `Result<(), HvError>`
    pub(crate) fn check(&self, name: &str, number_of_objectives: usize) -> Result<(), HvError> {
        if self.0.len() != number_of_objectives {
            return Err(HvError::DimensionMismatch(
                name.to_string(),
                self.0.len(),
                number_of_objectives,
            ));
        }
        if let Some((idx, value)) = self.0.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(HvError::InvalidCoordinate(name.to_string(), idx + 1, *value));
        }
        Ok(())
    }
}

impl From<Vec<f64>> for Point {
    fn from(value: Vec<f64>) -> Self {
        Self(value)
    }
}

impl From<&[f64]> for Point {
    fn from(value: &[f64]) -> Self {
        Self(value.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Point {
    fn from(value: [f64; N]) -> Self {
        Self(value.to_vec())
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// A front with points. All the points have the same number of objectives. The front may be
/// empty and may contain duplicated or dominated points.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Front {
    /// The points in the front.
    points: Vec<Point>,
    /// The number of objectives of each point.
    number_of_objectives: usize,
}

impl Front {
    /// Create a front from a list of points. The number of objectives is taken from the first
    /// point. Use [`Front::with_objectives`] to create an empty front.
    ///
    /// # Arguments
    ///
    /// * `points`: The points.
    ///
    /// returns: `Result<Front, HvError>`
    pub fn new(points: Vec<Point>) -> Result<Self, HvError> {
        let number_of_objectives = points
            .first()
            .ok_or(HvError::EmptyFront("number of objectives".to_string()))?
            .number_of_objectives();
        Self::with_objectives(number_of_objectives, points)
    }

    /// Create a front whose points have `number_of_objectives` objectives. This returns an error
    /// if a point has a different number of objectives.
    ///
    /// # Arguments
    ///
    /// * `number_of_objectives`: The number of objectives.
    /// * `points`: The points. This may be empty.
    ///
    /// returns: `Result<Front, HvError>`
    pub fn with_objectives(
        number_of_objectives: usize,
        points: Vec<Point>,
    ) -> Result<Self, HvError> {
        if number_of_objectives == 0 {
            return Err(HvError::NoObjectives);
        }
        for (idx, point) in points.iter().enumerate() {
            if point.number_of_objectives() != number_of_objectives {
                return Err(HvError::DimensionMismatch(
                    format!("point #{}", idx),
                    point.number_of_objectives(),
                    number_of_objectives,
                ));
            }
        }
        Ok(Self {
            points,
            number_of_objectives,
        })
    }

    /// Create a front from the objective values. Each nested vector contains the objective
    /// values of one point.
    ///
    /// # Arguments
    ///
    /// * `values`: The objective values.
    ///
    /// returns: `Result<Front, HvError>`
    pub fn from_values(values: &[Vec<f64>]) -> Result<Self, HvError> {
        Self::new(values.iter().map(|v| Point::from(v.as_slice())).collect())
    }

    /// Add a new point to the front.
    ///
    /// # Arguments
    ///
    /// * `point`: The point to add.
    ///
    /// returns: `Result<(), HvError>`
    pub fn push(&mut self, point: Point) -> Result<(), HvError> {
        if point.number_of_objectives() != self.number_of_objectives {
            return Err(HvError::DimensionMismatch(
                format!("point #{}", self.points.len()),
                point.number_of_objectives(),
                self.number_of_objectives,
            ));
        }
        self.points.push(point);
        Ok(())
    }

    /// Get the points.
    ///
    /// returns: `&[Point]`
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Get the number of points.
    ///
    /// returns: `usize`
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the front has no points.
    ///
    /// returns: `bool`
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get the number of objectives.
    ///
    /// returns: `usize`
    pub fn number_of_objectives(&self) -> usize {
        self.number_of_objectives
    }

    /// Get the values of one objective for all the points.
    ///
    /// # Arguments
    ///
    /// * `index`: The objective index.
    ///
    /// returns: `Result<Vec<f64>, HvError>`
    pub fn objective_values(&self, index: usize) -> Result<Vec<f64>, HvError> {
        self.points.iter().map(|p| p.objective(index)).collect()
    }
}

#[cfg(test)]
mod test {
    use crate::core::{Front, HvError, Point};

    #[test]
    fn test_point_check() {
        let p = Point::new(vec![1.0, 2.0]);
        assert!(p.check("point", 2).is_ok());
        assert_eq!(
            p.check("point", 3).unwrap_err(),
            HvError::DimensionMismatch("point".to_string(), 2, 3)
        );

        let p = Point::new(vec![1.0, f64::NAN]);
        assert!(matches!(
            p.check("reference point", 2).unwrap_err(),
            HvError::InvalidCoordinate(_, 2, _)
        ));
        let p = Point::new(vec![f64::NEG_INFINITY, 1.0]);
        assert!(p
            .check("point #3", 2)
            .unwrap_err()
            .to_string()
            .contains("The coordinate #1 of the point #3 is not a finite number"));
    }

    #[test]
    fn test_ensure_objectives() {
        let mut p = Point::try_zeros(1).unwrap();
        p.ensure_objectives(3).unwrap();
        assert_eq!(p.objectives(), &[0.0, 0.0, 0.0]);
        // never shrinks
        p.ensure_objectives(2).unwrap();
        assert_eq!(p.number_of_objectives(), 3);
    }

    #[test]
    fn test_front_new() {
        let front = Front::from_values(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(front.len(), 2);
        assert_eq!(front.number_of_objectives(), 2);
        assert_eq!(front.objective_values(1).unwrap(), vec![2.0, 4.0]);

        let err = Front::from_values(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            HvError::DimensionMismatch("point #1".to_string(), 1, 2)
        );
        assert!(matches!(
            Front::new(vec![]).unwrap_err(),
            HvError::EmptyFront(_)
        ));
        assert_eq!(
            Front::with_objectives(0, vec![]).unwrap_err(),
            HvError::NoObjectives
        );
    }

    #[test]
    fn test_front_push() {
        let mut front = Front::with_objectives(3, vec![]).unwrap();
        assert!(front.is_empty());
        front.push(Point::from([1.0, 2.0, 3.0])).unwrap();
        assert!(front.push(Point::from([1.0, 2.0])).is_err());
        assert_eq!(front.len(), 1);
    }
}
