use std::fs;
use std::path::Path;

use log::{debug, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{Front, HvError, ObjectiveDirection, Point};
use crate::metrics::hv_wfg::{StrategyConfig, Wfg};
use crate::utils::{vector_max, vector_min};

/// Check the input arguments of the hyper-volume functions. This returns an error when:
/// - the reference point has no coordinates or a different number of objectives than the front;
/// - a coordinate of the reference point or of a point is not a finite number;
/// - the reference point beats a point in one objective. The reference point must be dominated by
///   all the points, otherwise the volume between a point and the reference point is undefined.
///
/// Points lying on the boundary of the reference point are accepted; they do not add any volume.
///
/// # Arguments
///
/// * `front`: The front.
/// * `reference_point`: The reference or anti-optimal point.
/// * `direction`: Whether the objectives are minimised or maximised.
///
/// returns: `Result<(), HvError>`
pub(crate) fn check_args(
    front: &Front,
    reference_point: &Point,
    direction: ObjectiveDirection,
) -> Result<(), HvError> {
    if reference_point.number_of_objectives() == 0 {
        return Err(HvError::NoObjectives);
    }
    reference_point.check("reference point", front.number_of_objectives())?;

    let mut points_on_boundary: usize = 0;
    for (point_idx, point) in front.points().iter().enumerate() {
        point.check(&format!("point #{}", point_idx), front.number_of_objectives())?;

        let mut on_boundary = false;
        for (obj_idx, (value, ref_value)) in point
            .objectives()
            .iter()
            .zip(reference_point.objectives())
            .enumerate()
        {
            if direction.beats(*ref_value, *value) {
                return Err(HvError::ReferencePointNotDominated(
                    point_idx,
                    obj_idx + 1,
                    *value,
                    *ref_value,
                ));
            }
            on_boundary |= value == ref_value;
        }
        if on_boundary {
            points_on_boundary += 1;
        }
    }

    if points_on_boundary > 0 {
        warn!(
            "{} points lie on the boundary of the reference point and do not contribute to the hyper-volume",
            points_on_boundary
        );
    }
    Ok(())
}

/// Calculate the exact hyper-volume of a front using the WFG algorithm by
/// [While et al. (2012)](http://dx.doi.org/10.1109/TEVC.2010.2077298). An empty front has a
/// volume of `0`.
///
/// # Arguments
///
/// * `front`: The front. Dominated and duplicated points are allowed.
/// * `reference_point`: The reference or anti-optimal point. This must be dominated by all the
///   points in the front.
/// * `config`: The strategy and the objective direction.
///
/// returns: `Result<f64, HvError>`
///
/// # Example
/// ```
///  use hv_wfg::core::{Front, Point};
///  use hv_wfg::metrics::compute_hypervolume;
///  use hv_wfg::metrics::hv_wfg::StrategyConfig;
///
///  let front = Front::from_values(&[vec![1.0, 2.0], vec![2.0, 1.0]]).unwrap();
///  let reference_point = Point::from([3.0, 3.0]);
///  let hv = compute_hypervolume(&front, &reference_point, &StrategyConfig::default()).unwrap();
///  assert_eq!(hv, 3.0);
/// ```
pub fn compute_hypervolume(
    front: &Front,
    reference_point: &Point,
    config: &StrategyConfig,
) -> Result<f64, HvError> {
    Wfg::new(front, reference_point, *config)?.calculate()
}

/// Calculate the hyper-volume of many fronts. Each front is calculated independently with its own
/// recursion fronts.
///
/// # Arguments
///
/// * `inputs`: The fronts and their reference points.
/// * `config`: The strategy and the objective direction used for all fronts.
/// * `parallel`: Whether to calculate the fronts in threads.
///
/// returns: `Result<Vec<f64>, HvError>`: The hyper-volume of each front, in the same order as
/// `inputs`.
pub fn compute_hypervolumes(
    inputs: &[(Front, Point)],
    config: &StrategyConfig,
    parallel: bool,
) -> Result<Vec<f64>, HvError> {
    debug!(
        "Calculating the hyper-volume of {} fronts (parallel = {})",
        inputs.len(),
        parallel
    );
    if parallel {
        inputs
            .into_par_iter()
            .map(|(front, reference_point)| compute_hypervolume(front, reference_point, config))
            .collect()
    } else {
        inputs
            .iter()
            .map(|(front, reference_point)| compute_hypervolume(front, reference_point, config))
            .collect()
    }
}

/// The data to calculate the hyper-volume from a JSON file. The `config` field is optional.
///
/// # Example
/// ```json
/// {
///   "points": [[1.0, 2.0], [2.0, 1.0]],
///   "reference_point": [3.0, 3.0],
///   "config": { "strategy": "Slice2D", "direction": "Minimise" }
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HyperVolumeInput {
    /// The coordinates of each point.
    pub points: Vec<Vec<f64>>,
    /// The coordinates of the reference point.
    pub reference_point: Vec<f64>,
    /// The strategy and the objective direction.
    #[serde(default)]
    pub config: StrategyConfig,
}

impl HyperVolumeInput {
    /// Read the data from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `file`: The path to the JSON file.
    ///
    /// returns: `Result<HyperVolumeInput, HvError>`
    pub fn from_json_file(file: &Path) -> Result<Self, HvError> {
        if !file.exists() {
            return Err(HvError::File(format!(
                "The file {:?} does not exist",
                file
            )));
        }
        let data = fs::read_to_string(file)
            .map_err(|e| HvError::File(format!("Cannot read the JSON file because: {e}")))?;
        serde_json::from_str(&data)
            .map_err(|e| HvError::File(format!("Cannot parse the JSON file because: {e}")))
    }
}

/// Struct to calculate the exact hyper-volume metric of a front. The input is validated once when
/// the struct is created; the volume is calculated with [`HyperVolume::compute`] using the WFG
/// algorithm (see [`Wfg`]).
///
/// The hyper-volume can be calculated from the following sources:
/// - a [`Front`] using [`HyperVolume::new`]
/// - a JSON file using [`HyperVolume::from_file`]
///
/// # Example
/// ```
///  use hv_wfg::core::{Front, ObjectiveDirection, Point};
///  use hv_wfg::metrics::HyperVolume;
///  use hv_wfg::metrics::hv_wfg::{Strategy, StrategyConfig};
///
///  let front = Front::from_values(&[vec![1.0, 5.0], vec![2.0, 3.0], vec![3.0, 1.0]]).unwrap();
///  let config = StrategyConfig::new(Strategy::Slice2D, ObjectiveDirection::Maximise);
///  let hv = HyperVolume::new(front, Point::from([0.0, 0.0]), config).unwrap();
///  assert_eq!(hv.compute().unwrap(), 9.0);
/// ```
#[derive(Debug, Clone)]
pub struct HyperVolume {
    /// The front.
    front: Front,
    /// The reference point.
    reference_point: Point,
    /// The strategy and the objective direction.
    config: StrategyConfig,
}

impl HyperVolume {
    /// Validate the data to calculate the hyper-volume.
    ///
    /// # Arguments
    ///
    /// * `front`: The front.
    /// * `reference_point`: The reference or anti-optimal point to use in the calculation. If you
    ///   are not sure about the point to use you could pick the worst value of each objective
    ///   using [`HyperVolume::estimate_reference_point`].
    /// * `config`: The strategy and the objective direction.
    ///
    /// returns: `Result<HyperVolume, HvError>`
    pub fn new(
        front: Front,
        reference_point: Point,
        config: StrategyConfig,
    ) -> Result<Self, HvError> {
        check_args(&front, &reference_point, config.direction)?;
        debug!("Reference point is {}", reference_point);

        Ok(Self {
            front,
            reference_point,
            config,
        })
    }

    /// Read the front, the reference point and the options from a JSON file. See
    /// [`HyperVolumeInput`] for the file format.
    ///
    /// # Arguments
    ///
    /// * `file`: The path to the JSON file.
    ///
    /// returns: `Result<HyperVolume, HvError>`
    pub fn from_file(file: &Path) -> Result<Self, HvError> {
        Self::try_from(HyperVolumeInput::from_json_file(file)?)
    }

    /// Calculate the hyper-volume.
    ///
    /// returns: `Result<f64, HvError>`
    pub fn compute(&self) -> Result<f64, HvError> {
        Wfg::from_checked(&self.front, &self.reference_point, self.config).calculate()
    }

    /// Get the front.
    ///
    /// returns: `&Front`
    pub fn front(&self) -> &Front {
        &self.front
    }

    /// Get the reference point.
    ///
    /// returns: `&Point`
    pub fn reference_point(&self) -> &Point {
        &self.reference_point
    }

    /// Get the options.
    ///
    /// returns: `StrategyConfig`
    pub fn config(&self) -> StrategyConfig {
        self.config
    }

    /// Calculate a reference point by taking the worst value of each objective in the front. An
    /// optional offset can be added to move the point away from the front; otherwise the points
    /// with the worst values lie on the boundary of the reference point and do not contribute to
    /// the volume.
    ///
    /// # Arguments
    ///
    /// * `front`: The front.
    /// * `direction`: Whether the objectives are minimised or maximised.
    /// * `offset`: The offset to add to each coordinate when the objectives are minimised, or to
    ///   subtract when they are maximised. This must have one value per objective.
    ///
    /// returns: `Result<Point, HvError>`
    pub fn estimate_reference_point(
        front: &Front,
        direction: ObjectiveDirection,
        offset: Option<&[f64]>,
    ) -> Result<Point, HvError> {
        if front.is_empty() {
            return Err(HvError::EmptyFront("reference point".to_string()));
        }
        if let Some(offset) = offset {
            if offset.len() != front.number_of_objectives() {
                return Err(HvError::DimensionMismatch(
                    "offset".to_string(),
                    offset.len(),
                    front.number_of_objectives(),
                ));
            }
        }

        let mut coordinates = Vec::with_capacity(front.number_of_objectives());
        for obj_idx in 0..front.number_of_objectives() {
            let values = front.objective_values(obj_idx)?;
            let coordinate = match direction {
                ObjectiveDirection::Minimise => vector_max(&values),
                ObjectiveDirection::Maximise => vector_min(&values),
            }?;
            coordinates.push(coordinate);
        }

        // move the point away from the front
        if let Some(offset) = offset {
            for (coordinate, delta) in coordinates.iter_mut().zip(offset) {
                *coordinate += direction.sign() * delta;
            }
        }

        Ok(Point::new(coordinates))
    }
}

impl TryFrom<HyperVolumeInput> for HyperVolume {
    type Error = HvError;

    fn try_from(value: HyperVolumeInput) -> Result<Self, Self::Error> {
        let reference_point = Point::new(value.reference_point);
        let front = Front::with_objectives(
            reference_point.number_of_objectives(),
            value.points.into_iter().map(Point::new).collect(),
        )?;
        Self::new(front, reference_point, value.config)
    }
}
