use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::{Front, ObjectiveDirection, Point};

/// Get the random number generator. If no seed is provided, the default seed is used.
///
/// # Arguments
///
/// * `seed`: The optional seed number.
///
/// returns: `Box<dyn RngCore>`
pub(crate) fn get_rng(seed: Option<u64>) -> Box<dyn RngCore> {
    let rng = match seed {
        None => ChaCha8Rng::from_seed(Default::default()),
        Some(s) => ChaCha8Rng::seed_from_u64(s),
    };
    Box::new(rng)
}

/// Generate a front with random coordinates in the `[0, 1)` range. When `on_sphere` is `true`,
/// the points are projected on the positive unit hyper-sphere, so that most of them are
/// non-dominated; otherwise many points are dominated.
///
/// # Arguments
///
/// * `rng`: The random number generator.
/// * `number_of_points`: The number of points to generate.
/// * `number_of_objectives`: The number of objectives.
/// * `on_sphere`: Whether to project the points on the unit sphere.
///
/// returns: `Front`
pub(crate) fn random_front(
    rng: &mut dyn RngCore,
    number_of_points: usize,
    number_of_objectives: usize,
    on_sphere: bool,
) -> Front {
    let points = (0..number_of_points)
        .map(|_| {
            let mut values: Vec<f64> = (0..number_of_objectives)
                .map(|_| rng.gen_range(0.01..1.0))
                .collect();
            if on_sphere {
                let norm = values.iter().map(|v| v * v).sum::<f64>().sqrt();
                values.iter_mut().for_each(|v| *v /= norm);
            }
            Point::new(values)
        })
        .collect();
    Front::with_objectives(number_of_objectives, points).unwrap()
}

/// Mirror a front and a reference point, so that a minimisation problem becomes a maximisation
/// one with the same hyper-volume.
///
/// # Arguments
///
/// * `front`: The front.
/// * `reference_point`: The reference point.
///
/// returns: `(Front, Point)`
pub(crate) fn mirror(front: &Front, reference_point: &Point) -> (Front, Point) {
    let flip = |p: &Point| Point::new(p.objectives().iter().map(|v| -v).collect());
    (
        Front::with_objectives(
            front.number_of_objectives(),
            front.points().iter().map(flip).collect(),
        )
        .unwrap(),
        flip(reference_point),
    )
}

/// Calculate the exact hyper-volume by splitting the space into the grid built from the point
/// and reference point coordinates, and summing the volume of the cells dominated by at least
/// one point. This is exponential in the number of objectives and must only be used on small
/// fronts.
///
/// # Arguments
///
/// * `front`: The front.
/// * `reference_point`: The reference point.
/// * `direction`: The objective direction.
///
/// returns: `f64`
pub(crate) fn brute_force_hv(
    front: &Front,
    reference_point: &Point,
    direction: ObjectiveDirection,
) -> f64 {
    let d = front.number_of_objectives();
    let sign = direction.sign();
    let points: Vec<Vec<f64>> = front
        .points()
        .iter()
        .map(|p| p.objectives().iter().map(|v| sign * v).collect())
        .collect();
    let reference: Vec<f64> = reference_point
        .objectives()
        .iter()
        .map(|v| sign * v)
        .collect();

    // grid lines
    let grid: Vec<Vec<f64>> = (0..d)
        .map(|j| {
            let mut lines: Vec<f64> = points.iter().map(|p| p[j]).collect();
            lines.push(reference[j]);
            lines.sort_by(|a, b| a.total_cmp(b));
            lines.dedup();
            lines
        })
        .collect();

    let mut volume = 0.0;
    let mut cell = vec![0_usize; d];
    loop {
        if (0..d).all(|j| cell[j] + 1 < grid[j].len()) {
            let corner: Vec<f64> = (0..d).map(|j| grid[j][cell[j]]).collect();
            if points
                .iter()
                .any(|p| p.iter().zip(&corner).all(|(v, c)| v <= c))
            {
                volume += (0..d)
                    .map(|j| grid[j][cell[j] + 1] - grid[j][cell[j]])
                    .product::<f64>();
            }
        }

        // next cell
        let mut j = 0;
        loop {
            if j == d {
                return volume;
            }
            cell[j] += 1;
            if cell[j] < grid[j].len() {
                break;
            }
            cell[j] = 0;
            j += 1;
        }
    }
}

/// Assert that two values are equal within a relative tolerance.
///
/// # Arguments
///
/// * `calculated`: The calculated value.
/// * `expected`: The expected value.
/// * `r_tol`: The relative tolerance.
/// * `label`: The label to show in the panic message.
///
/// returns: `()`
pub(crate) fn assert_rel_eq(calculated: f64, expected: f64, r_tol: f64, label: &str) {
    let scale = calculated.abs().max(expected.abs()).max(f64::MIN_POSITIVE);
    if (calculated - expected).abs() / scale > r_tol {
        panic!(
            r#"assertion failed for {label}: `(left approx_eq right)`
                left: `{calculated:?}`,
                right: `{expected:?}`"#,
        )
    }
}
