use crate::core::{ObjectiveDirection, Point};

/// Calculate the hyper-volume of a front with two objectives by summing the areas of the
/// rectangles between the staircase of the front and the reference point. Only the first two
/// coordinates of the points are used.
///
/// **IMPLEMENTATION NOTES**:
/// 1) The points must be sorted improving in the second objective, with ties broken on the first
///    objective (see [`crate::metrics::hv_wfg::sort_improving`]).
/// 2) Points dominated by a point later in the sorted order do not contribute to the area and
///    are skipped. The strips are summed starting from the last (best) point.
///
/// # Arguments
///
/// * `points`: The sorted points.
/// * `reference_point`: The reference point coordinates.
/// * `direction`: Whether the objectives are minimised or maximised.
///
/// returns: `f64`
pub fn hv_2d(points: &[Point], reference_point: &[f64], direction: ObjectiveDirection) -> f64 {
    let Some(last) = points.last() else {
        return 0.0;
    };

    let mut x = last.objectives()[0];
    let mut y = last.objectives()[1];
    let mut volume = 0.0;
    for point in points.iter().rev().skip(1) {
        let values = point.objectives();
        if !direction.beats(values[0], x) {
            continue;
        }
        // strip between this point and the previous non-dominated one
        volume += ((x - reference_point[0]) * (y - values[1])).abs();
        x = values[0];
        y = values[1];
    }

    volume + ((x - reference_point[0]) * (y - reference_point[1])).abs()
}
