use crate::core::{ObjectiveDirection, Point};

/// Calculate the hyper-volume of a front with three objectives with a dimension sweep along the
/// third objective. Points are processed from the best to the worst value of the third
/// objective while the non-dominated staircase of the first two objectives, and the area it
/// covers, is updated; the area is then integrated over the gap to the next point. Only the first
/// three coordinates of the points are used.
///
/// **IMPLEMENTATION NOTES**:
/// 1) The points must be sorted improving in the third objective (see
///    [`crate::metrics::hv_wfg::sort_improving`]). Dominated and duplicated points are allowed.
/// 2) The staircase is stored in `stairs` between two sentinels, so that every point always has a
///    left and a right neighbour. The buffer is cleared first and can be reused between calls.
///
/// # Arguments
///
/// * `points`: The sorted points.
/// * `reference_point`: The reference point coordinates.
/// * `direction`: Whether the objectives are minimised or maximised.
/// * `stairs`: The staircase buffer.
///
/// returns: `f64`
pub fn hv_3d(
    points: &[Point],
    reference_point: &[f64],
    direction: ObjectiveDirection,
    stairs: &mut Vec<(f64, f64)>,
) -> f64 {
    // work with minimised coordinates
    let sign = direction.sign();
    let ref_x = sign * reference_point[0];
    let ref_y = sign * reference_point[1];
    let ref_z = sign * reference_point[2];

    stairs.clear();
    stairs.push((f64::NEG_INFINITY, ref_y));
    stairs.push((ref_x, f64::NEG_INFINITY));

    let mut area = 0.0;
    let mut volume = 0.0;
    let mut last_z: Option<f64> = None;
    for point in points.iter().rev() {
        let values = point.objectives();
        let z = sign * values[2];
        if let Some(last_z) = last_z {
            volume += area * (z - last_z);
        }
        last_z = Some(z);
        area += insert_step(stairs, sign * values[0], sign * values[1]);
    }

    match last_z {
        Some(last_z) => volume + area * (ref_z - last_z),
        None => 0.0,
    }
}

/// Add the point `(x, y)` to the staircase and return the area it adds to the region covered by
/// the staircase. The steps are sorted by increasing `x` and decreasing `y`. Steps dominated by
/// the new point are removed. Nothing changes if the point is dominated.
///
/// # Arguments
///
/// * `stairs`: The staircase with the sentinels.
/// * `x`: The first coordinate.
/// * `y`: The second coordinate.
///
/// returns: `f64`
fn insert_step(stairs: &mut Vec<(f64, f64)>, x: f64, y: f64) -> f64 {
    // the last step with a coordinate not larger than x dominates the point
    let right = stairs.partition_point(|s| s.0 <= x);
    if stairs[right - 1].1 <= y {
        return 0.0;
    }

    let left = stairs.partition_point(|s| s.0 < x);
    let mut cur_x = x;
    let mut cur_y = stairs[left - 1].1;
    let mut added = 0.0;
    let mut end = left;
    while stairs[end].1 >= y {
        added += (stairs[end].0 - cur_x) * (cur_y - y);
        cur_x = stairs[end].0;
        cur_y = stairs[end].1;
        end += 1;
    }
    added += (stairs[end].0 - cur_x) * (cur_y - y);

    stairs.splice(left..end, [(x, y)]);
    added
}
