use crate::core::{ObjectiveDirection, Point};
use crate::metrics::hv_wfg::dominance::improving_order;

/// Sort the points in place so that they improve along the last processed objective, with ties
/// broken on the previous objectives (see [`improving_order`]). The sort is not stable.
///
/// # Arguments
///
/// * `points`: The points to sort.
/// * `direction`: Whether the objectives are minimised or maximised.
/// * `obj_count`: The number of objectives to process.
/// * `ignored_trailing`: The number of trailing objectives to skip.
///
/// returns: `()`
pub fn sort_improving(
    points: &mut [Point],
    direction: ObjectiveDirection,
    obj_count: usize,
    ignored_trailing: usize,
) {
    points.sort_unstable_by(|p, q| {
        improving_order(
            p.objectives(),
            q.objectives(),
            direction,
            obj_count,
            ignored_trailing,
        )
    });
}
