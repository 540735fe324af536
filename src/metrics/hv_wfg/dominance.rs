use std::cmp::Ordering;

use crate::core::ObjectiveDirection;

/// The dominance relationship between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// The first point dominates the second one.
    Dominates,
    /// The first point is dominated by the second one.
    Dominated,
    /// The points have the same coordinates.
    Equal,
    /// Neither point dominates the other.
    Incomparable,
}

/// Compare two points using the two-way dominance test. The objectives are scanned from the
/// last considered index down to the first one; on the first objective where a point strictly
/// beats the other, the remaining objectives are checked for a reversal.
///
/// # Arguments
///
/// * `p`: The coordinates of the first point.
/// * `q`: The coordinates of the second point.
/// * `direction`: Whether the objectives are minimised or maximised.
/// * `obj_count`: The number of objectives to process.
/// * `ignored_trailing`: The number of trailing objectives (out of `obj_count`) to skip. These
///    are objectives whose values are known to be equal in both points.
///
/// returns: `Dominance`
pub fn dominance(
    p: &[f64],
    q: &[f64],
    direction: ObjectiveDirection,
    obj_count: usize,
    ignored_trailing: usize,
) -> Dominance {
    let last = obj_count.saturating_sub(ignored_trailing);
    for i in (0..last).rev() {
        if direction.beats(p[i], q[i]) {
            if (0..i).rev().any(|j| direction.beats(q[j], p[j])) {
                return Dominance::Incomparable;
            }
            return Dominance::Dominates;
        } else if direction.beats(q[i], p[i]) {
            if (0..i).rev().any(|j| direction.beats(p[j], q[j])) {
                return Dominance::Incomparable;
            }
            return Dominance::Dominated;
        }
    }
    Dominance::Equal
}

/// The "improving" order used to sort fronts: `p` comes before `q` when `q` beats `p` on the
/// highest-indexed objective where the two points differ. After sorting, points improve along
/// the last objective, with ties broken on the previous objectives.
///
/// # Arguments
///
/// * `p`: The coordinates of the first point.
/// * `q`: The coordinates of the second point.
/// * `direction`: Whether the objectives are minimised or maximised.
/// * `obj_count`: The number of objectives to process.
/// * `ignored_trailing`: The number of trailing objectives to skip.
///
/// returns: `Ordering`
pub fn improving_order(
    p: &[f64],
    q: &[f64],
    direction: ObjectiveDirection,
    obj_count: usize,
    ignored_trailing: usize,
) -> Ordering {
    let last = obj_count.saturating_sub(ignored_trailing);
    for i in (0..last).rev() {
        if direction.beats(p[i], q[i]) {
            return Ordering::Greater;
        } else if direction.beats(q[i], p[i]) {
            return Ordering::Less;
        }
    }
    Ordering::Equal
}
