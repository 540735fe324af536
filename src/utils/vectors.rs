use crate::core::HvError;

/// Calculate the vector minimum value.
///
/// # Arguments
///
/// * `v`: The vector.
///
/// returns: `Result<f64, HvError>`
pub fn vector_min(v: &[f64]) -> Result<f64, HvError> {
    Ok(*v
        .iter()
        .min_by(|a, b| a.total_cmp(b))
        .ok_or(HvError::Generic(
            "Cannot calculate vector min value".to_string(),
        ))?)
}

/// Calculate the vector maximum value.
///
/// # Arguments
///
/// * `v`: The vector.
///
/// returns: `Result<f64, HvError>`
pub fn vector_max(v: &[f64]) -> Result<f64, HvError> {
    Ok(*v
        .iter()
        .max_by(|a, b| a.total_cmp(b))
        .ok_or(HvError::Generic(
            "Cannot calculate vector max value".to_string(),
        ))?)
}
