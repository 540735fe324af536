use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
/// Errors raised by the library.
pub enum HvError {
    #[error("The following error occurred: {0}")]
    Generic(String),
    #[error("You must provide at least one objective to calculate the hyper-volume")]
    NoObjectives,
    #[error("The {0} has {1} objectives, but {2} were expected")]
    DimensionMismatch(String, usize, usize),
    #[error("The coordinate #{1} of the {0} is not a finite number ({2})")]
    InvalidCoordinate(String, usize, f64),
    #[error("The coordinate #{1} of point #{0} ({2}) is beyond the reference point coordinate ({3}). The reference point must be dominated by all points")]
    ReferencePointNotDominated(usize, usize, f64, f64),
    #[error("Cannot calculate the {0} because the front is empty")]
    EmptyFront(String),
    #[error("Cannot allocate the memory for the recursion fronts: {0}")]
    AllocationFailure(String),
    #[error("An error occurred when reading the input file: {0}")]
    File(String),
}
