pub use error::HvError;
pub use objective::ObjectiveDirection;
pub use point::{Front, Point};

mod error;
mod objective;
mod point;
#[cfg(test)]
pub(crate) mod test_utils;
