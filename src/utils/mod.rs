pub use vectors::{vector_max, vector_min};

mod vectors;
