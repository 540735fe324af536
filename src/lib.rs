//! Exact hyper-volume indicator of a front of points, calculated with the WFG algorithm by
//! [While et al. (2012)](http://dx.doi.org/10.1109/TEVC.2010.2077298).
//!
//! The main entry points are [`metrics::compute_hypervolume`] and [`metrics::HyperVolume`]:
//!
//! ```
//!  use hv_wfg::core::{Front, Point};
//!  use hv_wfg::metrics::compute_hypervolume;
//!  use hv_wfg::metrics::hv_wfg::StrategyConfig;
//!
//!  let front = Front::from_values(&[vec![1.0, 2.0, 1.0], vec![2.0, 1.0, 2.0]]).unwrap();
//!  let reference_point = Point::from([3.0, 3.0, 3.0]);
//!  let hv = compute_hypervolume(&front, &reference_point, &StrategyConfig::default()).unwrap();
//!  assert_eq!(hv, 5.0);
//! ```
pub mod core;
pub mod metrics;
pub mod utils;
