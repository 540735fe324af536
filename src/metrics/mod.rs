pub use hypervolume::{compute_hypervolume, compute_hypervolumes, HyperVolume, HyperVolumeInput};
pub use hypervolume_2d::hv_2d;
pub use hypervolume_3d::hv_3d;

pub mod hv_wfg;
mod hypervolume;
mod hypervolume_2d;
mod hypervolume_3d;
