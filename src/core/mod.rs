//! Core processing building blocks: bounding-box detection, center-of-mass
//! compositing, intensity inversion, and the pipeline that chains them. These are
//! pure primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
