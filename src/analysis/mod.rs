//! Route quality aggregation.
//!
//! Loads route samples (compass bearing, path-to-great-circle ratio),
//! bins them by bearing for the directional profile, and trims the ratio
//! distribution for histogramming. Every operation is a pure function of
//! its arguments, so figures derived from the same table are reproducible.

pub mod bearing;
pub mod distribution;
pub mod loader;
pub mod summary;
pub mod types;
pub mod utility;
