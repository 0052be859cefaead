//! Exports the empirical growth analysis: inferring, from two passes on different input sizes, how a
//! resource (operation count or elapsed time) grows -- in big-O notation. See:
//!   - [empirical_analysis] -- the ratio ladder & its application to [crate::SimulationResult]s;
//!   - [types]

mod empirical_analysis;
pub use empirical_analysis::*;
pub mod types;
