//! Contains executors of the toy algorithms, gathering the operation counts & timings to be presented
//! or passed to [crate::empirical] in order to have their growth measured

pub(crate) mod common;
pub mod simulator;
pub mod batch;
pub mod growth_check;
