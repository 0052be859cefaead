//! Exports the small computations behind the explainer's lessons. See:
//!   - [search] -- linear vs binary search operation counts & the linear search cases;
//!   - [notation] -- the `O`, `Ω` & `Θ` bounds of each [crate::Algorithm];
//!   - [space] -- auxiliary space of classic algorithms

pub mod search;
pub mod notation;
pub mod space;
