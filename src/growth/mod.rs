//! Exports the canonical growth functions for each complexity class, the tight bound envelope composer
//! and the domain builders used to sample them. See:
//!   - [growth_functions] -- `f(n)` for each [types::ComplexityClass];
//!   - [bounds] -- `c₁·n² ≤ f(n) ≤ c₂·n²` envelopes;
//!   - [domain] -- `linspace`, `arange` & `logspace` input size sequences;
//!   - [types]

pub mod types;
pub mod growth_functions;
pub mod bounds;
pub mod domain;
