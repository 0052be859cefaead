//! Exports the estimators working on text rather than on measurements. See:
//!   - [estimator] -- classifies loop-structured pseudocode by its loop nesting & recursion patterns;
//!   - [code_structure] -- the indentation tree the estimator walks;
//!   - [asymptotic] -- the dominant term of cost expressions like `3*n**2 + 2*n + 1`

pub mod code_structure;
pub mod estimator;
pub mod asymptotic;
