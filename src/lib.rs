#![doc = include_str!("../README.md")]

pub mod features;
pub mod configs;
pub mod errors;
pub mod growth;
pub mod runners;
pub mod empirical;
pub mod estimation;
pub mod lessons;
pub mod utils;


// exported symbols
pub use {
    features::{OUTPUT, PERCENT_TOLERANCE},
    configs::{SimulatorConfig, EXPONENTIAL_CLAMP_CEILING, MAX_SIMULATION_INPUT_SIZE, MIN_GROWTH_CHECK_INPUT_SIZE},
    errors::{EngineError, EngineResult},
    growth::{
        types::{BoundEnvelope, ComplexityClass, SampleSeries},
        growth_functions::{evaluate, evaluate_scaled_series, evaluate_series},
        bounds::compose_bounds,
        domain::{arange, linspace, logspace},
    },
    runners::{
        simulator::{simulate, simulate_with_config, Algorithm, SimulationResult},
        batch::{report_batch, simulate_batch, SimulationReport},
        growth_check::check_algorithm_growth,
    },
    empirical::{
        analyse_growth, analyse_operation_growth, analyse_time_growth,
        types::{GrowthAnalysis, ObservedGrowth},
    },
    estimation::{
        estimator::{estimate, estimate_or_fallback, StructuralEstimate},
        asymptotic::dominant_term,
    },
    lessons::{
        search::{compare_search_operations, linear_search_case_series, linear_search_cases, SearchCases, SearchComparison},
        notation::{LowerBoundExample, Notation},
        space::{SpaceExample, SpaceProfile},
    },
};
#[cfg(feature = "async")]
pub use runners::batch::simulate_batch_async;
