//! Rent vs Buy - month-by-month cost projection of renting against owning a home
//!
//! This library provides:
//! - Rental cost series compounded by inflation
//! - Mortgage amortization (interest, principal, remaining balance)
//! - Property tax on an assessed value with capped growth
//! - HOA and insurance costs grown by inflation
//! - Summary totals and multi-scenario comparison

pub mod assumptions;
pub mod error;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use assumptions::Assumptions;
pub use error::{AssumptionError, LoadError, ScenarioError};
pub use projection::{CostProjectionEngine, ProjectionResult, ProjectionSummary};
pub use scenario::{Scenario, ScenarioRunner};
