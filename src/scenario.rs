//! Scenario runner for side-by-side comparisons
//!
//! Holds a base assumption set, then runs many named variations of it
//! (loaded from a CSV grid or built in code) one after another.

use crate::assumptions::{self, Assumptions};
use crate::error::{AssumptionError, LoadError, ScenarioError};
use crate::projection::{CostProjectionEngine, ProjectionResult, ProjectionSummary};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A named assumption set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub assumptions: Assumptions,
}

impl Scenario {
    pub fn new(name: impl Into<String>, assumptions: Assumptions) -> Self {
        Self {
            name: name.into(),
            assumptions,
        }
    }
}

/// Which option costs less on an ongoing basis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tenure {
    Rent,
    Buy,
    Even,
}

/// Summary of one scenario run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub name: String,
    pub summary: ProjectionSummary,
}

impl ScenarioOutcome {
    /// Compare total rent against the pure cost of owning
    pub fn cheaper_option(&self) -> Tenure {
        match self.summary.rent_minus_pure_cost {
            d if d > 0 => Tenure::Buy,
            d if d < 0 => Tenure::Rent,
            _ => Tenure::Even,
        }
    }
}

/// Runs projections against a shared base assumption set
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let scenarios = runner.load_scenarios("scenarios.csv")?;
/// for outcome in runner.run_scenarios(&scenarios)? {
///     println!("{}: {:?}", outcome.name, outcome.cheaper_option());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base_assumptions: Assumptions,
}

impl ScenarioRunner {
    /// Create runner over the reference assumptions
    pub fn new() -> Self {
        Self {
            base_assumptions: Assumptions::default_scenario(),
        }
    }

    /// Create runner over a custom base
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self {
            base_assumptions: assumptions,
        }
    }

    /// Run the base assumptions
    pub fn run_base(&self) -> Result<ProjectionResult, AssumptionError> {
        self.run(self.base_assumptions.clone())
    }

    /// Run a single projection
    pub fn run(&self, assumptions: Assumptions) -> Result<ProjectionResult, AssumptionError> {
        Ok(CostProjectionEngine::new(assumptions)?.project())
    }

    /// Run every scenario in order, stopping at the first invalid one
    pub fn run_scenarios(
        &self,
        scenarios: &[Scenario],
    ) -> Result<Vec<ScenarioOutcome>, ScenarioError> {
        scenarios
            .iter()
            .map(|scenario| {
                let result = self
                    .run(scenario.assumptions.clone())
                    .map_err(|source| ScenarioError {
                        name: scenario.name.clone(),
                        source,
                    })?;
                Ok(ScenarioOutcome {
                    name: scenario.name.clone(),
                    summary: result.summary(),
                })
            })
            .collect()
    }

    /// Build one scenario per value, each a copy of the base with `apply` run on it
    pub fn vary<F>(&self, label: &str, values: &[f64], apply: F) -> Vec<Scenario>
    where
        F: Fn(&mut Assumptions, f64),
    {
        values
            .iter()
            .map(|&value| {
                let mut assumptions = self.base_assumptions.clone();
                apply(&mut assumptions, value);
                Scenario::new(format!("{}={}", label, value), assumptions)
            })
            .collect()
    }

    /// Load a scenario grid whose empty cells fall back to the base
    pub fn load_scenarios<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Scenario>, LoadError> {
        assumptions::load_scenarios(path, &self.base_assumptions)
    }

    /// Get reference to base assumptions
    pub fn assumptions(&self) -> &Assumptions {
        &self.base_assumptions
    }

    /// Get mutable reference to base assumptions for customization
    pub fn assumptions_mut(&mut self) -> &mut Assumptions {
        &mut self.base_assumptions
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
