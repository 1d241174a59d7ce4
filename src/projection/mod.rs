//! Month-by-month projection of renting and owning costs

mod cashflows;
mod engine;
mod mortgage;
mod series;

pub use cashflows::{HousingRow, ProjectionResult, ProjectionSummary, RentalRow};
pub use engine::{project, CostProjectionEngine};
pub use mortgage::{loan_principal, monthly_payment, AmortizationSeries};
pub use series::{
    assessed_growth_rate, build_property_tax_series, build_rental_series, inflated_monthly_cost,
    monthly_growth_factor, truncate, MonthlySeries,
};
