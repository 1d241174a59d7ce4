//! Fixed-rate mortgage payment and amortization schedule

use super::series::MonthlySeries;
use log::{debug, warn};
use serde::Serialize;

/// Amount financed once the downpayment is paid
pub fn loan_principal(total_price: f64, downpayment_pct: f64) -> f64 {
    total_price * (1.0 - downpayment_pct)
}

/// Fixed monthly payment (principal plus interest) of an amortizing loan.
///
/// Annuity formula `P * r(1+r)^n / ((1+r)^n - 1)` with `r` the monthly rate.
/// A zero rate amortizes linearly: `P / n`.
pub fn monthly_payment(
    total_price: f64,
    downpayment_pct: f64,
    loan_term_months: u32,
    annual_interest_rate: f64,
) -> f64 {
    let principal = loan_principal(total_price, downpayment_pct);
    let term = loan_term_months as f64;

    if annual_interest_rate == 0.0 {
        return principal / term;
    }

    let r = annual_interest_rate / 12.0;
    let compound = (1.0 + r).powf(term);
    principal * (r * compound) / (compound - 1.0)
}

/// Interest and principal paid each month, plus the balance left after it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmortizationSeries {
    monthly_payment: f64,
    interest: MonthlySeries,
    principal: MonthlySeries,
    /// Untruncated balance after each month's payment
    balances: Vec<f64>,
}

impl AmortizationSeries {
    /// Amortize over `term_months` months of a `loan_term_months` loan.
    ///
    /// Only the horizon is scheduled; the loan is generally not paid off at
    /// its end. Past payoff the balance stays at zero and both components
    /// drop to zero.
    pub fn build(
        term_months: u32,
        total_price: f64,
        downpayment_pct: f64,
        loan_term_months: u32,
        annual_interest_rate: f64,
    ) -> Self {
        let payment = monthly_payment(
            total_price,
            downpayment_pct,
            loan_term_months,
            annual_interest_rate,
        );

        if term_months > loan_term_months {
            warn!(
                "Horizon of {} months exceeds the {} month loan term; balance held at zero",
                term_months, loan_term_months
            );
        }

        let mut interest = MonthlySeries::with_capacity(term_months);
        let mut principal = MonthlySeries::with_capacity(term_months);
        let mut balances = Vec::with_capacity(term_months as usize);

        let mut balance = loan_principal(total_price, downpayment_pct);
        for _ in 0..term_months {
            let interest_due = balance * annual_interest_rate / 12.0;
            let principal_paid = (payment - interest_due).min(balance);
            balance -= principal_paid;

            interest.record(interest_due);
            principal.record(principal_paid);
            balances.push(balance);
        }

        debug!(
            "Amortization: payment {:.2}, {} months, balance left {:.2}",
            payment,
            interest.len(),
            balance
        );

        Self {
            monthly_payment: payment,
            interest,
            principal,
            balances,
        }
    }

    /// Fixed payment, untruncated
    pub fn monthly_payment(&self) -> f64 {
        self.monthly_payment
    }

    pub fn interest(&self) -> &MonthlySeries {
        &self.interest
    }

    pub fn principal(&self) -> &MonthlySeries {
        &self.principal
    }

    /// Balance left after the payment of `month`
    pub fn balance_after(&self, month: usize) -> Option<f64> {
        self.balances.get(month).copied()
    }

    pub fn balances(&self) -> &[f64] {
        &self.balances
    }

    /// Balance left at the end of the horizon
    pub fn remaining_balance(&self) -> f64 {
        self.balances.last().copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.interest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interest.is_empty()
    }
}
