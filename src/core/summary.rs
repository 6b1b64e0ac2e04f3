use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use super::engine::{total_debt, total_minimum_payment};
use super::types::{Debt, PaymentScenario, PayoffPlan};

/// Every Nth month is kept for the balance chart, plus the final month.
pub const CHART_SAMPLE_INTERVAL: usize = 6;
const TABLE_EDGE_MONTHS: usize = 2;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub months: u32,
    pub years: u32,
    pub remaining_months: u32,
    pub payoff_date: NaiveDate,
    pub payoff_label: String,
    pub total_debt: f64,
    pub total_interest: f64,
    pub total_payments: f64,
    pub monthly_payment: f64,
    pub principal_percentage: f64,
    pub interest_percentage: f64,
    pub chart_points: Vec<PaymentScenario>,
    pub table_preview: Vec<PaymentScenario>,
    pub converged: bool,
}

/// Derives the headline figures for a finished plan. Returns `None` for an
/// empty plan, which has no payoff month to report.
pub fn summarize_plan(
    plan: &PayoffPlan,
    debts: &[Debt],
    extra_payment: f64,
    start_date: NaiveDate,
) -> Option<PlanSummary> {
    let last = plan.final_scenario()?;
    let months = plan.months();
    let payoff_date = payoff_date(start_date, months)?;

    let total_debt = total_debt(debts);
    let total_interest = last.total_interest_paid;
    let total_payments = total_debt + total_interest;
    let (principal_percentage, interest_percentage) = if total_payments > 0.0 {
        (
            round_to_cents(total_debt / total_payments * 100.0),
            round_to_cents(total_interest / total_payments * 100.0),
        )
    } else {
        (0.0, 0.0)
    };

    Some(PlanSummary {
        months,
        years: months / 12,
        remaining_months: months % 12,
        payoff_date,
        payoff_label: payoff_date.format("%B %Y").to_string(),
        total_debt,
        total_interest,
        total_payments,
        monthly_payment: total_minimum_payment(debts) + extra_payment,
        principal_percentage,
        interest_percentage,
        chart_points: chart_points(&plan.scenarios),
        table_preview: table_preview(&plan.scenarios),
        converged: plan.converged,
    })
}

/// First day of the month `months` after `start_date`'s month.
pub fn payoff_date(start_date: NaiveDate, months: u32) -> Option<NaiveDate> {
    start_date
        .with_day(1)?
        .checked_add_months(Months::new(months))
}

pub fn chart_points(scenarios: &[PaymentScenario]) -> Vec<PaymentScenario> {
    let last_index = scenarios.len().saturating_sub(1);
    scenarios
        .iter()
        .enumerate()
        .filter(|(index, _)| index % CHART_SAMPLE_INTERVAL == 0 || *index == last_index)
        .map(|(_, scenario)| *scenario)
        .collect()
}

pub fn table_preview(scenarios: &[PaymentScenario]) -> Vec<PaymentScenario> {
    if scenarios.len() <= TABLE_EDGE_MONTHS * 2 {
        return scenarios.to_vec();
    }
    let mut preview = scenarios[..TABLE_EDGE_MONTHS].to_vec();
    preview.extend_from_slice(&scenarios[scenarios.len() - TABLE_EDGE_MONTHS..]);
    preview
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
