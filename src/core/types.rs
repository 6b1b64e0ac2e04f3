use serde::Serialize;

/// Number of months simulated before a plan is abandoned as non-converging.
pub const DEFAULT_MONTH_CEILING: u32 = 600;
/// Largest ceiling a caller may request.
pub const MAX_MONTH_CEILING: u32 = 1_200;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoffStrategy {
    /// Extra payment goes to the open debt with the highest APR.
    Avalanche,
    /// Extra payment goes to the open debt with the smallest balance.
    Snowball,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Debt {
    pub id: String,
    pub balance: f64,
    /// Annual percentage rate, e.g. `19.99` for 19.99%.
    pub interest_rate: f64,
    pub minimum_payment: f64,
}

impl Debt {
    pub fn new(
        id: impl Into<String>,
        balance: f64,
        interest_rate: f64,
        minimum_payment: f64,
    ) -> Self {
        Self {
            id: id.into(),
            balance,
            interest_rate,
            minimum_payment,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub month_ceiling: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            month_ceiling: DEFAULT_MONTH_CEILING,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentScenario {
    pub month: u32,
    pub remaining_balance: f64,
    pub total_interest_paid: f64,
    pub total_amount_paid: f64,
    pub interest_this_month: f64,
    pub principal_this_month: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtPayoff {
    pub id: String,
    pub paid_off_month: Option<u32>,
    pub interest_paid: f64,
    pub principal_paid: f64,
    pub remaining_balance: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PayoffPlan {
    pub scenarios: Vec<PaymentScenario>,
    /// Final per-debt state, in input order.
    pub debts: Vec<DebtPayoff>,
    /// False when the month ceiling cut the run short with debts still open.
    pub converged: bool,
}

impl PayoffPlan {
    pub fn months(&self) -> u32 {
        self.scenarios.len() as u32
    }

    pub fn final_scenario(&self) -> Option<&PaymentScenario> {
        self.scenarios.last()
    }
}
