mod engine;
mod summary;
mod types;

pub use engine::{simulate, simulate_with_config, total_debt, total_minimum_payment};
pub use summary::{
    CHART_SAMPLE_INTERVAL, PlanSummary, chart_points, payoff_date, summarize_plan, table_preview,
};
pub use types::{
    DEFAULT_MONTH_CEILING, Debt, DebtPayoff, PaymentScenario, PayoffPlan, PayoffStrategy,
    MAX_MONTH_CEILING, SimulationConfig,
};
