use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("at least one debt with a positive balance, APR and minimum payment is required")]
    NoUsableDebts,

    #[error("malformed debt entry '{entry}': expected BALANCE:APR:MIN[:ID]")]
    MalformedDebt { entry: String },

    #[error("extra payment must be a finite amount >= 0, got {0}")]
    InvalidExtraPayment(f64),

    #[error("month ceiling must be between 1 and {max}, got {value}")]
    InvalidMonthCeiling { value: u32, max: u32 },

    #[error("{field} must be at most {max}, got {value}")]
    AmountOutOfRange {
        field: &'static str,
        value: f64,
        max: f64,
    },

    #[error("invalid start date '{0}': expected YYYY-MM-DD")]
    InvalidStartDate(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PlanResult<T> = Result<T, PlanError>;
