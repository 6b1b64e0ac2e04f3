use axum::{
    Router,
    extract::{Json, Query},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::core::{
    DEFAULT_MONTH_CEILING, Debt, DebtPayoff, MAX_MONTH_CEILING, PaymentScenario, PayoffStrategy,
    PlanSummary, SimulationConfig, simulate_with_config, summarize_plan,
};
use crate::error::{PlanError, PlanResult};

/// Upper bound for balances, minimum payments and the extra payment.
const MAX_AMOUNT: f64 = 1e12;
/// Upper bound for APR in percent; keeps a maximal negative-amortization run finite.
const MAX_INTEREST_RATE: f64 = 400.0;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliStrategy {
    Avalanche,
    Snowball,
}

impl From<CliStrategy> for PayoffStrategy {
    fn from(value: CliStrategy) -> Self {
        match value {
            CliStrategy::Avalanche => PayoffStrategy::Avalanche,
            CliStrategy::Snowball => PayoffStrategy::Snowball,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiStrategy {
    #[serde(
        alias = "AVALANCHE",
        alias = "Avalanche",
        alias = "highestRate",
        alias = "highest-rate"
    )]
    Avalanche,
    #[serde(
        alias = "SNOWBALL",
        alias = "Snowball",
        alias = "smallestBalance",
        alias = "smallest-balance"
    )]
    Snowball,
}

impl From<ApiStrategy> for CliStrategy {
    fn from(value: ApiStrategy) -> Self {
        match value {
            ApiStrategy::Avalanche => CliStrategy::Avalanche,
            ApiStrategy::Snowball => CliStrategy::Snowball,
        }
    }
}

/// A debt as typed by the user; any field may be missing until it is filtered.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct DebtEntry {
    id: Option<String>,
    balance: Option<f64>,
    interest_rate: Option<f64>,
    minimum_payment: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PayoffPayload {
    debts: Vec<DebtEntry>,
    strategy: Option<ApiStrategy>,
    extra_payment: Option<f64>,
    month_ceiling: Option<u32>,
    start_date: Option<String>,
}

/// Query-string form of [`PayoffPayload`]; debts are `BAL:APR:MIN[:ID]` joined by commas.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PayoffQuery {
    debts: Option<String>,
    strategy: Option<ApiStrategy>,
    extra_payment: Option<f64>,
    month_ceiling: Option<u32>,
    start_date: Option<String>,
}

impl TryFrom<PayoffQuery> for PayoffPayload {
    type Error = PlanError;

    fn try_from(query: PayoffQuery) -> PlanResult<Self> {
        let debts = match query.debts.as_deref() {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(parse_debt_entry)
                .collect::<PlanResult<Vec<_>>>()?,
            None => Vec::new(),
        };
        Ok(PayoffPayload {
            debts,
            strategy: query.strategy,
            extra_payment: query.extra_payment,
            month_ceiling: query.month_ceiling,
            start_date: query.start_date,
        })
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "payoff",
    about = "Debt payoff planner (avalanche or snowball with a fixed extra monthly payment)"
)]
struct Cli {
    #[arg(
        long = "debt",
        value_name = "BALANCE:APR:MIN[:ID]",
        help = "Debt as balance, APR in percent and minimum monthly payment; repeat per debt"
    )]
    debts: Vec<String>,
    #[arg(long, value_enum, default_value_t = CliStrategy::Avalanche)]
    strategy: CliStrategy,
    #[arg(
        long,
        default_value_t = 0.0,
        help = "Extra amount paid every month on top of the minimums"
    )]
    extra_payment: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_MONTH_CEILING,
        help = "Months to simulate before giving up on a plan that does not pay off"
    )]
    month_ceiling: u32,
    #[arg(long, help = "First month of the plan as YYYY-MM-DD; defaults to today")]
    start_date: Option<String>,
}

#[derive(Debug)]
struct PlanRequest {
    debts: Vec<Debt>,
    strategy: PayoffStrategy,
    extra_payment: f64,
    config: SimulationConfig,
    start_date: NaiveDate,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PayoffResponse {
    strategy: PayoffStrategy,
    extra_payment: f64,
    month_ceiling: u32,
    converged: bool,
    summary: Option<PlanSummary>,
    debts: Vec<DebtPayoff>,
    scenarios: Vec<PaymentScenario>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn parse_debt_entry(raw: &str) -> PlanResult<DebtEntry> {
    let malformed = || PlanError::MalformedDebt {
        entry: raw.to_string(),
    };
    let parts: Vec<&str> = raw.split(':').map(str::trim).collect();
    if !(3..=4).contains(&parts.len()) {
        return Err(malformed());
    }

    let amount = |field: &str| -> PlanResult<Option<f64>> {
        if field.is_empty() {
            return Ok(None);
        }
        field.parse::<f64>().map(Some).map_err(|_| malformed())
    };

    Ok(DebtEntry {
        id: parts
            .get(3)
            .filter(|id| !id.is_empty())
            .map(|id| id.to_string()),
        balance: amount(parts[0])?,
        interest_rate: amount(parts[1])?,
        minimum_payment: amount(parts[2])?,
    })
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

fn at_most(field: &'static str, value: Option<f64>, max: f64) -> PlanResult<()> {
    match value {
        Some(v) if v > max => Err(PlanError::AmountOutOfRange {
            field,
            value: v,
            max,
        }),
        _ => Ok(()),
    }
}

/// Drops entries that are missing a field or carry a non-positive amount,
/// and rejects amounts too large to simulate. Ids default to the entry's
/// 1-based position.
fn usable_debts(entries: Vec<DebtEntry>) -> PlanResult<Vec<Debt>> {
    for entry in &entries {
        at_most("balance", entry.balance, MAX_AMOUNT)?;
        at_most("interest rate", entry.interest_rate, MAX_INTEREST_RATE)?;
        at_most("minimum payment", entry.minimum_payment, MAX_AMOUNT)?;
    }

    let debts = entries
        .into_iter()
        .enumerate()
        .filter_map(|(position, entry)| {
            let balance = positive(entry.balance)?;
            let interest_rate = positive(entry.interest_rate)?;
            let minimum_payment = positive(entry.minimum_payment)?;
            let id = entry
                .id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(|| (position + 1).to_string());
            Some(Debt::new(id, balance, interest_rate, minimum_payment))
        })
        .collect();
    Ok(debts)
}

fn build_request(cli: Cli, today: NaiveDate) -> PlanResult<PlanRequest> {
    let entries = cli
        .debts
        .iter()
        .map(|raw| parse_debt_entry(raw))
        .collect::<PlanResult<Vec<_>>>()?;
    request_from_entries(entries, &cli, today)
}

fn request_from_entries(
    entries: Vec<DebtEntry>,
    cli: &Cli,
    today: NaiveDate,
) -> PlanResult<PlanRequest> {
    if !cli.extra_payment.is_finite() || cli.extra_payment < 0.0 {
        return Err(PlanError::InvalidExtraPayment(cli.extra_payment));
    }
    at_most("extra payment", Some(cli.extra_payment), MAX_AMOUNT)?;

    if cli.month_ceiling == 0 || cli.month_ceiling > MAX_MONTH_CEILING {
        return Err(PlanError::InvalidMonthCeiling {
            value: cli.month_ceiling,
            max: MAX_MONTH_CEILING,
        });
    }

    let start_date = match cli.start_date.as_deref() {
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map_err(|_| PlanError::InvalidStartDate(raw.to_string()))?,
        None => today,
    };

    let debts = usable_debts(entries)?;
    if debts.is_empty() {
        return Err(PlanError::NoUsableDebts);
    }

    Ok(PlanRequest {
        debts,
        strategy: cli.strategy.into(),
        extra_payment: cli.extra_payment,
        config: SimulationConfig {
            month_ceiling: cli.month_ceiling,
        },
        start_date,
    })
}

fn default_cli_for_api() -> Cli {
    Cli {
        debts: Vec::new(),
        strategy: CliStrategy::Avalanche,
        extra_payment: 0.0,
        month_ceiling: DEFAULT_MONTH_CEILING,
        start_date: None,
    }
}

#[cfg(test)]
fn api_request_from_json(json: &str, today: NaiveDate) -> PlanResult<PlanRequest> {
    let payload = serde_json::from_str::<PayoffPayload>(json)?;
    api_request_from_payload(payload, today)
}

fn api_request_from_payload(payload: PayoffPayload, today: NaiveDate) -> PlanResult<PlanRequest> {
    let mut cli = default_cli_for_api();

    if let Some(v) = payload.strategy {
        cli.strategy = v.into();
    }
    if let Some(v) = payload.extra_payment {
        cli.extra_payment = v;
    }
    if let Some(v) = payload.month_ceiling {
        cli.month_ceiling = v;
    }
    if let Some(v) = payload.start_date {
        cli.start_date = Some(v);
    }

    request_from_entries(payload.debts, &cli, today)
}

fn run_plan(request: &PlanRequest) -> PayoffResponse {
    let plan = simulate_with_config(
        &request.debts,
        request.strategy,
        request.extra_payment,
        &request.config,
    );
    let summary = summarize_plan(
        &plan,
        &request.debts,
        request.extra_payment,
        request.start_date,
    );

    PayoffResponse {
        strategy: request.strategy,
        extra_payment: request.extra_payment,
        month_ceiling: request.config.month_ceiling,
        converged: plan.converged,
        summary,
        debts: plan.debts,
        scenarios: plan.scenarios,
    }
}

/// Parses command-line arguments, runs the plan and returns it as pretty JSON.
pub fn run_cli<I, T>(args: I) -> PlanResult<String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);
    let request = build_request(cli, Local::now().date_naive())?;
    let response = run_plan(&request);
    Ok(serde_json::to_string_pretty(&response)?)
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route(
            "/api/payoff",
            get(payoff_get_handler).post(payoff_post_handler),
        )
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    println!("Payoff HTTP API listening on http://{addr}");
    println!("Local access: http://127.0.0.1:{port}/api/payoff");

    axum::serve(listener, app).await
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn payoff_get_handler(Query(query): Query<PayoffQuery>) -> Response {
    match PayoffPayload::try_from(query) {
        Ok(payload) => payoff_handler_impl(payload).await,
        Err(e) => error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    }
}

async fn payoff_post_handler(Json(payload): Json<PayoffPayload>) -> Response {
    payoff_handler_impl(payload).await
}

async fn payoff_handler_impl(payload: PayoffPayload) -> Response {
    let request = match api_request_from_payload(payload, Local::now().date_naive()) {
        Ok(request) => request,
        Err(e) => {
            log::debug!("rejected payoff request: {e}");
            return error_response(StatusCode::BAD_REQUEST, &e.to_string());
        }
    };

    let response = run_plan(&request);
    if !response.converged {
        log::info!(
            "returning partial payoff plan for {} debts after {} months",
            request.debts.len(),
            response.scenarios.len()
        );
    }
    json_response(StatusCode::OK, response)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
    }

    #[test]
    fn api_request_from_json_parses_web_keys() {
        let json = r#"{
          "debts": [
            { "id": "visa", "balance": 1000, "interestRate": 19.99, "minimumPayment": 50 },
            { "id": "store", "balance": 500, "interestRate": 10, "minimumPayment": 25 }
          ],
          "strategy": "SNOWBALL",
          "extraPayment": 150,
          "monthCeiling": 240,
          "startDate": "2027-01-15"
        }"#;
        let request = api_request_from_json(json, today()).expect("json should parse");

        assert_eq!(request.debts.len(), 2);
        assert_eq!(request.debts[0].id, "visa");
        assert_approx(request.debts[0].interest_rate, 19.99);
        assert_approx(request.debts[1].minimum_payment, 25.0);
        assert_eq!(request.strategy, PayoffStrategy::Snowball);
        assert_approx(request.extra_payment, 150.0);
        assert_eq!(request.config.month_ceiling, 240);
        assert_eq!(
            request.start_date,
            NaiveDate::from_ymd_opt(2027, 1, 15).expect("valid date")
        );
    }

    #[test]
    fn api_request_defaults_to_avalanche_without_extra_payment() {
        let json = r#"{ "debts": [{ "balance": 800, "interestRate": 22, "minimumPayment": 40 }] }"#;
        let request = api_request_from_json(json, today()).expect("json should parse");

        assert_eq!(request.strategy, PayoffStrategy::Avalanche);
        assert_eq!(request.extra_payment, 0.0);
        assert_eq!(request.config.month_ceiling, DEFAULT_MONTH_CEILING);
        assert_eq!(request.start_date, today());
        assert_eq!(request.debts[0].id, "1");
    }

    #[test]
    fn incomplete_debts_are_filtered_before_simulation() {
        let json = r#"{
          "debts": [
            { "balance": 1000, "interestRate": 20 },
            { "balance": 0, "interestRate": 15, "minimumPayment": 30 },
            { "balance": 600, "interestRate": 0, "minimumPayment": 30 },
            { "balance": 700, "interestRate": 18, "minimumPayment": 35 }
          ]
        }"#;
        let request = api_request_from_json(json, today()).expect("json should parse");

        assert_eq!(request.debts.len(), 1);
        assert_eq!(request.debts[0].id, "4");
        assert_approx(request.debts[0].balance, 700.0);
    }

    #[test]
    fn api_request_rejects_payload_without_usable_debts() {
        let json = r#"{ "debts": [{ "balance": 1000 }], "extraPayment": 50 }"#;
        let err = api_request_from_json(json, today()).expect_err("must reject");
        assert!(matches!(err, PlanError::NoUsableDebts));

        let err = api_request_from_json("{}", today()).expect_err("must reject empty payload");
        assert!(matches!(err, PlanError::NoUsableDebts));
    }

    #[test]
    fn api_request_rejects_negative_extra_payment() {
        let json = r#"{
          "debts": [{ "balance": 1000, "interestRate": 20, "minimumPayment": 50 }],
          "extraPayment": -10
        }"#;
        let err = api_request_from_json(json, today()).expect_err("must reject");
        assert!(err.to_string().contains("extra payment"));
    }

    #[test]
    fn api_request_rejects_zero_month_ceiling_and_bad_dates() {
        let base = r#""debts": [{ "balance": 1000, "interestRate": 20, "minimumPayment": 50 }]"#;

        let json = format!("{{ {base}, \"monthCeiling\": 0 }}");
        let err = api_request_from_json(&json, today()).expect_err("must reject ceiling");
        assert!(matches!(err, PlanError::InvalidMonthCeiling { value: 0, .. }));

        let json = format!("{{ {base}, \"startDate\": \"next tuesday\" }}");
        let err = api_request_from_json(&json, today()).expect_err("must reject date");
        assert!(matches!(err, PlanError::InvalidStartDate(_)));
    }

    #[test]
    fn parse_debt_entry_accepts_optional_id_and_blank_fields() {
        let entry = parse_debt_entry("1200:12.5:60:visa").expect("valid entry");
        assert_eq!(entry.id.as_deref(), Some("visa"));
        assert_eq!(entry.balance, Some(1_200.0));
        assert_eq!(entry.interest_rate, Some(12.5));
        assert_eq!(entry.minimum_payment, Some(60.0));

        let entry = parse_debt_entry(" 900 : : 45 ").expect("valid entry");
        assert_eq!(entry.id, None);
        assert_eq!(entry.interest_rate, None);

        assert!(matches!(
            parse_debt_entry("1200:12"),
            Err(PlanError::MalformedDebt { .. })
        ));
        assert!(matches!(
            parse_debt_entry("lots:12:60"),
            Err(PlanError::MalformedDebt { .. })
        ));
    }

    #[test]
    fn query_debts_are_split_on_commas() {
        let query = PayoffQuery {
            debts: Some("1000:20:50:a, 500:10:25:b,".to_string()),
            strategy: Some(ApiStrategy::Snowball),
            extra_payment: Some(100.0),
            month_ceiling: None,
            start_date: None,
        };
        let payload = PayoffPayload::try_from(query).expect("valid query");
        let request = api_request_from_payload(payload, today()).expect("valid request");

        let ids: Vec<&str> = request.debts.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(request.strategy, PayoffStrategy::Snowball);
    }

    #[test]
    fn cli_arguments_build_a_request() {
        let cli = Cli::try_parse_from([
            "payoff",
            "--debt",
            "1000:20:50:visa",
            "--debt",
            "500:10:25",
            "--strategy",
            "snowball",
            "--extra-payment",
            "100",
            "--month-ceiling",
            "120",
        ])
        .expect("valid arguments");
        let request = build_request(cli, today()).expect("valid request");

        assert_eq!(request.debts.len(), 2);
        assert_eq!(request.debts[1].id, "2");
        assert_eq!(request.strategy, PayoffStrategy::Snowball);
        assert_approx(request.extra_payment, 100.0);
        assert_eq!(request.config.month_ceiling, 120);
    }

    #[test]
    fn cli_rejects_malformed_debt() {
        let cli = Cli::try_parse_from(["payoff", "--debt", "1000/20/50"]).expect("clap accepts strings");
        let err = build_request(cli, today()).expect_err("must reject");
        assert!(err.to_string().contains("1000/20/50"));
    }

    #[test]
    fn payoff_response_serialization_contains_expected_fields() {
        let json = r#"{
          "debts": [
            { "id": "A", "balance": 1000, "interestRate": 20, "minimumPayment": 50 },
            { "id": "B", "balance": 500, "interestRate": 10, "minimumPayment": 25 }
          ],
          "strategy": "snowball",
          "extraPayment": 100
        }"#;
        let request = api_request_from_json(json, today()).expect("json should parse");
        let response = run_plan(&request);

        assert!(response.converged);
        assert_eq!(
            response.summary.as_ref().map(|s| s.months),
            Some(response.scenarios.len() as u32)
        );

        let json = serde_json::to_string(&response).expect("response should serialize");
        assert!(json.contains("\"strategy\":\"snowball\""));
        assert!(json.contains("\"extraPayment\""));
        assert!(json.contains("\"converged\":true"));
        assert!(json.contains("\"summary\""));
        assert!(json.contains("\"payoffLabel\""));
        assert!(json.contains("\"chartPoints\""));
        assert!(json.contains("\"tablePreview\""));
        assert!(json.contains("\"paidOffMonth\""));
        assert!(json.contains("\"remainingBalance\""));
        assert!(json.contains("\"totalInterestPaid\""));
        assert!(json.contains("\"principalThisMonth\""));
    }

    #[test]
    fn api_request_caps_month_ceiling() {
        let base = r#""debts": [{ "balance": 10000, "interestRate": 24, "minimumPayment": 100 }]"#;

        let json = format!("{{ {base}, \"monthCeiling\": 4294967295 }}");
        let err = api_request_from_json(&json, today()).expect_err("must reject huge ceiling");
        assert!(matches!(
            err,
            PlanError::InvalidMonthCeiling {
                value: u32::MAX,
                max: MAX_MONTH_CEILING
            }
        ));

        let json = format!("{{ {base}, \"monthCeiling\": {} }}", MAX_MONTH_CEILING + 1);
        assert!(api_request_from_json(&json, today()).is_err());

        let json = format!("{{ {base}, \"monthCeiling\": {MAX_MONTH_CEILING} }}");
        let request = api_request_from_json(&json, today()).expect("largest ceiling is allowed");
        let response = run_plan(&request);
        assert_eq!(response.scenarios.len(), MAX_MONTH_CEILING as usize);
        assert!(response.summary.is_some());
    }

    #[test]
    fn cli_rejects_month_ceiling_above_cap() {
        let cli = Cli::try_parse_from(["payoff", "--debt", "1000:20:50", "--month-ceiling", "5000"])
            .expect("clap accepts any u32");
        let err = build_request(cli, today()).expect_err("must reject");
        assert!(err.to_string().contains("month ceiling"));
    }

    #[test]
    fn api_request_rejects_amounts_too_large_to_simulate() {
        let json = r#"{ "debts": [{ "balance": 1e307, "interestRate": 24, "minimumPayment": 100 }] }"#;
        let err = api_request_from_json(json, today()).expect_err("must reject balance");
        assert!(matches!(
            err,
            PlanError::AmountOutOfRange {
                field: "balance",
                ..
            }
        ));

        let json = r#"{ "debts": [{ "balance": 1000, "interestRate": 1000, "minimumPayment": 50 }] }"#;
        let err = api_request_from_json(json, today()).expect_err("must reject rate");
        assert!(err.to_string().contains("interest rate"));

        let json = r#"{
          "debts": [{ "balance": 1000, "interestRate": 20, "minimumPayment": 50 }],
          "extraPayment": 1e15
        }"#;
        let err = api_request_from_json(json, today()).expect_err("must reject extra payment");
        assert!(err.to_string().contains("extra payment"));
    }

    #[test]
    fn largest_accepted_inputs_keep_totals_finite_and_growing() {
        let json = format!(
            r#"{{
              "debts": [{{ "balance": {MAX_AMOUNT}, "interestRate": {MAX_INTEREST_RATE}, "minimumPayment": 1 }}],
              "monthCeiling": {MAX_MONTH_CEILING}
            }}"#
        );
        let request = api_request_from_json(&json, today()).expect("inputs at the caps are valid");
        let response = run_plan(&request);

        assert!(!response.converged);
        assert_eq!(response.scenarios.len(), MAX_MONTH_CEILING as usize);
        for scenario in &response.scenarios {
            assert!(scenario.remaining_balance.is_finite());
            assert!(scenario.total_interest_paid.is_finite());
            assert!(scenario.total_amount_paid.is_finite());
        }
        for pair in response.scenarios.windows(2) {
            assert!(pair[1].total_interest_paid >= pair[0].total_interest_paid);
            assert!(pair[1].total_amount_paid >= pair[0].total_amount_paid);
        }
    }

    #[test]
    fn non_converging_plan_is_flagged_in_response() {
        let json = r#"{
          "debts": [{ "id": "deep", "balance": 10000, "interestRate": 24, "minimumPayment": 100 }],
          "monthCeiling": 24
        }"#;
        let request = api_request_from_json(json, today()).expect("json should parse");
        let response = run_plan(&request);

        assert!(!response.converged);
        assert_eq!(response.scenarios.len(), 24);
        assert_eq!(response.debts[0].paid_off_month, None);
        assert!(response.summary.is_some_and(|s| !s.converged));
    }
}
