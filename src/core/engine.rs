use super::types::{
    Debt, DebtPayoff, PaymentScenario, PayoffPlan, PayoffStrategy, SimulationConfig,
};

#[derive(Debug)]
struct Account<'a> {
    debt: &'a Debt,
    remaining_balance: f64,
    interest_paid: f64,
    principal_paid: f64,
    paid_off_month: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default)]
struct AppliedPayment {
    payment: f64,
    interest: f64,
    principal: f64,
}

#[derive(Debug, Clone, Copy, Default)]
struct MonthFlow {
    interest: f64,
    principal: f64,
}

impl MonthFlow {
    fn add(&mut self, applied: AppliedPayment) {
        self.interest += applied.interest;
        self.principal += applied.principal;
    }

    fn total(self) -> f64 {
        self.interest + self.principal
    }
}

impl<'a> Account<'a> {
    fn open(debt: &'a Debt) -> Self {
        Self {
            debt,
            remaining_balance: debt.balance,
            interest_paid: 0.0,
            principal_paid: 0.0,
            paid_off_month: None,
        }
    }

    fn is_open(&self) -> bool {
        self.remaining_balance > 0.0
    }

    fn monthly_rate(&self) -> f64 {
        self.debt.interest_rate / 100.0 / 12.0
    }

    fn apply_month(&mut self, extra_payment: f64) -> AppliedPayment {
        let interest = self.remaining_balance * self.monthly_rate();
        let owed = self.remaining_balance + interest;
        let gross = self.debt.minimum_payment + extra_payment;

        let applied = if gross >= owed {
            // Final payment: settle exactly what is owed so the balance lands on zero.
            AppliedPayment {
                payment: owed,
                interest,
                principal: self.remaining_balance,
            }
        } else {
            AppliedPayment {
                payment: gross,
                interest,
                principal: gross - interest,
            }
        };

        self.remaining_balance -= applied.principal;
        self.interest_paid += applied.interest;
        self.principal_paid += applied.principal;
        applied
    }

    fn to_payoff(&self) -> DebtPayoff {
        DebtPayoff {
            id: self.debt.id.clone(),
            paid_off_month: self.paid_off_month,
            interest_paid: self.interest_paid,
            principal_paid: self.principal_paid,
            remaining_balance: self.remaining_balance.max(0.0),
        }
    }
}

pub fn simulate(debts: &[Debt], strategy: PayoffStrategy, extra_payment: f64) -> PayoffPlan {
    simulate_with_config(debts, strategy, extra_payment, &SimulationConfig::default())
}

pub fn simulate_with_config(
    debts: &[Debt],
    strategy: PayoffStrategy,
    extra_payment: f64,
    config: &SimulationConfig,
) -> PayoffPlan {
    run_simulation(debts, strategy, extra_payment, config, |view| {
        if !log::log_enabled!(log::Level::Trace) {
            return;
        }
        let paid: f64 = view.payments.iter().map(|(_, applied)| applied.payment).sum();
        log::trace!(
            "month {}: extra payment to account {:?}, {} payments totalling {paid:.2}",
            view.month,
            view.target,
            view.payments.len()
        );
    })
}

fn run_simulation<F>(
    debts: &[Debt],
    strategy: PayoffStrategy,
    extra_payment: f64,
    config: &SimulationConfig,
    mut observe: F,
) -> PayoffPlan
where
    F: FnMut(MonthView<'_>),
{
    let mut accounts: Vec<Account<'_>> = debts.iter().map(Account::open).collect();
    // Indices into `accounts`, always in input order.
    let mut active: Vec<usize> = (0..accounts.len())
        .filter(|&index| accounts[index].is_open())
        .collect();

    let mut scenarios = Vec::new();
    let mut total_interest_paid = 0.0;
    let mut total_amount_paid = 0.0;
    let mut month = 0u32;

    while !active.is_empty() && month < config.month_ceiling {
        month += 1;
        let target = select_target(&accounts, &active, strategy);

        let mut flow = MonthFlow::default();
        let mut payments = Vec::with_capacity(active.len());
        for &index in &active {
            let extra = if Some(index) == target {
                extra_payment
            } else {
                0.0
            };
            let applied = accounts[index].apply_month(extra);
            flow.add(applied);
            payments.push((index, applied));
        }

        total_interest_paid += flow.interest;
        total_amount_paid += flow.total();
        scenarios.push(PaymentScenario {
            month,
            remaining_balance: aggregate_remaining_balance(&accounts),
            total_interest_paid,
            total_amount_paid,
            interest_this_month: flow.interest,
            principal_this_month: flow.principal,
        });
        observe(MonthView {
            month,
            target,
            payments: &payments,
        });

        active.retain(|&index| {
            let account = &mut accounts[index];
            if account.is_open() {
                return true;
            }
            account.paid_off_month = Some(month);
            false
        });
    }

    let converged = active.is_empty();
    if !converged {
        log::warn!(
            "payoff plan did not converge within {} months; {} of {} debts still open, returning partial schedule",
            config.month_ceiling,
            active.len(),
            accounts.len()
        );
    }
    log::debug!(
        "simulated {strategy:?} plan for {} debts: {month} months, total interest {total_interest_paid:.2}",
        accounts.len()
    );

    PayoffPlan {
        scenarios,
        debts: accounts.iter().map(Account::to_payoff).collect(),
        converged,
    }
}

struct MonthView<'a> {
    month: u32,
    target: Option<usize>,
    payments: &'a [(usize, AppliedPayment)],
}

/// Picks the account that receives this month's extra payment. Only a strictly
/// better candidate displaces the current one, so ties go to the earliest debt.
fn select_target(
    accounts: &[Account<'_>],
    active: &[usize],
    strategy: PayoffStrategy,
) -> Option<usize> {
    let mut target: Option<usize> = None;
    for &index in active {
        let candidate = &accounts[index];
        if !candidate.is_open() {
            continue;
        }
        let better = match target {
            None => true,
            Some(current) => {
                let current = &accounts[current];
                match strategy {
                    PayoffStrategy::Avalanche => {
                        candidate.debt.interest_rate > current.debt.interest_rate
                    }
                    PayoffStrategy::Snowball => {
                        candidate.remaining_balance < current.remaining_balance
                    }
                }
            }
        };
        if better {
            target = Some(index);
        }
    }
    target
}

fn aggregate_remaining_balance(accounts: &[Account<'_>]) -> f64 {
    accounts
        .iter()
        .map(|account| account.remaining_balance.max(0.0))
        .sum()
}

pub fn total_debt(debts: &[Debt]) -> f64 {
    debts.iter().map(|debt| debt.balance).sum()
}

pub fn total_minimum_payment(debts: &[Debt]) -> f64 {
    debts.iter().map(|debt| debt.minimum_payment).sum()
}

/// One simulated month as seen from the accounts' side, for inspection in tests.
#[cfg(test)]
#[derive(Debug, Clone)]
struct MonthLedger {
    target: Option<usize>,
    payments: Vec<(usize, AppliedPayment)>,
}

#[cfg(test)]
fn simulate_with_ledger(
    debts: &[Debt],
    strategy: PayoffStrategy,
    extra_payment: f64,
    config: &SimulationConfig,
) -> (PayoffPlan, Vec<MonthLedger>) {
    let mut ledger = Vec::new();
    let plan = run_simulation(debts, strategy, extra_payment, config, |view| {
        ledger.push(MonthLedger {
            target: view.target,
            payments: view.payments.to_vec(),
        });
    });
    (plan, ledger)
}
