use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::EngineSettings;
use crate::models::{Group, PersonId, Settlement};
use crate::services::BalanceCalculator;

/// One side of the matching: a person and their outstanding amount.
struct Party {
    id: PersonId,
    remaining: Decimal,
}

/// Turns a balance map into a minimal list of directed payments.
///
/// Uses greedy largest-first matching: repeatedly pair the largest remaining
/// creditor with the largest remaining debtor. Not a certified minimum, but
/// practically minimal for typical group sizes, and never more than n - 1
/// transfers for n people with non-zero balances.
pub struct SettlementPlanner {
    epsilon: Decimal,
    rounding_scale: u32,
}

impl Default for SettlementPlanner {
    fn default() -> Self {
        Self::new(&EngineSettings::default())
    }
}

impl SettlementPlanner {
    pub fn new(settings: &EngineSettings) -> Self {
        Self {
            epsilon: settings.settlement_epsilon,
            rounding_scale: settings.rounding_scale,
        }
    }

    /// Plans settlements for a group, recomputing balances fresh.
    pub fn plan(&self, group: &Group) -> Vec<Settlement> {
        self.settle(&BalanceCalculator::balances(group))
    }

    /// Plans settlements from an already-computed balance map.
    pub fn settle(&self, balances: &HashMap<PersonId, Decimal>) -> Vec<Settlement> {
        let mut creditors: Vec<Party> = Vec::new();
        let mut debtors: Vec<Party> = Vec::new();

        // People with a zero balance participate in no settlement.
        for (&id, &balance) in balances {
            if balance > Decimal::ZERO {
                creditors.push(Party {
                    id,
                    remaining: balance,
                });
            } else if balance < Decimal::ZERO {
                debtors.push(Party {
                    id,
                    remaining: balance.abs(),
                });
            }
        }

        // Largest amounts first; equal amounts fall back to ascending person
        // id so the plan never depends on map iteration order.
        creditors.sort_by(|a, b| b.remaining.cmp(&a.remaining).then(a.id.cmp(&b.id)));
        debtors.sort_by(|a, b| b.remaining.cmp(&a.remaining).then(a.id.cmp(&b.id)));

        let mut settlements = Vec::new();
        let mut ci = 0;
        let mut di = 0;

        while ci < creditors.len() && di < debtors.len() {
            let creditor = &creditors[ci];
            let debtor = &debtors[di];

            let amount = creditor.remaining.min(debtor.remaining);
            settlements.push(Settlement::new(debtor.id, creditor.id, self.round(amount)));

            creditors[ci].remaining -= amount;
            debtors[di].remaining -= amount;

            // Residual rounding dust below epsilon counts as settled and is
            // dropped without a transfer.
            if creditors[ci].remaining < self.epsilon {
                ci += 1;
            }
            if debtors[di].remaining < self.epsilon {
                di += 1;
            }
        }

        settlements
    }

    fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(self.rounding_scale, RoundingStrategy::MidpointAwayFromZero)
    }
}
