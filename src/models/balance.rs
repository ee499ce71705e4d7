use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::PersonId;

/// A person's position within a group.
/// Tracks gross amounts fronted and consumed, and the signed net balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonBalance {
    pub person_id: PersonId,
    /// Total the person paid on behalf of the group, tax included.
    pub gross_paid: Decimal,
    /// Total the person consumed across all expenses, tax included.
    pub gross_consumed: Decimal,
    /// Net balance: positive = others owe them, negative = they owe others.
    pub net: Decimal,
}

impl PersonBalance {
    pub fn new(person_id: PersonId) -> Self {
        Self {
            person_id,
            gross_paid: Decimal::ZERO,
            gross_consumed: Decimal::ZERO,
            net: Decimal::ZERO,
        }
    }

    /// Credits the person for an amount they fronted.
    pub fn add_paid(&mut self, amount: Decimal) {
        self.gross_paid += amount;
        self.recalculate_net();
    }

    /// Debits the person for a tax-inclusive share they consumed.
    pub fn add_consumed(&mut self, amount: Decimal) {
        self.gross_consumed += amount;
        self.recalculate_net();
    }

    fn recalculate_net(&mut self) {
        self.net = self.gross_paid - self.gross_consumed;
    }

    pub fn is_creditor(&self) -> bool {
        self.net > Decimal::ZERO
    }

    pub fn is_debtor(&self) -> bool {
        self.net < Decimal::ZERO
    }

    pub fn is_settled(&self) -> bool {
        self.net.is_zero()
    }
}

/// Aggregate view over a group's balances, for reporting and logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceSummary {
    pub participant_count: usize,
    pub creditors: usize,
    pub debtors: usize,
    pub settled: usize,
    /// Total fronted across all expenses (equals total consumed when every
    /// reference in every expense resolves to a member).
    pub total_paid: Decimal,
}

impl BalanceSummary {
    pub fn from_balances(balances: &[PersonBalance]) -> Self {
        Self {
            participant_count: balances.len(),
            creditors: balances.iter().filter(|b| b.is_creditor()).count(),
            debtors: balances.iter().filter(|b| b.is_debtor()).count(),
            settled: balances.iter().filter(|b| b.is_settled()).count(),
            total_paid: balances.iter().map(|b| b.gross_paid).sum(),
        }
    }
}
