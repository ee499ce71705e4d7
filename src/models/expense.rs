use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::PersonId;

/// One person's pre-tax share of an expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseLineItem {
    pub person_id: PersonId,
    pub item_name: String,
    pub amount: Decimal,
}

impl ExpenseLineItem {
    pub fn new(person_id: PersonId, item_name: impl Into<String>, amount: Decimal) -> Self {
        Self {
            person_id,
            item_name: item_name.into(),
            amount,
        }
    }
}

/// A recorded group expense.
///
/// `total_amount` is what the payer actually fronted, tax included. When
/// `include_tax` is set, the total is expected to equal
/// `subtotal * (1 + tax_percentage / 100)`; the engine trusts the stored value
/// when crediting the payer and only derives tax from the subtotal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub title: String,
    pub total_amount: Decimal,
    pub paid_by: PersonId,
    pub items: Vec<ExpenseLineItem>,
    pub include_tax: bool,
    pub tax_percentage: Decimal,
    pub category: String,
    pub date: DateTime<Utc>,
    pub description: String,
}

impl Expense {
    pub fn new(
        title: impl Into<String>,
        total_amount: Decimal,
        paid_by: PersonId,
        items: Vec<ExpenseLineItem>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            total_amount,
            paid_by,
            items,
            include_tax: false,
            tax_percentage: Decimal::ZERO,
            category: String::new(),
            date: Utc::now(),
            description: String::new(),
        }
    }

    /// Marks the expense as tax-inclusive with the given percentage.
    pub fn with_tax(mut self, tax_percentage: Decimal) -> Self {
        self.include_tax = true;
        self.tax_percentage = tax_percentage;
        self
    }

    /// Sum of all line-item amounts, excluding tax.
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(|item| item.amount).sum()
    }

    /// Tax carried by this expense, derived from the subtotal.
    ///
    /// Zero when tax is not included, the percentage is non-positive, or
    /// there is nothing to tax.
    pub fn tax_amount(&self) -> Decimal {
        let subtotal = self.subtotal();
        if !self.include_tax || self.tax_percentage <= Decimal::ZERO || subtotal <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        subtotal * self.tax_percentage / Decimal::from(100)
    }

    /// A line item's tax-inclusive share: its amount plus a cut of the tax
    /// proportional to its weight in the subtotal. Falls back to the raw
    /// amount when the subtotal is zero.
    pub fn item_share(&self, item: &ExpenseLineItem) -> Decimal {
        let subtotal = self.subtotal();
        let tax = self.tax_amount();
        if tax.is_zero() || subtotal.is_zero() {
            return item.amount;
        }
        item.amount + (item.amount / subtotal) * tax
    }
}
