use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{Group, PersonBalance, PersonId};

/// Reduces a group's expenses into one signed net balance per member.
///
/// The computation is a pure function of the group snapshot: no caching, no
/// side effects, deterministic for identical input. Dangling person
/// references (a payer or consumer not in the group) contribute nothing
/// instead of failing the whole computation.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Calculates per-person positions, in group member order.
    ///
    /// Every member appears in the result, including those with a zero net
    /// balance. For any group where every expense reference resolves to a
    /// member, the nets sum to exactly zero.
    pub fn positions(group: &Group) -> Vec<PersonBalance> {
        let mut by_person: HashMap<PersonId, PersonBalance> = group
            .people
            .iter()
            .map(|p| (p.id, PersonBalance::new(p.id)))
            .collect();

        for expense in &group.expenses {
            // An expense with no line items contributes nothing.
            if expense.items.is_empty() {
                continue;
            }

            let subtotal = expense.subtotal();
            let tax = expense.tax_amount();

            // The payer fronted the full total, tax included.
            if let Some(payer) = by_person.get_mut(&expense.paid_by) {
                payer.add_paid(expense.total_amount);
            }

            // Each consumer owes their item amount plus a proportional cut of
            // the tax. A zero subtotal would make the proportion undefined,
            // so the item then contributes only its raw amount.
            for item in &expense.items {
                let share = if tax.is_zero() || subtotal.is_zero() {
                    item.amount
                } else {
                    item.amount + (item.amount / subtotal) * tax
                };
                if let Some(consumer) = by_person.get_mut(&item.person_id) {
                    consumer.add_consumed(share);
                }
            }
        }

        group
            .people
            .iter()
            .filter_map(|p| by_person.remove(&p.id))
            .collect()
    }

    /// Calculates the net balance map: person id to signed amount.
    pub fn balances(group: &Group) -> HashMap<PersonId, Decimal> {
        Self::positions(group)
            .into_iter()
            .map(|b| (b.person_id, b.net))
            .collect()
    }
}
