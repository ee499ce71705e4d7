#![allow(dead_code)]

use rust_decimal::Decimal;
use split_engine::models::{Expense, ExpenseLineItem, Group, Person, PersonId};

/// Builds a group with one member per name, returning the member ids in order.
pub fn group_of(names: &[&str]) -> (Group, Vec<PersonId>) {
    let mut group = Group::new("Test group", "");
    let mut ids = Vec::with_capacity(names.len());
    for name in names {
        let person = Person::new(*name);
        ids.push(person.id);
        group.add_person(person);
    }
    (group, ids)
}

pub fn expense(
    title: &str,
    total: Decimal,
    paid_by: PersonId,
    shares: &[(PersonId, Decimal)],
) -> Expense {
    let items = shares
        .iter()
        .map(|&(person_id, amount)| ExpenseLineItem::new(person_id, "item", amount))
        .collect();
    Expense::new(title, total, paid_by, items)
}

pub fn taxed_expense(
    title: &str,
    total: Decimal,
    paid_by: PersonId,
    tax_percentage: Decimal,
    shares: &[(PersonId, Decimal)],
) -> Expense {
    expense(title, total, paid_by, shares).with_tax(tax_percentage)
}
