use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Expense, Person, PersonId};

/// A set of people sharing expenses together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub people: Vec<Person>,
    pub expenses: Vec<Expense>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Group {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            people: Vec::new(),
            expenses: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    pub fn contains_person(&self, id: PersonId) -> bool {
        self.person(id).is_some()
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn add_person(&mut self, person: Person) {
        self.people.push(person);
        self.touch();
    }

    pub fn add_expense(&mut self, expense: Expense) {
        self.expenses.push(expense);
        self.touch();
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    use crate::models::ExpenseLineItem;

    #[test]
    fn test_group_person_lookup() {
        let mut group = Group::new("Trip", "");
        let alice = Person::new("Alice");
        let alice_id = alice.id;
        group.add_person(alice);

        assert!(group.contains_person(alice_id));
        assert_eq!(group.person(alice_id).unwrap().name, "Alice");
        assert!(!group.contains_person(Uuid::new_v4()));
    }

    #[test]
    fn test_add_expense_touches_group() {
        let mut group = Group::new("Trip", "");
        let alice = Person::new("Alice");
        let alice_id = alice.id;
        group.add_person(alice);

        let before = group.updated_at;
        group.add_expense(Expense::new(
            "Taxi",
            dec!(40),
            alice_id,
            vec![ExpenseLineItem::new(alice_id, "ride", dec!(40))],
        ));

        assert_eq!(group.expenses.len(), 1);
        assert!(group.updated_at >= before);
    }
}
