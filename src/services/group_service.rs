use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::config::EngineSettings;
use crate::error::{AppError, Result};
use crate::models::{
    BalanceSummary, Expense, ExpenseLineItem, Group, Person, PersonBalance, PersonId, Settlement,
};
use crate::services::{BalanceCalculator, SettlementPlanner};

fn positive_amount(amount: &Decimal) -> std::result::Result<(), ValidationError> {
    if *amount > Decimal::ZERO {
        Ok(())
    } else {
        Err(ValidationError::new("amount_not_positive"))
    }
}

fn tax_percentage_range(pct: &Decimal) -> std::result::Result<(), ValidationError> {
    if *pct >= Decimal::ZERO && *pct <= Decimal::from(100) {
        Ok(())
    } else {
        Err(ValidationError::new("tax_percentage_out_of_range"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePersonRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email must be valid"))]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePersonRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExpenseLineItemRequest {
    pub person_id: PersonId,
    #[validate(length(min = 1, message = "item name is required"))]
    pub item_name: String,
    #[validate(custom = "positive_amount")]
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateExpenseRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(custom = "positive_amount")]
    pub total_amount: Decimal,
    pub paid_by: PersonId,
    #[validate]
    pub items: Vec<ExpenseLineItemRequest>,
    #[serde(default)]
    pub include_tax: bool,
    /// Defaults to the configured percentage when omitted.
    #[validate(custom = "tax_percentage_range")]
    pub tax_percentage: Option<Decimal>,
    #[serde(default)]
    pub category: String,
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: String,
}

/// In-memory registry of expense groups.
///
/// Owns group lifecycle and enforces referential integrity at write time, so
/// the calculator and planner can assume (but still tolerate) consistent
/// data. State is explicit and passed by value; there is no global store.
pub struct GroupService {
    groups: HashMap<Uuid, Group>,
    settings: EngineSettings,
    planner: SettlementPlanner,
}

impl Default for GroupService {
    fn default() -> Self {
        Self::new(EngineSettings::default())
    }
}

impl GroupService {
    pub fn new(settings: EngineSettings) -> Self {
        let planner = SettlementPlanner::new(&settings);
        Self {
            groups: HashMap::new(),
            settings,
            planner,
        }
    }

    pub fn create_group(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Uuid> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(AppError::validation("title is required"));
        }
        let group = Group::new(title, description.into());
        let id = group.id;
        debug!(group_id = %id, "group created");
        self.groups.insert(id, group);
        Ok(id)
    }

    pub fn group(&self, id: Uuid) -> Option<&Group> {
        self.groups.get(&id)
    }

    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    pub fn rename_group(
        &mut self,
        id: Uuid,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<()> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(AppError::validation("title is required"));
        }
        let group = self.group_mut(id)?;
        group.title = title;
        group.description = description.into();
        group.touch();
        Ok(())
    }

    pub fn delete_group(&mut self, id: Uuid) -> Result<()> {
        self.groups
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found("group", id))
    }

    pub fn add_person(&mut self, group_id: Uuid, request: CreatePersonRequest) -> Result<PersonId> {
        request.validate()?;
        let group = self.group_mut(group_id)?;
        let person = Person {
            id: Uuid::new_v4(),
            name: request.name,
            email: request.email,
        };
        let person_id = person.id;
        group.add_person(person);
        Ok(person_id)
    }

    pub fn update_person(
        &mut self,
        group_id: Uuid,
        person_id: PersonId,
        request: UpdatePersonRequest,
    ) -> Result<()> {
        let group = self.group_mut(group_id)?;
        let person = group
            .people
            .iter_mut()
            .find(|p| p.id == person_id)
            .ok_or_else(|| AppError::not_found("person", person_id))?;
        if let Some(name) = request.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("name is required"));
            }
            person.name = name;
        }
        if let Some(email) = request.email {
            person.email = Some(email);
        }
        group.touch();
        Ok(())
    }

    /// Removes a person and every expense that references them, either as
    /// payer or as a line-item consumer.
    pub fn remove_person(&mut self, group_id: Uuid, person_id: PersonId) -> Result<()> {
        let group = self.group_mut(group_id)?;
        if !group.contains_person(person_id) {
            return Err(AppError::not_found("person", person_id));
        }
        group.people.retain(|p| p.id != person_id);
        group.expenses.retain(|e| {
            e.paid_by != person_id && !e.items.iter().any(|item| item.person_id == person_id)
        });
        group.touch();
        Ok(())
    }

    pub fn add_expense(&mut self, group_id: Uuid, request: CreateExpenseRequest) -> Result<Uuid> {
        let expense = self.build_expense(group_id, request)?;
        let id = expense.id;
        let group = self.group_mut(group_id)?;
        group.add_expense(expense);
        Ok(id)
    }

    /// Replaces an existing expense wholesale.
    pub fn update_expense(
        &mut self,
        group_id: Uuid,
        expense_id: Uuid,
        request: CreateExpenseRequest,
    ) -> Result<()> {
        let mut expense = self.build_expense(group_id, request)?;
        expense.id = expense_id;
        let group = self.group_mut(group_id)?;
        let slot = group
            .expenses
            .iter_mut()
            .find(|e| e.id == expense_id)
            .ok_or_else(|| AppError::not_found("expense", expense_id))?;
        *slot = expense;
        group.touch();
        Ok(())
    }

    pub fn remove_expense(&mut self, group_id: Uuid, expense_id: Uuid) -> Result<()> {
        let group = self.group_mut(group_id)?;
        let before = group.expenses.len();
        group.expenses.retain(|e| e.id != expense_id);
        if group.expenses.len() == before {
            return Err(AppError::not_found("expense", expense_id));
        }
        group.touch();
        Ok(())
    }

    /// Net balance map for a group. An unknown group id yields an empty map.
    pub fn balances_for(&self, group_id: Uuid) -> HashMap<PersonId, Decimal> {
        match self.groups.get(&group_id) {
            Some(group) => BalanceCalculator::balances(group),
            None => HashMap::new(),
        }
    }

    /// Per-person positions for a group, in member order.
    pub fn positions_for(&self, group_id: Uuid) -> Vec<PersonBalance> {
        match self.groups.get(&group_id) {
            Some(group) => {
                let positions = BalanceCalculator::positions(group);
                let summary = BalanceSummary::from_balances(&positions);
                debug!(
                    group_id = %group_id,
                    creditors = summary.creditors,
                    debtors = summary.debtors,
                    total_paid = %summary.total_paid,
                    "balances computed"
                );
                positions
            }
            None => Vec::new(),
        }
    }

    /// Settlement plan for a group. An unknown group id yields an empty list.
    pub fn settlements_for(&self, group_id: Uuid) -> Vec<Settlement> {
        match self.groups.get(&group_id) {
            Some(group) => self.planner.plan(group),
            None => Vec::new(),
        }
    }

    fn group_mut(&mut self, id: Uuid) -> Result<&mut Group> {
        self.groups
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("group", id))
    }

    fn build_expense(&self, group_id: Uuid, request: CreateExpenseRequest) -> Result<Expense> {
        request.validate()?;
        if request.items.is_empty() {
            return Err(AppError::validation("at least one item is required"));
        }

        let group = self
            .groups
            .get(&group_id)
            .ok_or_else(|| AppError::not_found("group", group_id))?;
        if !group.contains_person(request.paid_by) {
            return Err(AppError::validation("payer is not a member of this group"));
        }
        if let Some(item) = request
            .items
            .iter()
            .find(|item| !group.contains_person(item.person_id))
        {
            return Err(AppError::validation(format!(
                "item person {} is not a member of this group",
                item.person_id
            )));
        }

        let expense = Expense {
            id: Uuid::new_v4(),
            title: request.title,
            total_amount: request.total_amount,
            paid_by: request.paid_by,
            items: request
                .items
                .into_iter()
                .map(|item| ExpenseLineItem::new(item.person_id, item.item_name, item.amount))
                .collect(),
            include_tax: request.include_tax,
            tax_percentage: request
                .tax_percentage
                .unwrap_or(self.settings.default_tax_percentage),
            category: request.category,
            date: request.date.unwrap_or_else(Utc::now),
            description: request.description,
        };

        // The stored total is trusted for crediting the payer, so a total
        // inconsistent with subtotal + tax silently skews balances. Accept it
        // but leave a trace.
        let expected = expense.subtotal() + expense.tax_amount();
        if (expense.total_amount - expected).abs() > self.settings.settlement_epsilon {
            warn!(
                group_id = %group_id,
                expense = %expense.title,
                total = %expense.total_amount,
                expected = %expected,
                "expense total does not match subtotal plus tax"
            );
        }

        Ok(expense)
    }
}
