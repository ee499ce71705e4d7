pub mod balance_calculator;
pub mod group_service;
pub mod settlement_planner;

pub use balance_calculator::BalanceCalculator;
pub use group_service::{
    CreateExpenseRequest, CreatePersonRequest, ExpenseLineItemRequest, GroupService,
    UpdatePersonRequest,
};
pub use settlement_planner::SettlementPlanner;
