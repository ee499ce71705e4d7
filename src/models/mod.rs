pub mod balance;
pub mod expense;
pub mod group;
pub mod person;
pub mod settlement;

pub use balance::{BalanceSummary, PersonBalance};
pub use expense::{Expense, ExpenseLineItem};
pub use group::Group;
pub use person::{Person, PersonId};
pub use settlement::Settlement;
