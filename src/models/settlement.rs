use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::PersonId;

/// A single directed payment instruction: `from` pays `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub from: PersonId,
    pub to: PersonId,
    pub amount: Decimal,
}

impl Settlement {
    pub fn new(from: PersonId, to: PersonId, amount: Decimal) -> Self {
        Self { from, to, amount }
    }
}
