use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identity of a group member.
pub type PersonId = Uuid;

/// A member of an expense group. Lifecycle is owned by the enclosing group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub email: Option<String>,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: None,
        }
    }

    pub fn with_email(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: Some(email.into()),
        }
    }
}
