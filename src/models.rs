use serde::{Deserialize, Serialize};

/// Stored user record. `password` holds the credential in the configured
/// scheme's at-rest form (plaintext or an argon2 PHC string) and must
/// round-trip through the local store, so it is serialized as-is. Callers
/// only ever see a `PublicUser`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PublicUser {
    pub id: String,
    pub username: String,
}

/// One logged expense. `date` is a calendar date stored as `YYYY-MM-DD`;
/// it carries no time component.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: String,
    pub user_id: String,
    pub amount: f64,
    pub category_id: String,
    pub description: String,
    pub date: String,
}

/// Creation payload for an expense; the facade generates the id.
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub user_id: String,
    pub amount: f64,
    pub category_id: String,
    pub description: String,
    pub date: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}

/// Persisted representation of "who is currently logged in", restored on
/// application start without re-validating credentials.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SessionToken {
    pub user_id: String,
    pub username: String,
}
