//! Account domain models.

use serde::{Deserialize, Serialize};

/// Domain model representing the account that owns a savings goal.
///
/// The savings core only reads accounts; their lifecycle (creation,
/// balances, reconciliation) belongs to an external collaborator. A goal
/// references its account by id, so the account's lifetime is independent
/// of the goal's.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub currency: String,
    /// Whether the user manages this account directly. System-generated
    /// accounts (reconciliation counterparts, import placeholders) are not
    /// managed and cannot own savings goals.
    pub managed: bool,
}

impl Account {
    pub fn is_managed(&self) -> bool {
        self.managed
    }
}
