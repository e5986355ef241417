//! Savings goal domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::schedule::Schedule;

/// Durable snapshot of a savings goal, as written and read by command
/// handlers.
///
/// This is the persisted side of the logical/durable split: a
/// [`SavingGoal`](super::SavingGoal) restored from a record may run ahead
/// of it until every command it published has been applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingGoalRecord {
    pub id: String,
    pub account_id: String,
    pub name: String,
    pub description: Option<String>,
    pub goal: Decimal,
    /// Amount reserved so far; only ever grows.
    #[serde(default)]
    pub allocated: Decimal,
    pub target_date: NaiveDate,
    pub schedule: Option<Schedule>,
    #[serde(default)]
    pub completed: bool,
}
