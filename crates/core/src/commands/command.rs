//! Savings command types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::schedule::Schedule;

/// Commands emitted by savings aggregates after in-memory mutation.
///
/// A command records one requested state change, carrying only the data a
/// handler needs to apply it. Aggregates are the only producers; external
/// callers never construct one for a business mutation directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// A new savings goal was opened on a user-managed account.
    CreateSavingGoal {
        account_id: String,
        name: String,
        goal: Decimal,
        target_date: NaiveDate,
    },

    /// The goal amount or the target date of an existing goal changed.
    AdjustSavingGoal {
        id: String,
        goal: Decimal,
        target_date: NaiveDate,
    },

    /// A recurrence schedule was attached or replaced.
    AdjustSchedule {
        id: String,
        target_date: NaiveDate,
        schedule: Schedule,
    },

    /// An installment was reserved towards the goal.
    RegisterSavingInstallment { id: String, amount: Decimal },

    /// The goal was used for its intended purpose.
    CompleteSavingGoal { id: String },
}

/// Discriminant used to register handlers for one command kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandKind {
    CreateSavingGoal,
    AdjustSavingGoal,
    AdjustSchedule,
    RegisterSavingInstallment,
    CompleteSavingGoal,
}

impl Command {
    /// Creates a CreateSavingGoal command.
    pub fn create_saving_goal(
        account_id: String,
        name: String,
        goal: Decimal,
        target_date: NaiveDate,
    ) -> Self {
        Self::CreateSavingGoal {
            account_id,
            name,
            goal,
            target_date,
        }
    }

    /// Creates an AdjustSavingGoal command.
    pub fn adjust_saving_goal(id: String, goal: Decimal, target_date: NaiveDate) -> Self {
        Self::AdjustSavingGoal {
            id,
            goal,
            target_date,
        }
    }

    /// Creates an AdjustSchedule command.
    pub fn adjust_schedule(id: String, target_date: NaiveDate, schedule: Schedule) -> Self {
        Self::AdjustSchedule {
            id,
            target_date,
            schedule,
        }
    }

    /// Creates a RegisterSavingInstallment command.
    pub fn register_saving_installment(id: String, amount: Decimal) -> Self {
        Self::RegisterSavingInstallment { id, amount }
    }

    /// Creates a CompleteSavingGoal command.
    pub fn complete_saving_goal(id: String) -> Self {
        Self::CompleteSavingGoal { id }
    }

    /// The kind handlers register under.
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::CreateSavingGoal { .. } => CommandKind::CreateSavingGoal,
            Command::AdjustSavingGoal { .. } => CommandKind::AdjustSavingGoal,
            Command::AdjustSchedule { .. } => CommandKind::AdjustSchedule,
            Command::RegisterSavingInstallment { .. } => CommandKind::RegisterSavingInstallment,
            Command::CompleteSavingGoal { .. } => CommandKind::CompleteSavingGoal,
        }
    }
}
