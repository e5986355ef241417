//! The savings goal aggregate.

use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};

use super::savings_model::SavingGoalRecord;
use crate::accounts::Account;
use crate::aggregate::AggregateRoot;
use crate::commands::{Command, CommandPublisher};
use crate::constants::{MAX_SCHEDULE_STEPS, MONEY_SCALE};
use crate::errors::{Error, Result, ValidationError};
use crate::schedule::{Periodicity, Schedule};
use crate::utils::time_utils::Clock;

/// A savings goal: reserve `goal` money on an account by `target_date`,
/// optionally along a recurrence schedule.
///
/// Business methods follow the discipline documented in
/// [`crate::aggregate`]: validate, mutate in-memory state, publish exactly
/// one command through the injected publisher. Completion is terminal;
/// every mutating operation rejects on a completed goal.
pub struct SavingGoal {
    id: Option<String>,
    account_id: String,
    name: String,
    description: Option<String>,
    goal: Decimal,
    allocated: Decimal,
    target_date: NaiveDate,
    schedule: Option<Schedule>,
    completed: bool,
    publisher: Arc<dyn CommandPublisher>,
    clock: Arc<dyn Clock>,
}

impl SavingGoal {
    /// Opens a new savings goal on a user-managed account.
    ///
    /// The aggregate carries no id until the creation command has been
    /// applied durably; restore it from the stored record to keep working
    /// with it afterwards.
    pub fn create(
        publisher: Arc<dyn CommandPublisher>,
        clock: Arc<dyn Clock>,
        account: &Account,
        name: &str,
        goal: Decimal,
        target_date: NaiveDate,
    ) -> Result<Self> {
        if !account.is_managed() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Cannot create a savings goal if the account is not owned by the user".to_string(),
            )));
        }
        if name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Savings goal name cannot be empty".to_string(),
            )));
        }
        if goal <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "The goal cannot be 0 or less".to_string(),
            )));
        }

        let created = SavingGoal {
            id: None,
            account_id: account.id.clone(),
            name: name.to_string(),
            description: None,
            goal,
            allocated: Decimal::ZERO,
            target_date,
            schedule: None,
            completed: false,
            publisher,
            clock,
        };

        debug!(
            "creating savings goal '{}' on account {}",
            created.name, created.account_id
        );
        created.publisher.publish(Command::create_saving_goal(
            created.account_id.clone(),
            created.name.clone(),
            goal,
            target_date,
        ))?;

        Ok(created)
    }

    /// Rebuilds the aggregate from its stored record.
    pub fn restore(
        publisher: Arc<dyn CommandPublisher>,
        clock: Arc<dyn Clock>,
        record: SavingGoalRecord,
    ) -> Self {
        SavingGoal {
            id: Some(record.id),
            account_id: record.account_id,
            name: record.name,
            description: record.description,
            goal: record.goal,
            allocated: record.allocated,
            target_date: record.target_date,
            schedule: record.schedule,
            completed: record.completed,
            publisher,
            clock,
        }
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn goal(&self) -> Decimal {
        self.goal
    }

    pub fn allocated(&self) -> Decimal {
        self.allocated
    }

    pub fn target_date(&self) -> NaiveDate {
        self.target_date
    }

    pub fn schedule(&self) -> Option<Schedule> {
        self.schedule
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Changes the targeted amount of money or the date at which it should
    /// be available.
    pub fn adjust_goal(&mut self, goal: Decimal, target_date: NaiveDate) -> Result<()> {
        let id = self.persisted_id()?;
        self.ensure_active()?;
        if target_date <= self.clock.today() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Target date for a savings goal must be in the future".to_string(),
            )));
        }
        if goal <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "The goal cannot be 0 or less".to_string(),
            )));
        }

        self.goal = goal;
        self.target_date = target_date;
        self.publisher
            .publish(Command::adjust_saving_goal(id, goal, target_date))
    }

    /// Attaches or replaces the recurrence at which money is set apart.
    ///
    /// The first saving occurrence is today stepped forward by one
    /// interval; it must not fall after the target date.
    pub fn set_schedule(&mut self, periodicity: Periodicity, interval: u32) -> Result<()> {
        let id = self.persisted_id()?;
        self.ensure_active()?;
        let schedule = Schedule::new(periodicity, interval)?;

        let first_saving = schedule.next(self.clock.today());
        if first_saving > self.target_date {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Cannot set a schedule when the first saving would fall after the target date"
                    .to_string(),
            )));
        }

        self.schedule = Some(schedule);
        self.publisher
            .publish(Command::adjust_schedule(id, self.target_date, schedule))
    }

    /// The amount to set apart at the next saving occurrence to reach the
    /// goal by its target date.
    ///
    /// Pure query: nothing is mutated and no command is published. The
    /// value varies with the already allocated amount and with today's
    /// date. Returns zero once less than one monetary unit remains.
    pub fn compute_allocation(&self) -> Result<Decimal> {
        let schedule = self.schedule.ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(
                "Cannot compute an allocation without a schedule".to_string(),
            ))
        })?;

        let remaining = self.goal - self.allocated;
        if remaining < Decimal::ONE {
            return Ok(Decimal::ZERO);
        }

        // Count saving occurrences left by stepping back from the target
        // date until today is reached. The step that lands on or before
        // today is counted too, so the count is always at least 1.
        let today = self.clock.today();
        let mut periods = 0u32;
        let mut occurrence = self.target_date;
        loop {
            occurrence = schedule.previous(occurrence);
            periods += 1;
            if occurrence <= today {
                break;
            }
            if periods >= MAX_SCHEDULE_STEPS {
                return Err(Error::Calculation(format!(
                    "schedule stepping back from {} did not reach {} within {} steps",
                    self.target_date, today, MAX_SCHEDULE_STEPS
                )));
            }
        }

        Ok((remaining / Decimal::from(periods))
            .round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Reserves the next installment towards the goal, computed via
    /// [`SavingGoal::compute_allocation`].
    ///
    /// A computed installment of zero (goal already reached) is a silent
    /// no-op: nothing is mutated and no command is published.
    pub fn reserve_next_payment(&mut self) -> Result<()> {
        let id = self.persisted_id()?;
        self.ensure_active()?;
        if self.schedule.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Cannot reserve an installment for savings goal {id}: no schedule configured"
            ))));
        }

        let installment = self.compute_allocation()?;
        if installment > Decimal::ZERO {
            self.allocated += installment;
            debug!("reserved {installment} towards savings goal {id}");
            self.publisher
                .publish(Command::register_saving_installment(id, installment))?;
        }
        Ok(())
    }

    /// Signals that the goal has been used for its intended purpose.
    ///
    /// Terminal: any further mutating operation on this goal rejects,
    /// including a second completion.
    pub fn complete(&mut self) -> Result<()> {
        let id = self.persisted_id()?;
        self.ensure_active()?;

        self.completed = true;
        self.publisher.publish(Command::complete_saving_goal(id))
    }

    fn persisted_id(&self) -> Result<String> {
        self.id.clone().ok_or_else(|| {
            Error::Validation(ValidationError::MissingField(
                "id (savings goal has not been persisted yet)".to_string(),
            ))
        })
    }

    fn ensure_active(&self) -> Result<()> {
        if self.completed {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Savings goal has already been completed".to_string(),
            )));
        }
        Ok(())
    }
}

impl AggregateRoot for SavingGoal {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
