//! Goal service
//!
//! Provides business logic for savings goals, including draft validation
//! and progress measured against the current balance.

use crate::error::{BudgetError, BudgetResult};
use crate::ledger;
use crate::models::{Goal, GoalId, Money};
use crate::storage::Storage;

/// Service for goal management
pub struct GoalService<'a> {
    storage: &'a Storage,
}

/// A goal joined with its progress toward the current balance
#[derive(Debug, Clone)]
pub struct GoalProgress {
    pub goal: Goal,
    /// Whole-number percentage in `0..=100`
    pub percent: u8,
}

impl<'a> GoalService<'a> {
    /// Create a new goal service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a goal from a name and target
    ///
    /// Returns `Ok(None)` when the name is blank or the target is zero;
    /// such drafts are dropped silently. A negative target is accepted
    /// and simply never shows progress.
    pub fn add(&self, name: &str, target: Money) -> BudgetResult<Option<Goal>> {
        if name.trim().is_empty() || target.is_zero() {
            return Ok(None);
        }

        let goal = Goal {
            id: self.storage.ledger.next_goal_id()?,
            name: name.trim().to_string(),
            target,
        };

        self.storage.ledger.add_goal(goal.clone())?;
        self.storage.ledger.save()?;

        Ok(Some(goal))
    }

    /// Remove a goal by id
    pub fn remove(&self, id: GoalId) -> BudgetResult<()> {
        if !self.storage.ledger.remove_goal(id)? {
            return Err(BudgetError::goal_not_found(id.to_string()));
        }
        self.storage.ledger.save()?;
        Ok(())
    }

    /// List goals in the order they were recorded
    pub fn list(&self) -> BudgetResult<Vec<Goal>> {
        self.storage.ledger.goals()
    }

    /// List goals with their progress toward the current balance
    pub fn list_with_progress(&self) -> BudgetResult<Vec<GoalProgress>> {
        let transactions = self.storage.ledger.transactions()?;
        let balance = ledger::balance(&transactions);

        Ok(self
            .list()?
            .into_iter()
            .map(|goal| {
                let percent = ledger::goal_progress(&goal, balance);
                GoalProgress { goal, percent }
            })
            .collect())
    }
}
