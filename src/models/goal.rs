//! Savings goal model
//!
//! A goal is a named savings target. Goals have no link to specific
//! transactions; progress toward a goal is derived from the global balance
//! and never stored.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

/// A named savings target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier (millisecond timestamp at creation)
    pub id: GoalId,

    /// Goal name
    pub name: String,

    /// Target amount; must be positive for progress to be meaningful
    pub target: Money,
}

impl Goal {
    /// Create a new goal
    pub fn new(id: GoalId, name: impl Into<String>, target: Money) -> Self {
        Self {
            id,
            name: name.into(),
            target,
        }
    }

    /// Check if the target is meaningful (strictly positive)
    pub fn has_valid_target(&self) -> bool {
        self.target.is_positive()
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.target)
    }
}
