//! Configuration for leave-plan optimization.

use crate::bridge::DEFAULT_MAX_BRIDGE_DAYS;
use crate::error::OptimizerError;
use crate::policy::SelectionPolicy;

/// Default cap on the length of a single selected period, in days.
pub const DEFAULT_MAX_CONSECUTIVE_DAYS: u32 = 14;

/// Configuration for [`optimize_leave_plan`](crate::optimize_leave_plan).
///
/// # Example
///
/// ```
/// use bridgeday_optimizer::{OptimizerConfig, SelectionPolicy};
///
/// let config = OptimizerConfig::new()
///     .with_policy(SelectionPolicy::PreferLongVacations)
///     .with_max_consecutive_days(10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizerConfig {
    policy: SelectionPolicy,
    max_consecutive_days: u32,
    max_bridge_days: u32,
}

impl OptimizerConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `policy = MaximizeEfficiency`, `max_consecutive_days = 14`,
    /// `max_bridge_days = 5`.
    pub fn new() -> Self {
        Self {
            policy: SelectionPolicy::default(),
            max_consecutive_days: DEFAULT_MAX_CONSECUTIVE_DAYS,
            max_bridge_days: DEFAULT_MAX_BRIDGE_DAYS,
        }
    }

    /// Sets the ordering policy used by the allocator.
    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the longest period, in days, the allocator may select.
    ///
    /// Longer opportunities are skipped, never split.
    pub fn with_max_consecutive_days(mut self, days: u32) -> Self {
        self.max_consecutive_days = days;
        self
    }

    /// Sets the longest bridge, in leave days, the search tries.
    pub fn with_max_bridge_days(mut self, days: u32) -> Self {
        self.max_bridge_days = days;
        self
    }

    // --- Accessors ---

    /// Returns the ordering policy.
    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Returns the maximum period length.
    pub fn max_consecutive_days(&self) -> u32 {
        self.max_consecutive_days
    }

    /// Returns the maximum bridge length.
    pub fn max_bridge_days(&self) -> u32 {
        self.max_bridge_days
    }

    /// Validates this configuration.
    ///
    /// Both limits must be at least 1.
    pub fn validate(&self) -> Result<(), OptimizerError> {
        if self.max_bridge_days == 0 {
            return Err(OptimizerError::InvalidMaxBridgeDays {
                value: self.max_bridge_days,
            });
        }
        if self.max_consecutive_days == 0 {
            return Err(OptimizerError::InvalidMaxConsecutiveDays {
                value: self.max_consecutive_days,
            });
        }
        Ok(())
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self::new()
    }
}
