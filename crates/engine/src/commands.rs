//! Command structs for engine operations.
//!
//! A [`RoundUpCommand`] groups everything one round-up run needs, and owns
//! the request-validity checks that must pass before any collaborator is
//! contacted.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};

use crate::{Currency, EngineError};

/// Longest savings goal name the provider accepts.
pub const MAX_GOAL_NAME_CHARS: usize = 255;

/// What the created savings goal should look like.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavingsGoalDraft {
    pub name: String,
    pub target_minor_units: Option<i64>,
    /// Optional goal photo, base64-encoded by the caller.
    pub base64_photo: Option<String>,
}

impl SavingsGoalDraft {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target_minor_units: None,
            base64_photo: None,
        }
    }

    #[must_use]
    pub fn target_minor_units(mut self, target: i64) -> Self {
        self.target_minor_units = Some(target);
        self
    }

    #[must_use]
    pub fn base64_photo(mut self, photo: impl Into<String>) -> Self {
        self.base64_photo = Some(photo.into());
        self
    }
}

/// Compute a round-up over `[min_timestamp, max_timestamp]` and fund a goal
/// on the first account held in `currency`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundUpCommand {
    pub min_timestamp: DateTime<Utc>,
    pub max_timestamp: DateTime<Utc>,
    pub currency: Currency,
    pub goal: SavingsGoalDraft,
}

impl RoundUpCommand {
    /// Checks the command is well-formed, first failure wins.
    ///
    /// Pure and side-effect free; runs before any collaborator call so a bad
    /// request never reaches the provider.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.min_timestamp >= self.max_timestamp {
            return Err(EngineError::Validation(
                "Min timestamp must be before max timestamp".to_string(),
            ));
        }

        if self.goal.name.is_empty() {
            return Err(EngineError::Validation(
                "The savingsGoalName is required".to_string(),
            ));
        }
        if self.goal.name.chars().count() > MAX_GOAL_NAME_CHARS {
            return Err(EngineError::Validation(
                "The savingsGoalName cannot exceed 255 characters".to_string(),
            ));
        }

        if let Some(photo) = &self.goal.base64_photo
            && BASE64.decode(photo).is_err()
        {
            return Err(EngineError::Validation("Invalid image".to_string()));
        }

        Ok(())
    }
}
