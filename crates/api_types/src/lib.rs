//! Wire types for the round-up HTTP surface.
//!
//! Everything here is plain serde data shared between the server and its
//! callers; field names follow the public contract, not Rust convention.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account currency a round-up can be requested for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Gbp,
    Eur,
}

/// An amount in integer minor units of a currency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyAndAmount {
    pub currency: Currency,
    #[serde(rename = "minorUnits")]
    pub minor_units: i64,
}

pub mod round_up {
    use super::*;

    /// Query half of the round-up request.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RoundUpParams {
        pub min_transaction_timestamp: DateTime<Utc>,
        pub max_transaction_timestamp: DateTime<Utc>,
        pub account_currency: Currency,
    }

    /// Savings goal target amount.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Target {
        #[serde(rename = "minorUnits")]
        pub minor_units: i64,
    }

    /// Body half of the round-up request: the goal to create.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SavingsGoalBody {
        pub name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub target: Option<Target>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub base64_encoded_photo: Option<String>,
    }

    /// Success payload.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RoundUpResponse {
        pub savings_goal_uid: Uuid,
        pub balance: CurrencyAndAmount,
        pub success: bool,
    }
}

pub mod error {
    use super::*;

    /// One user-facing error message.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct ErrorMessage {
        pub message: String,
    }

    /// 400 body: the request itself was rejected.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct ErrorResponse {
        pub errors: Vec<ErrorMessage>,
        pub success: bool,
    }

    impl ErrorResponse {
        #[must_use]
        pub fn single(message: impl Into<String>) -> Self {
            Self {
                errors: vec![ErrorMessage {
                    message: message.into(),
                }],
                success: false,
            }
        }
    }

    /// 500 body: problem detail with a generic description, never provider
    /// error content.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct ProblemDetail {
        pub status: u16,
        pub title: String,
        pub detail: String,
    }

    impl ProblemDetail {
        #[must_use]
        pub fn internal(detail: impl Into<String>) -> Self {
            Self {
                status: 500,
                title: "Internal Server Error".to_string(),
                detail: detail.into(),
            }
        }
    }
}
