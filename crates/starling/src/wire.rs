//! Wire DTOs for the provider REST API.
//!
//! Field names follow the provider's camelCase contract. Conversions into
//! engine types drop entries the closed engine model cannot represent
//! (unknown currencies or directions); those can never match a request, so
//! skipping them is lossless for the pipeline.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use engine::{Account, AssociatedRoundUp, Currency, Direction, FeedItem, Money};

#[derive(Debug, Deserialize)]
pub(crate) struct AccountsEnvelope {
    pub accounts: Vec<WireAccount>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireAccount {
    pub account_uid: Uuid,
    pub default_category: Uuid,
    pub currency: String,
}

impl AccountsEnvelope {
    pub(crate) fn into_accounts(self) -> Vec<Account> {
        self.accounts
            .into_iter()
            .filter_map(|account| match Currency::try_from(account.currency.as_str()) {
                Ok(currency) => Some(Account {
                    account_uid: account.account_uid,
                    default_category: account.default_category,
                    currency,
                }),
                Err(_) => {
                    tracing::debug!(
                        account_uid = %account.account_uid,
                        currency = %account.currency,
                        "skipping account in unsupported currency"
                    );
                    None
                }
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FeedEnvelope {
    pub feed_items: Vec<WireFeedItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireFeedItem {
    pub feed_item_uid: Uuid,
    pub category_uid: Uuid,
    pub amount: WireAmount,
    pub direction: String,
    pub round_up: Option<WireRoundUp>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireAmount {
    pub currency: String,
    pub minor_units: i64,
}

impl WireAmount {
    pub(crate) fn of(amount: Money) -> Self {
        Self {
            currency: amount.currency.code().to_string(),
            minor_units: amount.minor_units,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireRoundUp {
    pub goal_category_uid: Uuid,
}

impl FeedEnvelope {
    pub(crate) fn into_feed_items(self) -> Vec<FeedItem> {
        self.feed_items
            .into_iter()
            .filter_map(WireFeedItem::into_feed_item)
            .collect()
    }
}

impl WireFeedItem {
    fn into_feed_item(self) -> Option<FeedItem> {
        let direction = match self.direction.as_str() {
            "IN" => Direction::In,
            "OUT" => Direction::Out,
            other => {
                tracing::debug!(
                    feed_item_uid = %self.feed_item_uid,
                    direction = other,
                    "skipping feed item with unknown direction"
                );
                return None;
            }
        };
        let currency = match Currency::try_from(self.amount.currency.as_str()) {
            Ok(currency) => currency,
            Err(_) => {
                tracing::debug!(
                    feed_item_uid = %self.feed_item_uid,
                    currency = %self.amount.currency,
                    "skipping feed item in unsupported currency"
                );
                return None;
            }
        };

        Some(FeedItem {
            feed_item_uid: self.feed_item_uid,
            category_uid: self.category_uid,
            amount: Money::new(currency, self.amount.minor_units),
            direction,
            round_up: self.round_up.map(|round_up| AssociatedRoundUp {
                goal_category_uid: round_up.goal_category_uid,
            }),
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SavingsGoalRequest {
    pub name: String,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<WireTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base64_encoded_photo: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireTarget {
    pub minor_units: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateGoalResponse {
    pub savings_goal_uid: Uuid,
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct TopUpRequest {
    pub amount: WireAmount,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TransferResponse {
    pub transfer_uid: Uuid,
    pub success: bool,
}

/// Provider error body, decoded for logging only.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorDetail {
    pub message: String,
}

impl ErrorEnvelope {
    pub(crate) fn first_message(self) -> Option<String> {
        self.errors.into_iter().next().map(|detail| detail.message)
    }
}
