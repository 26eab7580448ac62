//! Collaborator interfaces the round-up pipeline is injected with.
//!
//! The engine never talks to the banking provider directly: it sees three
//! narrow traits, implemented over HTTP by the `starling` crate in
//! production and by scripted fakes in tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::{Account, Currency, FeedItem, Money, SavingsGoalDraft};

/// A collaborator call that failed at the transport or provider level.
///
/// The implementing layer has already logged whatever detail the provider
/// returned; this type deliberately carries none of it, so provider error
/// content cannot leak through the engine to callers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Error)]
#[error("collaborator call failed")]
pub struct ClientFailure;

pub type ClientResult<T> = Result<T, ClientFailure>;

/// A savings goal as reported back by the provider on creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CreatedGoal {
    pub savings_goal_uid: Uuid,
    pub success: bool,
}

/// Provider acknowledgement of a funding transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransferReceipt {
    pub transfer_uid: Uuid,
    pub success: bool,
}

/// Lists the accounts of the authenticated holder.
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    async fn accounts(&self) -> ClientResult<Vec<Account>>;
}

/// Reads the settled transaction feed of one account.
#[async_trait]
pub trait TransactionLedger: Send + Sync {
    async fn settled_transactions_between(
        &self,
        account_uid: Uuid,
        min_timestamp: DateTime<Utc>,
        max_timestamp: DateTime<Utc>,
    ) -> ClientResult<Vec<FeedItem>>;
}

/// Creates and funds savings goals.
#[async_trait]
pub trait SavingsGoalService: Send + Sync {
    async fn create_goal(
        &self,
        account_uid: Uuid,
        draft: &SavingsGoalDraft,
        currency: Currency,
    ) -> ClientResult<CreatedGoal>;

    /// Moves `amount` from the account into the goal.
    ///
    /// `transfer_uid` is the caller-generated idempotency key; the provider
    /// applies the transfer at most once per key.
    async fn transfer(
        &self,
        account_uid: Uuid,
        savings_goal_uid: Uuid,
        transfer_uid: Uuid,
        amount: Money,
    ) -> ClientResult<TransferReceipt>;
}
