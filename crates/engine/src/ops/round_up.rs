//! The round-up pipeline.
//!
//! One strict forward pass per request: Validate, ResolveAccount,
//! FetchTransactions, Calculate, CreateGoal, Fund (only for a positive
//! amount), Outcome. Every step short-circuits on failure; nothing is
//! retried. Cancellation is the caller dropping the future: each
//! collaborator call is an await point, so no later step runs once the
//! request is gone.

use uuid::Uuid;

use crate::{
    Engine, EngineError, FeedItem, Money, ResultEngine, RoundUpCommand, accounts, feed,
};

/// Terminal success artifact of one round-up run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundUpOutcome {
    pub savings_goal_uid: Uuid,
    /// Amount moved into the goal; zero when the window held no eligible
    /// spending.
    pub balance: Money,
}

impl Engine {
    /// Computes the round-up for `cmd` and funds a freshly created goal.
    ///
    /// The goal is created even when the computed amount is zero: it stays
    /// usable for a future recurring round-up, so an empty window is a
    /// success with a zero balance, not an error.
    pub async fn round_up_between(&self, cmd: RoundUpCommand) -> ResultEngine<RoundUpOutcome> {
        cmd.validate()?;

        let accounts = self
            .accounts
            .accounts()
            .await
            .map_err(|_| EngineError::Upstream("Error occured getting accounts".to_string()))?;
        let account = accounts::first_with_currency(accounts, cmd.currency).ok_or_else(|| {
            EngineError::AccountNotFound(format!(
                "Account with currency type: {} not found",
                cmd.currency
            ))
        })?;

        let feed_items = self
            .ledger
            .settled_transactions_between(account.account_uid, cmd.min_timestamp, cmd.max_timestamp)
            .await
            .map_err(|_| EngineError::Upstream("Error occured getting feed items".to_string()))?;

        // Only the primary spending feed counts; items booked against
        // savings spaces of the same holder are excluded.
        let spending: Vec<FeedItem> = feed_items
            .into_iter()
            .filter(|item| item.category_uid == account.default_category)
            .collect();
        let balance = Money::new(cmd.currency, feed::round_up_total(&spending));
        tracing::debug!(
            account_uid = %account.account_uid,
            items = spending.len(),
            minor_units = balance.minor_units,
            "computed round-up"
        );

        let goal = match self
            .savings
            .create_goal(account.account_uid, &cmd.goal, cmd.currency)
            .await
        {
            Ok(goal) if goal.success => goal,
            _ => {
                return Err(EngineError::BusinessRule(
                    "Error occured creating savings goal".to_string(),
                ));
            }
        };

        if balance.is_positive() {
            // First and only transfer ever issued against this goal, so a
            // fresh key is unique by construction.
            let transfer_uid = Uuid::new_v4();
            match self
                .savings
                .transfer(account.account_uid, goal.savings_goal_uid, transfer_uid, balance)
                .await
            {
                Ok(receipt) if receipt.success => {
                    tracing::info!(
                        savings_goal_uid = %goal.savings_goal_uid,
                        %transfer_uid,
                        amount = %balance,
                        "funded savings goal"
                    );
                }
                _ => {
                    return Err(EngineError::BusinessRule(
                        "Error occured adding money to savings goal".to_string(),
                    ));
                }
            }
        }

        Ok(RoundUpOutcome {
            savings_goal_uid: goal.savings_goal_uid,
            balance,
        })
    }
}
