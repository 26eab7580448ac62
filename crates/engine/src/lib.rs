//! Round-up savings engine.
//!
//! Given a time window and an account currency, the engine finds the
//! matching bank account, sums the spare change left by its settled
//! spending, creates a savings goal at the upstream provider and funds it
//! with the computed amount. It is stateless between requests and reaches
//! the provider only through the traits in [`clients`].

use std::sync::Arc;

pub use accounts::Account;
pub use clients::{
    AccountDirectory, ClientFailure, ClientResult, CreatedGoal, SavingsGoalService,
    TransactionLedger, TransferReceipt,
};
pub use commands::{MAX_GOAL_NAME_CHARS, RoundUpCommand, SavingsGoalDraft};
pub use currency::Currency;
pub use error::EngineError;
pub use feed::{AssociatedRoundUp, Direction, FeedItem, round_up_total};
pub use money::Money;
pub use ops::RoundUpOutcome;

mod accounts;
pub mod clients;
mod commands;
mod currency;
mod error;
mod feed;
mod money;
mod ops;

type ResultEngine<T> = Result<T, EngineError>;

/// The round-up orchestrator.
///
/// Owns the three collaborators behind `Arc` so one engine can serve any
/// number of concurrent requests; each request runs a single forward
/// pipeline and shares no mutable state with the others.
#[derive(Clone)]
pub struct Engine {
    accounts: Arc<dyn AccountDirectory>,
    ledger: Arc<dyn TransactionLedger>,
    savings: Arc<dyn SavingsGoalService>,
}

impl Engine {
    pub fn new(
        accounts: Arc<dyn AccountDirectory>,
        ledger: Arc<dyn TransactionLedger>,
        savings: Arc<dyn SavingsGoalService>,
    ) -> Self {
        Self {
            accounts,
            ledger,
            savings,
        }
    }
}
