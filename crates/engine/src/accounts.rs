//! Account primitives.
//!
//! An `Account` is read-only data sourced fresh from the directory
//! collaborator on every request; the engine never caches it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Currency;

/// A bank account as listed by the account directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub account_uid: Uuid,
    /// Category of the primary spending feed; excludes savings "spaces"
    /// attached to the same holder.
    pub default_category: Uuid,
    pub currency: Currency,
}

/// Picks the first account held in `currency`.
pub(crate) fn first_with_currency(accounts: Vec<Account>, currency: Currency) -> Option<Account> {
    accounts
        .into_iter()
        .find(|account| account.currency == currency)
}
