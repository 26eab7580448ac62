//! Settled feed items and the round-up calculation over them.
//!
//! `round_up_total` is the only arithmetic in the pipeline: a pure,
//! order-independent fold that computes how much spare change the given
//! spending leaves on the table.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Money;

/// Direction of a settled feed item, from the account holder's view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    In,
    Out,
}

/// Marker on a feed item that has already funded a round-up.
///
/// The provider tags the item with the goal category it was swept into; the
/// engine only cares that the marker exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociatedRoundUp {
    pub goal_category_uid: Uuid,
}

/// A settled (non-pending) ledger entry for an account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub feed_item_uid: Uuid,
    pub category_uid: Uuid,
    pub amount: Money,
    pub direction: Direction,
    pub round_up: Option<AssociatedRoundUp>,
}

impl FeedItem {
    /// Spare change this item contributes to a round-up.
    ///
    /// Inbound items and items already swept by a previous round-up
    /// contribute nothing; an exact-pound spend contributes nothing.
    #[must_use]
    pub fn round_up_contribution(&self) -> i64 {
        if self.direction != Direction::Out || self.round_up.is_some() {
            return 0;
        }
        let remainder = self.amount.minor_units % 100;
        if remainder == 0 { 0 } else { 100 - remainder }
    }
}

/// Sums the round-up contributions of `items` in minor units.
///
/// Commutative and associative over the input, so the result does not depend
/// on feed ordering. Provider amounts are non-negative minor-unit integers,
/// which keeps the `i64` accumulator monotonically non-decreasing.
#[must_use]
pub fn round_up_total(items: &[FeedItem]) -> i64 {
    items
        .iter()
        .map(FeedItem::round_up_contribution)
        .sum()
}
