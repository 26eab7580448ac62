//! Round-up API endpoint

use axum::{
    Json,
    extract::{Query, State},
};

use api_types::CurrencyAndAmount;
use api_types::round_up::{RoundUpParams, RoundUpResponse, SavingsGoalBody};
use engine::{RoundUpCommand, SavingsGoalDraft};

use crate::{ServerError, server::ServerState};

fn currency_from_api(currency: api_types::Currency) -> engine::Currency {
    match currency {
        api_types::Currency::Gbp => engine::Currency::Gbp,
        api_types::Currency::Eur => engine::Currency::Eur,
    }
}

fn currency_to_api(currency: engine::Currency) -> api_types::Currency {
    match currency {
        engine::Currency::Gbp => api_types::Currency::Gbp,
        engine::Currency::Eur => api_types::Currency::Eur,
    }
}

/// Handle requests for computing and transferring a round-up
pub async fn round_up_between(
    State(state): State<ServerState>,
    Query(params): Query<RoundUpParams>,
    Json(goal): Json<SavingsGoalBody>,
) -> Result<Json<RoundUpResponse>, ServerError> {
    let command = RoundUpCommand {
        min_timestamp: params.min_transaction_timestamp,
        max_timestamp: params.max_transaction_timestamp,
        currency: currency_from_api(params.account_currency),
        goal: SavingsGoalDraft {
            name: goal.name,
            target_minor_units: goal.target.map(|target| target.minor_units),
            base64_photo: goal.base64_encoded_photo,
        },
    };

    let outcome = state.engine.round_up_between(command).await?;

    Ok(Json(RoundUpResponse {
        savings_goal_uid: outcome.savings_goal_uid,
        balance: CurrencyAndAmount {
            currency: currency_to_api(outcome.balance.currency),
            minor_units: outcome.balance.minor_units,
        },
        success: true,
    }))
}
