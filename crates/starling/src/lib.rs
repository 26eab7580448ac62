//! HTTP client for the Starling-style banking API.
//!
//! Implements the engine's collaborator traits over REST. Every provider
//! failure is logged here with whatever detail the provider returned and
//! surfaced to the engine as an opaque [`ClientFailure`]; callers of the
//! service never see provider error content.
//!
//! [`ClientFailure`]: engine::ClientFailure

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Url;
use thiserror::Error;
use uuid::Uuid;

use engine::{
    Account, AccountDirectory, ClientFailure, ClientResult, CreatedGoal, Currency, FeedItem,
    Money, SavingsGoalDraft, SavingsGoalService, TransactionLedger, TransferReceipt,
};

mod wire;

/// Client construction errors.
#[derive(Debug, Error)]
pub enum StarlingError {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
}

/// Authenticated client for one provider environment.
///
/// Not `Debug`: the bearer token must stay out of logs.
#[derive(Clone)]
pub struct Client {
    base_url: Url,
    token: String,
    http: reqwest::Client,
}

impl Client {
    /// `base_url` must point at the API root, e.g.
    /// `https://api-sandbox.starlingbank.com/api/v2/`.
    pub fn new(base_url: &str, token: impl Into<String>) -> Result<Self, StarlingError> {
        let base_url = Url::parse(base_url).map_err(|err| StarlingError::InvalidBaseUrl(err.to_string()))?;
        Ok(Self {
            base_url,
            token: token.into(),
            http: reqwest::Client::new(),
        })
    }

    fn endpoint(&self, path: &str) -> ClientResult<Url> {
        self.base_url.join(path).map_err(|err| {
            tracing::error!("invalid endpoint {path}: {err}");
            ClientFailure
        })
    }
}

/// Renders a timestamp in the provider's required fractional-second UTC
/// format, e.g. `2024-05-11T00:00:00.000Z`.
fn provider_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Best-effort provider error description, for logging only.
async fn error_detail(response: reqwest::Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) if !body.is_empty() => serde_json::from_str::<wire::ErrorEnvelope>(&body)
            .ok()
            .and_then(wire::ErrorEnvelope::first_message)
            .unwrap_or(body),
        _ => format!("status {status}"),
    }
}

#[async_trait]
impl AccountDirectory for Client {
    async fn accounts(&self) -> ClientResult<Vec<Account>> {
        let endpoint = self.endpoint("accounts")?;
        let response = self
            .http
            .get(endpoint)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|err| {
                tracing::error!("unable to get accounts: {err}");
                ClientFailure
            })?;

        if !response.status().is_success() {
            let detail = error_detail(response).await;
            tracing::error!("unable to get accounts: {detail}");
            return Err(ClientFailure);
        }

        let envelope = response
            .json::<wire::AccountsEnvelope>()
            .await
            .map_err(|err| {
                tracing::error!("unable to decode accounts response: {err}");
                ClientFailure
            })?;
        Ok(envelope.into_accounts())
    }
}

#[async_trait]
impl TransactionLedger for Client {
    async fn settled_transactions_between(
        &self,
        account_uid: Uuid,
        min_timestamp: DateTime<Utc>,
        max_timestamp: DateTime<Utc>,
    ) -> ClientResult<Vec<FeedItem>> {
        let endpoint =
            self.endpoint(&format!("feed/account/{account_uid}/settled-transactions-between"))?;
        let min = provider_timestamp(min_timestamp);
        let max = provider_timestamp(max_timestamp);
        let response = self
            .http
            .get(endpoint)
            .bearer_auth(&self.token)
            .query(&[
                ("minTransactionTimestamp", min.as_str()),
                ("maxTransactionTimestamp", max.as_str()),
            ])
            .send()
            .await
            .map_err(|err| {
                tracing::error!("unable to get settled transactions between {min} and {max}: {err}");
                ClientFailure
            })?;

        if !response.status().is_success() {
            let detail = error_detail(response).await;
            tracing::error!("unable to get settled transactions between {min} and {max}: {detail}");
            return Err(ClientFailure);
        }

        let envelope = response.json::<wire::FeedEnvelope>().await.map_err(|err| {
            tracing::error!("unable to decode settled transactions response: {err}");
            ClientFailure
        })?;
        Ok(envelope.into_feed_items())
    }
}

#[async_trait]
impl SavingsGoalService for Client {
    async fn create_goal(
        &self,
        account_uid: Uuid,
        draft: &SavingsGoalDraft,
        currency: Currency,
    ) -> ClientResult<CreatedGoal> {
        let endpoint = self.endpoint(&format!("account/{account_uid}/savings-goals"))?;
        let payload = wire::SavingsGoalRequest {
            name: draft.name.clone(),
            currency: currency.code().to_string(),
            target: draft
                .target_minor_units
                .map(|minor_units| wire::WireTarget { minor_units }),
            base64_encoded_photo: draft.base64_photo.clone(),
        };
        let response = self
            .http
            .put(endpoint)
            .bearer_auth(&self.token)
            .json(&payload)
            .send()
            .await
            .map_err(|err| {
                tracing::error!("unable to create savings goal: {err}");
                ClientFailure
            })?;

        if !response.status().is_success() {
            let detail = error_detail(response).await;
            tracing::error!("unable to create savings goal: {detail}");
            return Err(ClientFailure);
        }

        let created = response
            .json::<wire::CreateGoalResponse>()
            .await
            .map_err(|err| {
                tracing::error!("unable to decode savings goal response: {err}");
                ClientFailure
            })?;
        Ok(CreatedGoal {
            savings_goal_uid: created.savings_goal_uid,
            success: created.success,
        })
    }

    async fn transfer(
        &self,
        account_uid: Uuid,
        savings_goal_uid: Uuid,
        transfer_uid: Uuid,
        amount: Money,
    ) -> ClientResult<TransferReceipt> {
        let endpoint = self.endpoint(&format!(
            "account/{account_uid}/savings-goals/{savings_goal_uid}/add-money/{transfer_uid}"
        ))?;
        let payload = wire::TopUpRequest {
            amount: wire::WireAmount::of(amount),
        };
        let response = self
            .http
            .put(endpoint)
            .bearer_auth(&self.token)
            .json(&payload)
            .send()
            .await
            .map_err(|err| {
                tracing::error!("unable to add money to savings goal: {err}");
                ClientFailure
            })?;

        if !response.status().is_success() {
            let detail = error_detail(response).await;
            tracing::error!("unable to add money to savings goal: {detail}");
            return Err(ClientFailure);
        }

        let receipt = response
            .json::<wire::TransferResponse>()
            .await
            .map_err(|err| {
                tracing::error!("unable to decode transfer response: {err}");
                ClientFailure
            })?;
        Ok(TransferReceipt {
            transfer_uid: receipt.transfer_uid,
            success: receipt.success,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn provider_timestamp_has_fractional_seconds() {
        let midnight = Utc.with_ymd_and_hms(2024, 5, 11, 0, 0, 0).unwrap();
        assert_eq!(provider_timestamp(midnight), "2024-05-11T00:00:00.000Z");

        let with_millis = midnight + chrono::Duration::milliseconds(42);
        assert_eq!(provider_timestamp(with_millis), "2024-05-11T00:00:00.042Z");
    }

    #[test]
    fn relative_endpoints_extend_the_api_root() {
        let client = Client::new("https://api-sandbox.starlingbank.com/api/v2/", "token").unwrap();
        let endpoint = client.endpoint("accounts").unwrap();
        assert_eq!(
            endpoint.as_str(),
            "https://api-sandbox.starlingbank.com/api/v2/accounts"
        );
    }

    #[test]
    fn garbage_base_url_is_rejected() {
        assert!(Client::new("not a url", "token").is_err());
    }
}
