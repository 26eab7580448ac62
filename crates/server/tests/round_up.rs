use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::{DateTime, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use engine::{
    Account, AccountDirectory, ClientFailure, ClientResult, CreatedGoal, Currency, Direction,
    Engine, FeedItem, Money, SavingsGoalDraft, SavingsGoalService, TransactionLedger,
    TransferReceipt,
};
use server::{ServerState, router};

struct FakeDirectory(ClientResult<Vec<Account>>);

#[async_trait]
impl AccountDirectory for FakeDirectory {
    async fn accounts(&self) -> ClientResult<Vec<Account>> {
        self.0.clone()
    }
}

struct FakeLedger(Vec<FeedItem>);

#[async_trait]
impl TransactionLedger for FakeLedger {
    async fn settled_transactions_between(
        &self,
        _account_uid: Uuid,
        _min_timestamp: DateTime<Utc>,
        _max_timestamp: DateTime<Utc>,
    ) -> ClientResult<Vec<FeedItem>> {
        Ok(self.0.clone())
    }
}

struct FakeSavings {
    goal_uid: Uuid,
    create_success: bool,
}

#[async_trait]
impl SavingsGoalService for FakeSavings {
    async fn create_goal(
        &self,
        _account_uid: Uuid,
        _draft: &SavingsGoalDraft,
        _currency: Currency,
    ) -> ClientResult<CreatedGoal> {
        Ok(CreatedGoal {
            savings_goal_uid: self.goal_uid,
            success: self.create_success,
        })
    }

    async fn transfer(
        &self,
        _account_uid: Uuid,
        _savings_goal_uid: Uuid,
        transfer_uid: Uuid,
        _amount: Money,
    ) -> ClientResult<TransferReceipt> {
        Ok(TransferReceipt {
            transfer_uid,
            success: true,
        })
    }
}

fn gbp_account() -> Account {
    Account {
        account_uid: Uuid::new_v4(),
        default_category: Uuid::new_v4(),
        currency: Currency::Gbp,
    }
}

fn out_item(category_uid: Uuid, minor_units: i64) -> FeedItem {
    FeedItem {
        feed_item_uid: Uuid::new_v4(),
        category_uid,
        amount: Money::new(Currency::Gbp, minor_units),
        direction: Direction::Out,
        round_up: None,
    }
}

fn app(accounts: ClientResult<Vec<Account>>, feed: Vec<FeedItem>, goal_uid: Uuid) -> axum::Router {
    let engine = Engine::new(
        Arc::new(FakeDirectory(accounts)),
        Arc::new(FakeLedger(feed)),
        Arc::new(FakeSavings {
            goal_uid,
            create_success: true,
        }),
    );
    router(ServerState { engine })
}

fn round_up_request(query: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/account/accounts/feed/round-up?{query}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

const WINDOW: &str = "minTransactionTimestamp=2024-05-01T00:00:00Z\
                      &maxTransactionTimestamp=2024-05-11T00:00:00Z";

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn round_up_returns_goal_and_balance() {
    let account = gbp_account();
    let goal_uid = Uuid::new_v4();
    let feed = vec![
        out_item(account.default_category, 250),
        out_item(account.default_category, 375),
        out_item(account.default_category, 399),
    ];
    let app = app(Ok(vec![account]), feed, goal_uid);

    let response = app
        .oneshot(round_up_request(
            &format!("{WINDOW}&accountCurrency=GBP"),
            r#"{"name": "Holiday"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["savingsGoalUid"], goal_uid.to_string());
    assert_eq!(body["balance"]["currency"], "GBP");
    assert_eq!(body["balance"]["minorUnits"], 76);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn inverted_window_is_400_with_message() {
    let app = app(Ok(vec![gbp_account()]), vec![], Uuid::new_v4());

    let response = app
        .oneshot(round_up_request(
            "minTransactionTimestamp=2024-05-11T00:00:00Z\
             &maxTransactionTimestamp=2024-05-01T00:00:00Z\
             &accountCurrency=GBP",
            r#"{"name": "Holiday"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["errors"][0]["message"],
        "Min timestamp must be before max timestamp"
    );
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn missing_currency_account_is_400_with_message() {
    let eur_account = Account {
        currency: Currency::Eur,
        ..gbp_account()
    };
    let app = app(Ok(vec![eur_account]), vec![], Uuid::new_v4());

    let response = app
        .oneshot(round_up_request(
            &format!("{WINDOW}&accountCurrency=GBP"),
            r#"{"name": "Holiday"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["errors"][0]["message"],
        "Account with currency type: GBP not found"
    );
}

#[tokio::test]
async fn directory_failure_is_500_problem_detail() {
    let app = app(Err(ClientFailure), vec![], Uuid::new_v4());

    let response = app
        .oneshot(round_up_request(
            &format!("{WINDOW}&accountCurrency=GBP"),
            r#"{"name": "Holiday"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["status"], 500);
    assert_eq!(body["title"], "Internal Server Error");
    assert_eq!(body["detail"], "Error occured getting accounts");
}

#[tokio::test]
async fn goal_creation_failure_is_500_problem_detail() {
    let account = gbp_account();
    let engine = Engine::new(
        Arc::new(FakeDirectory(Ok(vec![account]))),
        Arc::new(FakeLedger(vec![out_item(account.default_category, 399)])),
        Arc::new(FakeSavings {
            goal_uid: Uuid::new_v4(),
            create_success: false,
        }),
    );
    let app = router(ServerState { engine });

    let response = app
        .oneshot(round_up_request(
            &format!("{WINDOW}&accountCurrency=GBP"),
            r#"{"name": "Holiday"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["detail"], "Error occured creating savings goal");
}

#[tokio::test]
async fn empty_feed_reports_zero_balance() {
    let goal_uid = Uuid::new_v4();
    let app = app(Ok(vec![gbp_account()]), vec![], goal_uid);

    let response = app
        .oneshot(round_up_request(
            &format!("{WINDOW}&accountCurrency=GBP"),
            r#"{"name": "Holiday"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["savingsGoalUid"], goal_uid.to_string());
    assert_eq!(body["balance"]["minorUnits"], 0);
}
