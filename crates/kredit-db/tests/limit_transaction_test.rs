//! Integration tests for the Limit and Transaction repositories using
//! in-memory SurrealDB.

use kredit_core::models::limit::CreateLimit;
use kredit_core::models::transaction::CreateTransaction;
use kredit_core::repository::{LimitRepository, TransactionRepository};
use kredit_db::repository::{SurrealLimitRepository, SurrealTransactionRepository};
use rust_decimal_macros::dec;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};

async fn setup() -> Surreal<Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    kredit_db::run_migrations(&db).await.unwrap();
    db
}

fn limit(customer_id: i64, base: rust_decimal::Decimal) -> CreateLimit {
    CreateLimit {
        customer_id,
        tenor_1: base,
        tenor_2: base + dec!(200000),
        tenor_3: base + dec!(400000),
        tenor_4: base + dec!(600000),
    }
}

#[tokio::test]
async fn create_and_get_limit() {
    let repo = SurrealLimitRepository::new(setup().await);

    let created = repo.create(limit(1, dec!(500000))).await.unwrap();
    assert_eq!(created.customer_id, 1);

    let fetched = repo
        .get_by_customer_id(1)
        .await
        .unwrap()
        .expect("limit should exist");
    assert_eq!(fetched, created);
    assert_eq!(fetched.tenor_4, dec!(1100000));
}

#[tokio::test]
async fn missing_limit_is_none() {
    let repo = SurrealLimitRepository::new(setup().await);
    assert!(repo.get_by_customer_id(2).await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_limits_resolve_to_the_earliest() {
    let repo = SurrealLimitRepository::new(setup().await);

    let first = repo.create(limit(1, dec!(500000))).await.unwrap();
    let second = repo.create(limit(1, dec!(100))).await.unwrap();
    assert!(second.id > first.id);

    let fetched = repo.get_by_customer_id(1).await.unwrap().unwrap();
    assert_eq!(fetched.id, first.id);
    assert_eq!(fetched.tenor_1, dec!(500000));
}

#[tokio::test]
async fn negative_threshold_is_rejected_by_schema() {
    let repo = SurrealLimitRepository::new(setup().await);
    assert!(repo.create(limit(1, dec!(-1))).await.is_err());
}

#[tokio::test]
async fn transactions_are_appended_with_store_ids() {
    let repo = SurrealTransactionRepository::new(setup().await);

    let input = CreateTransaction {
        customer_id: 1,
        contract_number: "KTR-0001".into(),
        otr: dec!(15000000),
        admin_fee: dec!(250000),
        installment_amount: dec!(300000),
        interest_amount: dec!(45000),
        asset_name: "Honda Beat".into(),
        tenor: 1,
    };

    let first = repo.create(input.clone()).await.unwrap();
    let second = repo.create(input).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(first.contract_number, "KTR-0001");
    assert_eq!(first.installment_amount, dec!(300000));
}

#[tokio::test]
async fn thresholds_keep_full_decimal_precision() {
    let repo = SurrealLimitRepository::new(setup().await);

    let precise = CreateLimit {
        customer_id: 1,
        tenor_1: dec!(12345678901234567.89),
        tenor_2: dec!(0.000000000000000001),
        tenor_3: dec!(900000),
        tenor_4: dec!(1100000.10),
    };
    repo.create(precise.clone()).await.unwrap();

    let fetched = repo.get_by_customer_id(1).await.unwrap().unwrap();
    assert_eq!(fetched.tenor_1, precise.tenor_1);
    assert_eq!(fetched.tenor_2, precise.tenor_2);
    assert_eq!(fetched.tenor_4, precise.tenor_4);
}

#[tokio::test]
async fn transaction_amounts_are_stored_exactly() {
    let db = setup().await;
    let repo = SurrealTransactionRepository::new(db.clone());

    repo.create(CreateTransaction {
        customer_id: 1,
        contract_number: "KTR-0002".into(),
        otr: dec!(98765432109876543.21),
        admin_fee: dec!(0),
        installment_amount: dec!(300000.01),
        interest_amount: dec!(0),
        asset_name: "Rumah".into(),
        tenor: 4,
    })
    .await
    .unwrap();

    let mut result = db
        .query("SELECT otr, installment_amount FROM loan_transaction")
        .await
        .unwrap();
    let otr: Option<String> = result.take((0, "otr")).unwrap();
    let installment: Option<String> = result.take((0, "installment_amount")).unwrap();
    assert_eq!(otr.as_deref(), Some("98765432109876543.21"));
    assert_eq!(installment.as_deref(), Some("300000.01"));
}
