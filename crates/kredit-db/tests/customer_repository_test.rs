//! Integration tests for the Customer repository using in-memory SurrealDB.

use kredit_core::error::KreditError;
use kredit_core::models::customer::CreateCustomer;
use kredit_core::repository::CustomerRepository;
use kredit_db::repository::SurrealCustomerRepository;
use rust_decimal_macros::dec;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};

async fn setup() -> SurrealCustomerRepository<Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    kredit_db::run_migrations(&db).await.unwrap();
    SurrealCustomerRepository::new(db)
}

fn customer(nik: &str) -> CreateCustomer {
    CreateCustomer {
        nik: nik.into(),
        password_hash: "$argon2id$v=19$m=8,t=1,p=1$c2FsdA$aGFzaA".into(),
        full_name: "Alif Coba".into(),
        legal_name: "Alif Coba".into(),
        birth_place: "Bandung".into(),
        birth_date: "1995-01-01".into(),
        salary: dec!(7500000.50),
        ktp_photo: Some("bm9uY2VjaXBoZXJ0ZXh0".into()),
        selfie_photo: None,
    }
}

#[tokio::test]
async fn create_and_get_customer() {
    let repo = setup().await;

    let created = repo.create(customer("182381283182")).await.unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.nik, "182381283182");

    let by_nik = repo
        .get_by_nik("182381283182")
        .await
        .unwrap()
        .expect("customer should be found by NIK");
    assert_eq!(by_nik.id, created.id);
    assert_eq!(by_nik.full_name, "Alif Coba");
    assert_eq!(by_nik.salary, dec!(7500000.50));
    assert_eq!(by_nik.ktp_photo.as_deref(), Some("bm9uY2VjaXBoZXJ0ZXh0"));
    assert_eq!(by_nik.selfie_photo, None);
    assert!(!by_nik.password_hash.is_empty());

    let by_id = repo
        .get_by_id(created.id)
        .await
        .unwrap()
        .expect("customer should be found by id");
    assert_eq!(by_id.nik, "182381283182");
}

#[tokio::test]
async fn missing_customer_is_none_not_error() {
    let repo = setup().await;

    assert!(repo.get_by_nik("000000000000").await.unwrap().is_none());
    assert!(repo.get_by_id(42).await.unwrap().is_none());
}

#[tokio::test]
async fn ids_are_assigned_by_the_store() {
    let repo = setup().await;

    let first = repo.create(customer("1000")).await.unwrap();
    let second = repo.create(customer("2000")).await.unwrap();
    let third = repo.create(customer("3000")).await.unwrap();

    assert_eq!((first.id, second.id, third.id), (1, 2, 3));
}

#[tokio::test]
async fn duplicate_nik_is_rejected_by_the_index() {
    let repo = setup().await;

    repo.create(customer("182381283182")).await.unwrap();
    let err = repo.create(customer("182381283182")).await.unwrap_err();

    assert!(
        matches!(err, KreditError::AlreadyExists { ref entity } if entity == "customer"),
        "unexpected error: {err}"
    );
}
