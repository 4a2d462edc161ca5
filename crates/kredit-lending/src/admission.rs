//! Transaction admission.
//!
//! A proposed transaction is admitted when its installment amount does
//! not exceed the customer's threshold for the declared tenor. Each
//! admission is judged on its own; previously admitted transactions
//! are never summed against the limit.

use kredit_core::error::{KreditError, KreditResult};
use kredit_core::models::limit::Limit;
use kredit_core::models::transaction::{CreateTransaction, Transaction};
use kredit_core::repository::{LimitRepository, TransactionRepository};
use kredit_core::tenor::Tenor;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{info, warn};

/// Outcome of checking one installment against a limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Admit,
    Reject(Rejection),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("tenor {0} is not a recognised tenor class")]
    UnknownTenor(i64),

    #[error("installment {installment} exceeds the {tenor} threshold of {threshold}")]
    ExceedsThreshold {
        tenor: Tenor,
        threshold: Decimal,
        installment: Decimal,
    },
}

/// Decide whether `installment` fits under the threshold for `tenor`.
///
/// Equality is admitted.
pub fn evaluate(limit: &Limit, tenor: i64, installment: Decimal) -> Decision {
    let Some(class) = Tenor::from_class(tenor) else {
        return Decision::Reject(Rejection::UnknownTenor(tenor));
    };

    let threshold = limit.threshold(class);
    if installment <= threshold {
        Decision::Admit
    } else {
        Decision::Reject(Rejection::ExceedsThreshold {
            tenor: class,
            threshold,
            installment,
        })
    }
}

/// Runs a proposed transaction through validation, limit resolution,
/// the threshold decision and persistence. Every stage failure is
/// terminal for the attempt.
pub struct AdmissionEngine<L: LimitRepository, T: TransactionRepository> {
    limits: L,
    transactions: T,
}

impl<L: LimitRepository, T: TransactionRepository> AdmissionEngine<L, T> {
    pub fn new(limits: L, transactions: T) -> Self {
        Self {
            limits,
            transactions,
        }
    }

    pub async fn admit(&self, input: CreateTransaction) -> KreditResult<Transaction> {
        validate(&input)?;

        let Some(limit) = self.limits.get_by_customer_id(input.customer_id).await? else {
            warn!(customer_id = input.customer_id, "admission rejected: no limit on file");
            return Err(KreditError::not_found("customer limit", input.customer_id));
        };

        if let Decision::Reject(rejection) =
            evaluate(&limit, input.tenor, input.installment_amount)
        {
            warn!(
                customer_id = input.customer_id,
                tenor = input.tenor,
                reason = %rejection,
                "admission rejected"
            );
            return Err(KreditError::LimitExceeded {
                reason: rejection.to_string(),
            });
        }

        let transaction = self.transactions.create(input).await?;
        info!(
            transaction_id = transaction.id,
            customer_id = transaction.customer_id,
            tenor = transaction.tenor,
            "transaction admitted"
        );
        Ok(transaction)
    }
}

/// Amounts must be non-negative. The customer id is not checked here:
/// an id with no limit on file resolves to `NotFound` like any other.
fn validate(input: &CreateTransaction) -> KreditResult<()> {
    let amounts = [
        ("otr", input.otr),
        ("admin_fee", input.admin_fee),
        ("installment_amount", input.installment_amount),
        ("interest_amount", input.interest_amount),
    ];
    for (field, amount) in amounts {
        if amount < Decimal::ZERO {
            return Err(KreditError::validation(format!(
                "{field} must not be negative"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kredit_core::models::limit::CreateLimit;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    fn limit() -> Limit {
        Limit {
            id: 1,
            customer_id: 1,
            tenor_1: dec!(500000),
            tenor_2: dec!(700000),
            tenor_3: dec!(900000),
            tenor_4: dec!(1100000),
        }
    }

    fn proposal(customer_id: i64, tenor: i64, installment: Decimal) -> CreateTransaction {
        CreateTransaction {
            customer_id,
            contract_number: "KTR-001".into(),
            otr: dec!(15000000),
            admin_fee: dec!(250000),
            installment_amount: installment,
            interest_amount: dec!(50000),
            asset_name: "Motor".into(),
            tenor,
        }
    }

    #[derive(Default)]
    struct FakeLimits(Vec<Limit>);

    impl LimitRepository for FakeLimits {
        async fn create(&self, _input: CreateLimit) -> KreditResult<Limit> {
            Err(KreditError::Internal("not used".into()))
        }

        async fn get_by_customer_id(&self, customer_id: i64) -> KreditResult<Option<Limit>> {
            Ok(self.0.iter().find(|l| l.customer_id == customer_id).cloned())
        }
    }

    struct BrokenLimits;

    impl LimitRepository for BrokenLimits {
        async fn create(&self, _input: CreateLimit) -> KreditResult<Limit> {
            Err(KreditError::Database("connection reset".into()))
        }

        async fn get_by_customer_id(&self, _customer_id: i64) -> KreditResult<Option<Limit>> {
            Err(KreditError::Database("connection reset".into()))
        }
    }

    #[derive(Default)]
    struct FakeTransactions(Mutex<Vec<Transaction>>);

    impl TransactionRepository for FakeTransactions {
        async fn create(&self, input: CreateTransaction) -> KreditResult<Transaction> {
            let mut stored = self.0.lock().unwrap();
            let tx = input.into_transaction(stored.len() as i64 + 1);
            stored.push(tx.clone());
            Ok(tx)
        }
    }

    fn engine() -> AdmissionEngine<FakeLimits, FakeTransactions> {
        AdmissionEngine::new(FakeLimits(vec![limit()]), FakeTransactions::default())
    }

    #[test]
    fn decision_table_picks_threshold_by_tenor() {
        let l = limit();
        assert_eq!(evaluate(&l, 1, dec!(500000)), Decision::Admit);
        assert_eq!(evaluate(&l, 2, dec!(700000)), Decision::Admit);
        assert_eq!(evaluate(&l, 3, dec!(900000)), Decision::Admit);
        assert_eq!(evaluate(&l, 4, dec!(1100000)), Decision::Admit);
        assert_eq!(
            evaluate(&l, 1, dec!(500000.01)),
            Decision::Reject(Rejection::ExceedsThreshold {
                tenor: Tenor::One,
                threshold: dec!(500000),
                installment: dec!(500000.01),
            })
        );
    }

    #[test]
    fn unknown_tenor_is_rejected() {
        let l = limit();
        for tenor in [0, 5, -1, 12] {
            assert_eq!(
                evaluate(&l, tenor, Decimal::ZERO),
                Decision::Reject(Rejection::UnknownTenor(tenor))
            );
        }
    }

    #[tokio::test]
    async fn admitted_transaction_is_persisted() {
        let engine = engine();
        let tx = engine.admit(proposal(1, 1, dec!(300000))).await.unwrap();
        assert_eq!(tx.id, 1);
        assert_eq!(tx.installment_amount, dec!(300000));
        assert_eq!(engine.transactions.0.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn over_threshold_is_limit_exceeded_and_not_persisted() {
        let engine = engine();
        let err = engine.admit(proposal(1, 1, dec!(600000))).await.unwrap_err();
        assert!(matches!(err, KreditError::LimitExceeded { .. }));
        assert!(engine.transactions.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn out_of_range_tenor_is_limit_exceeded() {
        let err = engine().admit(proposal(1, 7, dec!(1))).await.unwrap_err();
        assert!(matches!(err, KreditError::LimitExceeded { .. }));
    }

    #[tokio::test]
    async fn missing_limit_is_not_found() {
        let err = engine().admit(proposal(2, 1, dec!(1))).await.unwrap_err();
        assert!(matches!(err, KreditError::NotFound { ref entity, .. } if entity == "customer limit"));
    }

    #[tokio::test]
    async fn malformed_proposal_fails_before_lookup() {
        let engine = AdmissionEngine::new(BrokenLimits, FakeTransactions::default());

        let negative = CreateTransaction {
            otr: dec!(-1),
            ..proposal(1, 1, dec!(1))
        };
        assert!(matches!(
            engine.admit(negative).await.unwrap_err(),
            KreditError::Validation { .. }
        ));
    }

    #[tokio::test]
    async fn unknown_customer_ids_are_not_found() {
        let engine = engine();
        for customer_id in [0, -1, 2, i64::MAX] {
            let err = engine
                .admit(proposal(customer_id, 1, dec!(1)))
                .await
                .unwrap_err();
            assert!(
                matches!(err, KreditError::NotFound { .. }),
                "customer {customer_id}: {err}"
            );
        }
    }

    #[tokio::test]
    async fn lookup_failure_surfaces_as_storage_error() {
        let engine = AdmissionEngine::new(BrokenLimits, FakeTransactions::default());
        let err = engine.admit(proposal(1, 1, dec!(1))).await.unwrap_err();
        assert!(matches!(err, KreditError::Database(_)));
    }

    #[tokio::test]
    async fn admissions_are_not_cumulative() {
        let engine = engine();
        for _ in 0..3 {
            engine.admit(proposal(1, 1, dec!(400000))).await.unwrap();
        }
        assert_eq!(engine.transactions.0.lock().unwrap().len(), 3);
    }

    fn amount() -> impl Strategy<Value = Decimal> {
        (0i64..200_000_000).prop_map(|cents| Decimal::new(cents, 2))
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Admission holds exactly when the installment is at most the
        /// threshold for a valid tenor.
        #[test]
        fn admits_iff_within_threshold(
            tenor in 1i64..=4,
            installment in amount(),
            thresholds in prop::array::uniform4(amount()),
        ) {
            let l = Limit {
                id: 1,
                customer_id: 1,
                tenor_1: thresholds[0],
                tenor_2: thresholds[1],
                tenor_3: thresholds[2],
                tenor_4: thresholds[3],
            };
            let threshold = thresholds[(tenor - 1) as usize];
            let admitted = evaluate(&l, tenor, installment) == Decision::Admit;
            prop_assert_eq!(admitted, installment <= threshold);
        }

        #[test]
        fn threshold_itself_is_admitted(tenor in 1i64..=4, threshold in amount()) {
            let l = Limit {
                id: 1,
                customer_id: 1,
                tenor_1: threshold,
                tenor_2: threshold,
                tenor_3: threshold,
                tenor_4: threshold,
            };
            prop_assert_eq!(evaluate(&l, tenor, threshold), Decision::Admit);
        }

        #[test]
        fn admission_without_limit_is_always_not_found(
            customer_id in any::<i64>().prop_filter("no limit on file", |id| *id != 1),
            tenor in any::<i64>(),
            installment in amount(),
        ) {
            let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let err = rt
                .block_on(engine().admit(proposal(customer_id, tenor, installment)))
                .unwrap_err();
            let is_not_found = matches!(err, KreditError::NotFound { .. });
            prop_assert!(is_not_found);
        }

        #[test]
        fn out_of_range_tenor_always_rejects(
            tenor in any::<i64>().prop_filter("outside 1..=4", |t| !(1..=4).contains(t)),
            installment in amount(),
        ) {
            prop_assert_eq!(
                evaluate(&limit(), tenor, installment),
                Decision::Reject(Rejection::UnknownTenor(tenor))
            );
        }
    }
}
