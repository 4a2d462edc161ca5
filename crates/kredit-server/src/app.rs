//! Router and shared service wiring.

use std::sync::Arc;

use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use kredit_auth::{AuthConfig, AuthService, CustomerDirectory};
use kredit_db::repository::{
    SurrealCustomerRepository, SurrealLimitRepository, SurrealTransactionRepository,
};
use kredit_lending::{AdmissionEngine, LimitLedger};
use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware::require_session;
use crate::routes;

type Customers = SurrealCustomerRepository<Any>;
type Limits = SurrealLimitRepository<Any>;
type Transactions = SurrealTransactionRepository<Any>;

/// Services shared by every handler. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<CustomerDirectory<Customers>>,
    pub auth: Arc<AuthService<Customers>>,
    pub ledger: Arc<LimitLedger<Limits, Customers>>,
    pub admission: Arc<AdmissionEngine<Limits, Transactions>>,
}

impl AppState {
    pub fn new(db: Surreal<Any>, auth: AuthConfig) -> Self {
        let customers = SurrealCustomerRepository::new(db.clone());
        let limits = SurrealLimitRepository::new(db.clone());
        let transactions = SurrealTransactionRepository::new(db);

        Self {
            directory: Arc::new(CustomerDirectory::new(customers.clone(), auth.clone())),
            auth: Arc::new(AuthService::new(customers.clone(), auth)),
            ledger: Arc::new(LimitLedger::new(limits.clone(), customers)),
            admission: Arc::new(AdmissionEngine::new(limits, transactions)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/fund/limit", post(routes::fund::create_limit))
        .route("/fund/transaction", post(routes::fund::create_transaction))
        .route_layer(from_fn_with_state(state.clone(), require_session));

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/auth/register", post(routes::auth::register))
        .route("/auth/login", post(routes::auth::login))
        .merge(protected)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
