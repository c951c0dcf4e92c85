//! Bank Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::BankConfig;
use crate::domain::repository::BankStore;
use crate::presentation::handlers::{self, BankAppState};
use crate::presentation::middleware::resolve_auth_context;

/// Create the bank router for any store implementation
///
/// Paths are relative; the server nests this under `/api`.
pub fn bank_router<R>(repo: R, config: BankConfig) -> Router
where
    R: BankStore,
{
    let state = BankAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/auth/login", post(handlers::login::<R>))
        .route("/auth/logout", post(handlers::logout::<R>))
        .route("/auth/session", get(handlers::session_status))
        .route("/dashboard", get(handlers::dashboard::<R>))
        .route("/admin/dashboard", get(handlers::admin_dashboard::<R>))
        .route(
            "/admin/admins",
            get(handlers::list_admins::<R>).post(handlers::create_admin::<R>),
        )
        .route(
            "/admin/admins/{id}",
            get(handlers::get_admin::<R>)
                .put(handlers::update_admin::<R>)
                .delete(handlers::delete_admin::<R>),
        )
        .route(
            "/admin/customers",
            get(handlers::list_customers::<R>).post(handlers::create_customer::<R>),
        )
        .route(
            "/admin/customers/{id}",
            get(handlers::get_customer::<R>)
                .put(handlers::update_customer::<R>)
                .delete(handlers::delete_customer::<R>),
        )
        .route("/customer/dashboard", get(handlers::customer_dashboard::<R>))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            resolve_auth_context::<R>,
        ))
        .with_state(state)
}
