//! Auth Middleware
//!
//! Resolves the session cookie once per request and stores the resulting
//! `AuthContext` in the request extensions. Handlers pull it back out with
//! the `AuthContext` extractor.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::application::CheckSessionUseCase;
use crate::domain::entity::auth_context::AuthContext;
use crate::domain::repository::BankStore;
use crate::presentation::handlers::BankAppState;

/// Middleware that attaches an `AuthContext` to every request
///
/// Never rejects on its own: a missing or invalid cookie yields an anonymous
/// context and the handler decides. Only store failures short-circuit.
pub async fn resolve_auth_context<R>(
    State(state): State<BankAppState<R>>,
    mut req: Request,
    next: Next,
) -> Response
where
    R: BankStore,
{
    let token = state.config.session_cookie().read(req.headers());

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());
    match use_case.resolve(token.as_deref()).await {
        Ok(context) => {
            req.extensions_mut().insert(context);
            next.run(req).await
        }
        Err(e) => e.into_response(),
    }
}

impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .unwrap_or_default())
    }
}
