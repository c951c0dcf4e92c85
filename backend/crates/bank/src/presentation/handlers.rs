//! HTTP Handlers
//!
//! Every handler receives the request's `AuthContext` and checks the role it
//! needs before touching a use case.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::BankConfig;
use crate::application::{
    AdminAccountsUseCase, CreateAdminInput, CreateCustomerInput, CustomerAccountsUseCase,
    DashboardUseCase, SignInInput, SignInUseCase, SignOutUseCase, UpdateAdminInput,
    UpdateCustomerInput,
};
use crate::domain::entity::auth_context::AuthContext;
use crate::domain::repository::BankStore;
use crate::domain::value_object::{AdminId, CustomerId, role::Role};
use crate::error::BankResult;
use crate::presentation::dto::{
    AdminResponse, CreateAdminRequest, CreateCustomerRequest, CustomerResponse,
    DashboardResponse, SessionStatusResponse, SignInRequest, SignInResponse, UpdateAdminRequest,
    UpdateCustomerRequest,
};

/// Shared state for bank handlers
#[derive(Clone)]
pub struct BankAppState<R>
where
    R: BankStore,
{
    pub repo: Arc<R>,
    pub config: Arc<BankConfig>,
}

impl<R> BankAppState<R>
where
    R: BankStore,
{
    fn admins(&self) -> AdminAccountsUseCase<R, R> {
        AdminAccountsUseCase::new(self.repo.clone(), self.repo.clone(), self.config.clone())
    }

    fn customers(&self) -> CustomerAccountsUseCase<R, R> {
        CustomerAccountsUseCase::new(self.repo.clone(), self.repo.clone(), self.config.clone())
    }

    fn dashboards(&self) -> DashboardUseCase<R, R> {
        DashboardUseCase::new(self.repo.clone(), self.repo.clone())
    }
}

// ============================================================================
// Auth
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<BankAppState<R>>,
    Json(req): Json<SignInRequest>,
) -> BankResult<impl IntoResponse>
where
    R: BankStore,
{
    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(SignInInput {
            identifier: req.identifier,
            password: req.password,
        })
        .await?;

    let cookie = state.config.session_cookie().issue(&output.session_token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(SignInResponse {
            identity: output.identity,
            expires_at_ms: output.expires_at_ms,
        }),
    ))
}

/// POST /api/auth/logout
pub async fn logout<R>(State(state): State<BankAppState<R>>, headers: HeaderMap) -> impl IntoResponse
where
    R: BankStore,
{
    let session_cookie = state.config.session_cookie();
    let token = session_cookie.read(&headers);

    let use_case = SignOutUseCase::new(state.repo.clone(), state.config.clone());
    // The cookie is cleared regardless
    if let Err(e) = use_case.execute(token.as_deref()).await {
        tracing::warn!(error = %e, "Failed to delete session on logout");
    }

    let cookie = session_cookie.clear();

    (StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)])
}

/// GET /api/auth/session
pub async fn session_status(auth: AuthContext) -> Json<SessionStatusResponse> {
    Json(SessionStatusResponse::from(auth.identity()))
}

// ============================================================================
// Dashboards
// ============================================================================

/// GET /api/dashboard
pub async fn dashboard<R>(
    State(state): State<BankAppState<R>>,
    auth: AuthContext,
) -> BankResult<Json<DashboardResponse>>
where
    R: BankStore,
{
    let identity = auth.require_session()?;

    let response = match identity.role {
        Role::Admin => DashboardResponse::Admin(state.dashboards().admin_dashboard().await?),
        Role::Customer => {
            let customer = state.dashboards().customer_dashboard(identity).await?;
            DashboardResponse::Customer(CustomerResponse::from(&customer))
        }
    };

    Ok(Json(response))
}

/// GET /api/admin/dashboard
pub async fn admin_dashboard<R>(
    State(state): State<BankAppState<R>>,
    auth: AuthContext,
) -> BankResult<impl IntoResponse>
where
    R: BankStore,
{
    auth.require_admin()?;
    Ok(Json(state.dashboards().admin_dashboard().await?))
}

/// GET /api/customer/dashboard
pub async fn customer_dashboard<R>(
    State(state): State<BankAppState<R>>,
    auth: AuthContext,
) -> BankResult<Json<CustomerResponse>>
where
    R: BankStore,
{
    let identity = auth.require_customer()?;
    let customer = state.dashboards().customer_dashboard(identity).await?;
    Ok(Json(CustomerResponse::from(&customer)))
}

// ============================================================================
// Administrators
// ============================================================================

/// GET /api/admin/admins
pub async fn list_admins<R>(
    State(state): State<BankAppState<R>>,
    auth: AuthContext,
) -> BankResult<Json<Vec<AdminResponse>>>
where
    R: BankStore,
{
    auth.require_admin()?;
    let admins = state.admins().list().await?;
    Ok(Json(admins.iter().map(AdminResponse::from).collect()))
}

/// POST /api/admin/admins
pub async fn create_admin<R>(
    State(state): State<BankAppState<R>>,
    auth: AuthContext,
    Json(req): Json<CreateAdminRequest>,
) -> BankResult<impl IntoResponse>
where
    R: BankStore,
{
    auth.require_admin()?;

    let admin = state
        .admins()
        .create(CreateAdminInput {
            username: req.username,
            email: req.email,
            password: req.password,
            confirm_password: req.confirm_password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(AdminResponse::from(&admin))))
}

/// GET /api/admin/admins/{id}
pub async fn get_admin<R>(
    State(state): State<BankAppState<R>>,
    auth: AuthContext,
    Path(id): Path<i64>,
) -> BankResult<Json<AdminResponse>>
where
    R: BankStore,
{
    auth.require_admin()?;
    let admin = state.admins().get(AdminId::from_i64(id)).await?;
    Ok(Json(AdminResponse::from(&admin)))
}

/// PUT /api/admin/admins/{id}
pub async fn update_admin<R>(
    State(state): State<BankAppState<R>>,
    auth: AuthContext,
    Path(id): Path<i64>,
    Json(req): Json<UpdateAdminRequest>,
) -> BankResult<Json<AdminResponse>>
where
    R: BankStore,
{
    auth.require_admin()?;

    let admin = state
        .admins()
        .update(
            AdminId::from_i64(id),
            UpdateAdminInput {
                username: req.username,
                email: req.email,
                password: req.password,
            },
        )
        .await?;

    Ok(Json(AdminResponse::from(&admin)))
}

/// DELETE /api/admin/admins/{id}
pub async fn delete_admin<R>(
    State(state): State<BankAppState<R>>,
    auth: AuthContext,
    Path(id): Path<i64>,
) -> BankResult<StatusCode>
where
    R: BankStore,
{
    let acting = auth.require_admin()?;
    state.admins().delete(AdminId::from_i64(id), acting).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Customers
// ============================================================================

/// GET /api/admin/customers
pub async fn list_customers<R>(
    State(state): State<BankAppState<R>>,
    auth: AuthContext,
) -> BankResult<Json<Vec<CustomerResponse>>>
where
    R: BankStore,
{
    auth.require_admin()?;
    let customers = state.customers().list().await?;
    Ok(Json(customers.iter().map(CustomerResponse::from).collect()))
}

/// POST /api/admin/customers
pub async fn create_customer<R>(
    State(state): State<BankAppState<R>>,
    auth: AuthContext,
    Json(req): Json<CreateCustomerRequest>,
) -> BankResult<impl IntoResponse>
where
    R: BankStore,
{
    auth.require_admin()?;

    let customer = state
        .customers()
        .create(CreateCustomerInput {
            full_name: req.full_name,
            email: req.email,
            password: req.password,
            confirm_password: req.confirm_password,
            account_type: req.account_type,
            balance: req.balance,
            status: req.status,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(CustomerResponse::from(&customer))))
}

/// GET /api/admin/customers/{id}
pub async fn get_customer<R>(
    State(state): State<BankAppState<R>>,
    auth: AuthContext,
    Path(id): Path<i64>,
) -> BankResult<Json<CustomerResponse>>
where
    R: BankStore,
{
    auth.require_admin()?;
    let customer = state.customers().get(CustomerId::from_i64(id)).await?;
    Ok(Json(CustomerResponse::from(&customer)))
}

/// PUT /api/admin/customers/{id}
pub async fn update_customer<R>(
    State(state): State<BankAppState<R>>,
    auth: AuthContext,
    Path(id): Path<i64>,
    Json(req): Json<UpdateCustomerRequest>,
) -> BankResult<Json<CustomerResponse>>
where
    R: BankStore,
{
    auth.require_admin()?;

    let customer = state
        .customers()
        .update(
            CustomerId::from_i64(id),
            UpdateCustomerInput {
                full_name: req.full_name,
                email: req.email,
                account_type: req.account_type,
                balance: req.balance,
                status: req.status,
                password: req.password,
                confirm_password: req.confirm_password,
            },
        )
        .await?;

    Ok(Json(CustomerResponse::from(&customer)))
}

/// DELETE /api/admin/customers/{id}
pub async fn delete_customer<R>(
    State(state): State<BankAppState<R>>,
    auth: AuthContext,
    Path(id): Path<i64>,
) -> BankResult<StatusCode>
where
    R: BankStore,
{
    auth.require_admin()?;
    state.customers().delete(CustomerId::from_i64(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
