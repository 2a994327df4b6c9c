use axum::{extract::State, Json};
use std::sync::Arc;
use validator::Validate;

use super::crud::AdminCrud;
use super::interface::{AdminError, AdminIdentity, PasswordReset};
use super::reset::PasswordResetCrud;
use super::schema::{
    ChangePasswordRequest, CheckSetupResponse, ForgotPasswordRequest, ForgotPasswordResponse,
    LoginRequest, LoginResponse, ResetAdminsResponse, ResetPasswordQuery, SetupRequest,
};
use crate::modules::shared::{
    error_response, validation_error, ApiError, AppJson, AppQuery, MessageResponse,
};
use crate::AppState;

fn admin_error(e: AdminError) -> ApiError {
    error_response(e.status_code(), &e)
}

// =============================================================================
// GET /admin/check-setup
// =============================================================================

pub async fn check_setup(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CheckSetupResponse>, ApiError> {
    let crud = AdminCrud::new(state.db.clone());
    let has_admin = crud.is_setup_complete().await.map_err(admin_error)?;

    Ok(Json(CheckSetupResponse { has_admin }))
}

// =============================================================================
// POST /admin/setup
// =============================================================================

pub async fn setup(
    State(state): State<Arc<AppState>>,
    AppJson(mut req): AppJson<SetupRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    req.username = req.username.trim().to_string();
    req.validate().map_err(validation_error)?;

    let crud = AdminCrud::new(state.db.clone());
    crud.setup(&req.username, &req.password)
        .await
        .map_err(admin_error)?;

    Ok(MessageResponse::new("Admin user created successfully"))
}

// =============================================================================
// DELETE /admin/reset (development only)
// =============================================================================

pub async fn reset_admins(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ResetAdminsResponse>, ApiError> {
    let crud = AdminCrud::new(state.db.clone());
    let deleted = crud.reset_accounts().await.map_err(admin_error)?;

    Ok(Json(ResetAdminsResponse {
        message: "Admin users reset successfully",
        deleted,
    }))
}

// =============================================================================
// POST /admin/login
// =============================================================================

pub async fn login(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let crud = AdminCrud::new(state.db.clone());

    let result = crud.login(req.username.trim(), &req.password).await;
    state.metrics.record_login(result.is_ok());

    let admin_id = result.map_err(admin_error)?;

    Ok(Json(LoginResponse {
        message: "Login successful",
        admin_id,
    }))
}

// =============================================================================
// POST /admin/change-password
// =============================================================================

pub async fn change_password(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    req.validate().map_err(validation_error)?;

    let username = req
        .username
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty());

    let crud = AdminCrud::new(state.db.clone());
    crud.change_password(&req.current_password, &req.new_password, username)
        .await
        .map_err(admin_error)?;

    Ok(MessageResponse::new("Password updated successfully"))
}

// =============================================================================
// POST /admin/forgot-password
// =============================================================================

pub async fn forgot_password(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<ForgotPasswordRequest>,
) -> Result<Json<ForgotPasswordResponse>, ApiError> {
    req.validate().map_err(validation_error)?;
    state.metrics.record_password_reset("requested");

    let crud = PasswordResetCrud::new(state.db.clone(), state.config.reset_link_base.clone());
    let link = crud.request_reset(&req.email).await.map_err(admin_error)?;

    if link.is_some() {
        state.metrics.record_password_reset("issued");
    }

    // Same body whether or not the identifier is registered.
    let reset_link = if state.config.demo_mode {
        link.map(|l| l.url)
    } else {
        None
    };

    Ok(Json(ForgotPasswordResponse {
        message: "If the account exists, a password reset link has been sent",
        reset_link,
    }))
}

// =============================================================================
// POST /admin/reset-password?token=..&new_password=..
// =============================================================================

pub async fn reset_password(
    State(state): State<Arc<AppState>>,
    AppQuery(query): AppQuery<ResetPasswordQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let crud = PasswordResetCrud::new(state.db.clone(), state.config.reset_link_base.clone());

    // A dead token is reported as such whatever password came with it.
    if let Err(errors) = query.validate() {
        let live = crud
            .is_token_live(&query.token)
            .await
            .map_err(|e| admin_error(e.into()))?;
        if !live {
            state.metrics.record_password_reset("rejected");
            return Err(admin_error(AdminError::InvalidOrExpiredToken));
        }
        return Err(validation_error(errors));
    }

    let result = crud.resolve_reset(&query.token, &query.new_password).await;

    let stage = if result.is_ok() { "completed" } else { "rejected" };
    state.metrics.record_password_reset(stage);

    result.map_err(admin_error)?;

    Ok(MessageResponse::new("Password has been reset successfully"))
}
