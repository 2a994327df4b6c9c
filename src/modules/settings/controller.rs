use axum::{extract::State, Json};
use std::sync::Arc;
use validator::Validate;

use super::crud::{SettingsCrud, SettingsError};
use super::model::SiteSettings;
use super::schema::SiteSettingsUpdate;
use crate::modules::shared::{error_response, validation_error, ApiError, AppJson};
use crate::AppState;

fn settings_error(e: SettingsError) -> ApiError {
    error_response(e.status_code(), &e)
}

// =============================================================================
// GET /settings
// =============================================================================

pub async fn get_settings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SiteSettings>, ApiError> {
    let crud = SettingsCrud::new(state.db.clone());
    let settings = crud.get_or_create_default().await.map_err(settings_error)?;

    Ok(Json(settings))
}

// =============================================================================
// PUT /settings
// =============================================================================

pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<SiteSettingsUpdate>,
) -> Result<Json<SiteSettings>, ApiError> {
    req.validate().map_err(validation_error)?;

    let crud = SettingsCrud::new(state.db.clone());
    let settings = crud.upsert(req).await.map_err(settings_error)?;

    Ok(Json(settings))
}
