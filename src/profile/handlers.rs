use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{info, instrument};

use super::dto::ProfileUpdate;
use super::services::{apply_update, complete_onboarding, ProfileError};
use crate::app::{internal, not_found};
use crate::nutrition::{
    calories::calculate_daily_calories,
    macros::calculate_macro_targets,
    model::{PlanTargets, UserProfile},
};
use crate::state::AppState;
use crate::storage::profile_edit;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/profile",
            get(get_profile)
                .post(create_profile)
                .patch(update_profile)
                .delete(reset_profile),
        )
        .route("/targets", get(get_targets))
}

fn bad_request(e: ProfileError) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, e.to_string())
}

/// Stored profile, or 404 before onboarding.
pub(crate) async fn require_profile(state: &AppState) -> Result<UserProfile, (StatusCode, String)> {
    state
        .store
        .load_profile()
        .await
        .map_err(internal)?
        .ok_or_else(|| not_found("Profile"))
}

/// Stored profile, or the all-defaults one before onboarding.
pub(crate) async fn current_profile(state: &AppState) -> Result<UserProfile, (StatusCode, String)> {
    Ok(state
        .store
        .load_profile()
        .await
        .map_err(internal)?
        .unwrap_or_default())
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
) -> Result<Json<UserProfile>, (StatusCode, String)> {
    Ok(Json(require_profile(&state).await?))
}

#[instrument(skip(state, body))]
pub async fn create_profile(
    State(state): State<AppState>,
    Json(body): Json<UserProfile>,
) -> Result<(StatusCode, Json<UserProfile>), (StatusCode, String)> {
    let profile = complete_onboarding(body, OffsetDateTime::now_utc()).map_err(bad_request)?;
    state.store.save_profile(&profile).await.map_err(internal)?;
    info!(goal = ?profile.goal, diet = ?profile.diet_type, "onboarding completed");
    Ok((StatusCode::CREATED, Json(profile)))
}

#[instrument(skip(state, body))]
pub async fn update_profile(
    State(state): State<AppState>,
    Json(body): Json<ProfileUpdate>,
) -> Result<Json<UserProfile>, (StatusCode, String)> {
    let edit = profile_edit(move |current| Ok(apply_update(&current, body)?));
    match state.store.update_profile(edit).await {
        Ok(Some(next)) => Ok(Json(next)),
        Ok(None) => Err(not_found("Profile")),
        Err(e) => match e.downcast::<ProfileError>() {
            Ok(invalid) => Err(bad_request(invalid)),
            Err(e) => Err(internal(e)),
        },
    }
}

#[instrument(skip(state))]
pub async fn reset_profile(State(state): State<AppState>) -> Result<StatusCode, (StatusCode, String)> {
    state.store.reset().await.map_err(internal)?;
    info!("session reset");
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state))]
pub async fn get_targets(
    State(state): State<AppState>,
) -> Result<Json<PlanTargets>, (StatusCode, String)> {
    let profile = require_profile(&state).await?;
    let calories = calculate_daily_calories(&profile);
    let macros = calculate_macro_targets(&profile, calories);
    Ok(Json(PlanTargets::new(calories, macros)))
}
