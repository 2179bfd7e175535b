use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{debug, info, instrument};

use super::dto::{ProgressResponse, SuggestionsQuery, SuggestionsResponse, TipResponse, ToggleResponse};
use crate::app::{internal, local_now, not_found};
use crate::nutrition::{
    model::{FoodItem, MealType},
    planner::{consumed_totals, generate_daily_meal_plan, get_alternatives, get_quick_suggestions},
    progress::calculate_progress,
    tips::get_daily_tip,
};
use crate::profile::handlers::{current_profile, require_profile};
use crate::state::AppState;
use crate::storage::{MealHistoryEntry, PlanState, ToggleOutcome};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/plan/progress", get(get_progress))
        .route("/plan/slots/:slot/alternatives", get(get_slot_alternatives))
        .route("/suggestions", get(get_suggestions))
        .route("/tip", get(get_tip))
        .route("/history", get(get_history))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/plan", get(get_plan).post(create_plan))
        .route("/plan/meals/:food_id/toggle", post(toggle_meal))
}

async fn require_plan(state: &AppState) -> Result<PlanState, (StatusCode, String)> {
    state
        .store
        .load_plan()
        .await
        .map_err(internal)?
        .ok_or_else(|| not_found("Plan"))
}

#[instrument(skip(state))]
pub async fn create_plan(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<PlanState>), (StatusCode, String)> {
    let profile = require_profile(&state).await?;
    let plan = {
        let mut rng = rand::thread_rng();
        generate_daily_meal_plan(&profile, &state.catalog, local_now().date(), &mut rng)
    };
    let plan_state = PlanState::new(plan);
    state.store.save_plan(&plan_state).await.map_err(internal)?;
    info!(
        date = %plan_state.plan.date,
        calories = plan_state.plan.totals.calories,
        "plan created"
    );
    Ok((StatusCode::CREATED, Json(plan_state)))
}

#[instrument(skip(state))]
pub async fn get_plan(State(state): State<AppState>) -> Result<Json<PlanState>, (StatusCode, String)> {
    Ok(Json(require_plan(&state).await?))
}

#[instrument(skip(state))]
pub async fn toggle_meal(
    State(state): State<AppState>,
    Path(food_id): Path<String>,
) -> Result<Json<ToggleResponse>, (StatusCode, String)> {
    let outcome = state
        .store
        .toggle_meal(&food_id, OffsetDateTime::now_utc())
        .await
        .map_err(internal)?;
    let (consumed, plan_state) = match outcome {
        ToggleOutcome::Toggled { consumed, state } => (consumed, state),
        ToggleOutcome::NoPlan => return Err(not_found("Plan")),
        ToggleOutcome::UnknownMeal => return Err(not_found("Meal")),
    };
    debug!(%food_id, consumed, "meal toggled");

    let totals = consumed_totals(&plan_state.plan, &plan_state.consumed);
    Ok(Json(ToggleResponse {
        food_id,
        consumed,
        progress: calculate_progress(&totals, &plan_state.plan.targets),
    }))
}

#[instrument(skip(state))]
pub async fn get_progress(
    State(state): State<AppState>,
) -> Result<Json<ProgressResponse>, (StatusCode, String)> {
    let plan_state = require_plan(&state).await?;
    let consumed = consumed_totals(&plan_state.plan, &plan_state.consumed);
    Ok(Json(ProgressResponse {
        progress: calculate_progress(&consumed, &plan_state.plan.targets),
        targets: plan_state.plan.targets,
        consumed,
    }))
}

#[instrument(skip(state))]
pub async fn get_slot_alternatives(
    State(state): State<AppState>,
    Path(slot): Path<MealType>,
) -> Result<Json<Vec<FoodItem>>, (StatusCode, String)> {
    let profile = current_profile(&state).await?;
    let plan_state = state.store.load_plan().await.map_err(internal)?;
    let current_id = plan_state.as_ref().and_then(|s| {
        s.plan
            .meals
            .iter()
            .find(|m| m.food.meal_type == slot)
            .map(|m| m.food.id.as_str())
    });
    Ok(Json(get_alternatives(slot, &profile, &state.catalog, current_id)))
}

#[instrument(skip(state))]
pub async fn get_suggestions(
    State(state): State<AppState>,
    Query(q): Query<SuggestionsQuery>,
) -> Result<Json<SuggestionsResponse>, (StatusCode, String)> {
    let hour = match q.hour {
        Some(h) if h > 23 => {
            return Err((StatusCode::BAD_REQUEST, "hour must be within 0-23".into()))
        }
        Some(h) => h,
        None => local_now().hour(),
    };
    let profile = current_profile(&state).await?;
    Ok(Json(SuggestionsResponse {
        slot: MealType::for_hour(hour),
        items: get_quick_suggestions(&profile, &state.catalog, hour),
    }))
}

#[instrument(skip(state))]
pub async fn get_tip(State(state): State<AppState>) -> Result<Json<TipResponse>, (StatusCode, String)> {
    let profile = current_profile(&state).await?;
    let tip = get_daily_tip(&profile, &mut rand::thread_rng());
    Ok(Json(TipResponse { tip }))
}

#[instrument(skip(state))]
pub async fn get_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<MealHistoryEntry>>, (StatusCode, String)> {
    Ok(Json(state.store.list_history().await.map_err(internal)?))
}

#[cfg(test)]
mod tests {
    use crate::app::build_app;
    use crate::state::AppState;
    use crate::test_util::{call, onboarding_body};
    use axum::http::{Method, StatusCode};

    async fn onboarded() -> axum::Router {
        let app = build_app(AppState::fake());
        let (status, _) = call(&app, Method::POST, "/api/v1/profile", Some(onboarding_body())).await;
        assert_eq!(status, StatusCode::CREATED);
        app
    }

    #[tokio::test]
    async fn plan_needs_profile() {
        let app = build_app(AppState::fake());
        let (status, _) = call(&app, Method::POST, "/api/v1/plan", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = call(&app, Method::GET, "/api/v1/plan", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn generated_plan_has_four_ordered_meals() {
        let app = onboarded().await;
        let (status, body) = call(&app, Method::POST, "/api/v1/plan", None).await;
        assert_eq!(status, StatusCode::CREATED);

        let slots: Vec<_> = body["plan"]["meals"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["mealType"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(slots, ["breakfast", "lunch", "snack", "dinner"]);
        assert_eq!(body["plan"]["targets"]["calories"], 2004);
        assert!(body["consumed"].as_array().unwrap().is_empty());

        let (status, stored) = call(&app, Method::GET, "/api/v1/plan", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(stored, body);
    }

    #[tokio::test]
    async fn toggling_tracks_progress_and_history() {
        let app = onboarded().await;
        let (_, body) = call(&app, Method::POST, "/api/v1/plan", None).await;
        let meal = &body["plan"]["meals"][0];
        let id = meal["id"].as_str().unwrap();
        let uri = format!("/api/v1/plan/meals/{id}/toggle");

        let (status, toggled) = call(&app, Method::POST, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(toggled["consumed"], true);

        let (_, progress) = call(&app, Method::GET, "/api/v1/plan/progress", None).await;
        assert_eq!(progress["consumed"]["calories"], meal["calories"]);

        let (_, history) = call(&app, Method::GET, "/api/v1/history", None).await;
        assert_eq!(history.as_array().unwrap().len(), 1);
        assert_eq!(history[0]["meal"]["id"], id);

        // unmarking clears progress but keeps the history entry
        let (_, toggled) = call(&app, Method::POST, &uri, None).await;
        assert_eq!(toggled["consumed"], false);
        assert_eq!(toggled["progress"]["calories"], 0);
        let (_, history) = call(&app, Method::GET, "/api/v1/history", None).await;
        assert_eq!(history.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn toggling_without_plan_is_404() {
        let app = onboarded().await;
        let (status, body) = call(&app, Method::POST, "/api/v1/plan/meals/b1/toggle", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Plan not found");
    }

    #[tokio::test]
    async fn toggling_unknown_meal_is_404() {
        let app = onboarded().await;
        call(&app, Method::POST, "/api/v1/plan", None).await;
        let (status, _) = call(&app, Method::POST, "/api/v1/plan/meals/nope/toggle", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn alternatives_skip_the_planned_meal() {
        let app = onboarded().await;
        let (_, body) = call(&app, Method::POST, "/api/v1/plan", None).await;
        let lunch_id = body["plan"]["meals"][1]["id"].clone();

        let (status, alts) =
            call(&app, Method::GET, "/api/v1/plan/slots/lunch/alternatives", None).await;
        assert_eq!(status, StatusCode::OK);
        let alts = alts.as_array().unwrap();
        assert!(!alts.is_empty() && alts.len() <= 3);
        assert!(alts.iter().all(|a| a["id"] != lunch_id));

        let (status, _) =
            call(&app, Method::GET, "/api/v1/plan/slots/brunch/alternatives", None).await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn suggestions_follow_the_hour() {
        let app = build_app(AppState::fake());
        let (status, body) = call(&app, Method::GET, "/api/v1/suggestions?hour=16", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["slot"], "snack");
        let items = body["items"].as_array().unwrap();
        assert!(!items.is_empty() && items.len() <= 4);
        assert!(items.iter().all(|i| i["mealType"] == "snack"));

        let (status, _) = call(&app, Method::GET, "/api/v1/suggestions?hour=24", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn tip_is_available_without_profile() {
        let app = build_app(AppState::fake());
        let (status, body) = call(&app, Method::GET, "/api/v1/tip", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body["tip"].as_str().unwrap().is_empty());
    }
}
