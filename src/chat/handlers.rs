use std::time::Duration;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use rand::Rng;
use tracing::{debug, instrument};

use super::dto::{ChatExchange, ChatRequest, TranscriptResponse};
use super::services::ChatEngine;
use crate::app::{internal, local_now};
use crate::profile::handlers::current_profile;
use crate::state::AppState;
use crate::storage::ChatMessage;

pub fn routes() -> Router<AppState> {
    Router::new().route("/chat", get(get_transcript).post(post_message))
}

fn typing_delay(state: &AppState) -> Duration {
    let chat = &state.config.chat;
    let ms = if chat.delay_max_ms > chat.delay_min_ms {
        rand::thread_rng().gen_range(chat.delay_min_ms..=chat.delay_max_ms)
    } else {
        chat.delay_min_ms
    };
    Duration::from_millis(ms)
}

/// Transcript so far; an empty one is seeded with the greeting.
#[instrument(skip(state))]
pub async fn get_transcript(
    State(state): State<AppState>,
) -> Result<Json<TranscriptResponse>, (StatusCode, String)> {
    let mut messages = state.store.list_messages().await.map_err(internal)?;
    if messages.is_empty() {
        let profile = current_profile(&state).await?;
        let engine = ChatEngine::new(&state.catalog, local_now().hour());
        let greeting = ChatMessage::from_bot(engine.initial_message(&profile));
        state.store.append_message(&greeting).await.map_err(internal)?;
        messages.push(greeting);
    }
    Ok(Json(TranscriptResponse { messages }))
}

#[instrument(skip(state, body))]
pub async fn post_message(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatExchange>, (StatusCode, String)> {
    if body.text.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "text must not be blank".into()));
    }

    let user = ChatMessage::from_user(&body.text);
    state.store.append_message(&user).await.map_err(internal)?;

    tokio::time::sleep(typing_delay(&state)).await;

    let profile = current_profile(&state).await?;
    let response = {
        let engine = ChatEngine::new(&state.catalog, local_now().hour());
        engine.generate_response(&user.text, &profile, &mut rand::thread_rng())
    };
    let intent = response.intent;
    debug!(?intent, suggestions = response.suggestions.len(), "chat reply ready");

    let reply = ChatMessage::from_bot(response);
    state.store.append_message(&reply).await.map_err(internal)?;
    Ok(Json(ChatExchange { intent, user, reply }))
}

#[cfg(test)]
mod tests {
    use crate::app::build_app;
    use crate::state::AppState;
    use crate::test_util::call;
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn transcript_is_seeded_once() {
        let app = build_app(AppState::fake());
        let (status, body) = call(&app, Method::GET, "/api/v1/chat", None).await;
        assert_eq!(status, StatusCode::OK);
        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["author"], "bot");

        let (_, again) = call(&app, Method::GET, "/api/v1/chat", None).await;
        assert_eq!(again["messages"].as_array().unwrap().len(), 1);
        assert_eq!(again["messages"][0]["id"], messages[0]["id"]);
    }

    #[tokio::test]
    async fn user_message_precedes_reply() {
        let app = build_app(AppState::fake());
        let (status, body) = call(
            &app,
            Method::POST,
            "/api/v1/chat",
            Some(json!({ "text": "instead of chips?" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["intent"], "alternative");
        assert_eq!(body["user"]["text"], "instead of chips?");
        assert!(body["reply"]["text"]
            .as_str()
            .unwrap()
            .contains("air-popped popcorn"));

        let (_, transcript) = call(&app, Method::GET, "/api/v1/chat", None).await;
        let authors: Vec<_> = transcript["messages"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["author"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(authors, ["user", "bot"]);
    }

    #[tokio::test]
    async fn blank_text_is_rejected() {
        let app = build_app(AppState::fake());
        let (status, _) =
            call(&app, Method::POST, "/api/v1/chat", Some(json!({ "text": "   " }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, transcript) = call(&app, Method::GET, "/api/v1/chat", None).await;
        // only the seeded greeting
        assert_eq!(transcript["messages"].as_array().unwrap().len(), 1);
    }
}
