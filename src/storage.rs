use std::collections::{BTreeSet, VecDeque};

use anyhow::Context;
use axum::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgPoolOptions, types::Json, PgConnection, PgPool};
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::chat::services::ChatResponse;
use crate::nutrition::model::{Meal, MealPlan, UserProfile};

/// Meals kept in the history, newest first.
pub const MEAL_HISTORY_LIMIT: usize = 100;
/// Chat messages kept in the transcript; older ones are dropped first.
pub const CHAT_TRANSCRIPT_LIMIT: usize = 200;

/// Profile edit applied atomically by [`SessionStore::update_profile`].
pub type ProfileEdit = Box<dyn FnOnce(UserProfile) -> anyhow::Result<UserProfile> + Send>;

pub fn profile_edit<F>(f: F) -> ProfileEdit
where
    F: FnOnce(UserProfile) -> anyhow::Result<UserProfile> + Send + 'static,
{
    Box::new(f)
}

/// The current plan together with the ids of meals marked as eaten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanState {
    pub plan: MealPlan,
    #[serde(default)]
    pub consumed: BTreeSet<String>,
}

impl PlanState {
    pub fn new(plan: MealPlan) -> Self {
        Self {
            plan,
            consumed: BTreeSet::new(),
        }
    }

    /// Flip the consumed mark of a planned meal. Returns the meal and whether
    /// it is now consumed, `None` when the plan has no meal with that id.
    pub fn toggle(&mut self, food_id: &str) -> Option<(Meal, bool)> {
        let meal = self.plan.meals.iter().find(|m| m.food.id == food_id)?.clone();
        let consumed = if self.consumed.remove(food_id) {
            false
        } else {
            self.consumed.insert(food_id.to_string());
            true
        };
        Some((meal, consumed))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToggleOutcome {
    NoPlan,
    UnknownMeal,
    Toggled { consumed: bool, state: PlanState },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealHistoryEntry {
    pub meal: Meal,
    #[serde(with = "time::serde::rfc3339")]
    pub eaten_at: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub author: Author,
    pub text: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl ChatMessage {
    pub fn from_user(text: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            author: Author::User,
            text: text.trim().to_string(),
            suggestions: Vec::new(),
            timestamp: OffsetDateTime::now_utc(),
        }
    }

    pub fn from_bot(response: ChatResponse) -> Self {
        Self {
            id: Uuid::new_v4(),
            author: Author::Bot,
            text: response.text,
            suggestions: response.suggestions,
            timestamp: OffsetDateTime::now_utc(),
        }
    }
}

/// Owner of the single session's mutable state. The engine never sees it.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load_profile(&self) -> anyhow::Result<Option<UserProfile>>;
    async fn save_profile(&self, profile: &UserProfile) -> anyhow::Result<()>;
    /// Read-modify-write of the stored profile with no interleaving writer.
    /// `None` when there is no profile yet; errors from `edit` are passed through.
    async fn update_profile(&self, edit: ProfileEdit) -> anyhow::Result<Option<UserProfile>>;
    async fn load_plan(&self) -> anyhow::Result<Option<PlanState>>;
    async fn save_plan(&self, state: &PlanState) -> anyhow::Result<()>;
    /// Flip a meal's consumed mark and, when it becomes consumed, record it
    /// in the history, as one atomic step.
    async fn toggle_meal(&self, food_id: &str, at: OffsetDateTime) -> anyhow::Result<ToggleOutcome>;
    async fn list_history(&self) -> anyhow::Result<Vec<MealHistoryEntry>>;
    async fn append_message(&self, message: &ChatMessage) -> anyhow::Result<()>;
    async fn list_messages(&self) -> anyhow::Result<Vec<ChatMessage>>;
    /// Forget profile, plan, history and transcript.
    async fn reset(&self) -> anyhow::Result<()>;
}

#[derive(Default)]
struct Session {
    profile: Option<UserProfile>,
    plan: Option<PlanState>,
    history: VecDeque<MealHistoryEntry>,
    messages: VecDeque<ChatMessage>,
}

impl Session {
    fn push_history(&mut self, entry: MealHistoryEntry) {
        self.history.push_front(entry);
        self.history.truncate(MEAL_HISTORY_LIMIT);
    }
}

/// Process-local store; state is lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Session>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn load_profile(&self) -> anyhow::Result<Option<UserProfile>> {
        Ok(self.inner.read().await.profile.clone())
    }

    async fn save_profile(&self, profile: &UserProfile) -> anyhow::Result<()> {
        self.inner.write().await.profile = Some(profile.clone());
        Ok(())
    }

    async fn update_profile(&self, edit: ProfileEdit) -> anyhow::Result<Option<UserProfile>> {
        let mut session = self.inner.write().await;
        let Some(current) = session.profile.clone() else {
            return Ok(None);
        };
        let next = edit(current)?;
        session.profile = Some(next.clone());
        Ok(Some(next))
    }

    async fn load_plan(&self) -> anyhow::Result<Option<PlanState>> {
        Ok(self.inner.read().await.plan.clone())
    }

    async fn save_plan(&self, state: &PlanState) -> anyhow::Result<()> {
        self.inner.write().await.plan = Some(state.clone());
        Ok(())
    }

    async fn toggle_meal(&self, food_id: &str, at: OffsetDateTime) -> anyhow::Result<ToggleOutcome> {
        let mut session = self.inner.write().await;
        let Some(plan) = session.plan.as_mut() else {
            return Ok(ToggleOutcome::NoPlan);
        };
        let Some((meal, consumed)) = plan.toggle(food_id) else {
            return Ok(ToggleOutcome::UnknownMeal);
        };
        let state = plan.clone();
        if consumed {
            session.push_history(MealHistoryEntry { meal, eaten_at: at });
        }
        Ok(ToggleOutcome::Toggled { consumed, state })
    }

    async fn list_history(&self) -> anyhow::Result<Vec<MealHistoryEntry>> {
        Ok(self.inner.read().await.history.iter().cloned().collect())
    }

    async fn append_message(&self, message: &ChatMessage) -> anyhow::Result<()> {
        let mut session = self.inner.write().await;
        session.messages.push_back(message.clone());
        while session.messages.len() > CHAT_TRANSCRIPT_LIMIT {
            session.messages.pop_front();
        }
        Ok(())
    }

    async fn list_messages(&self) -> anyhow::Result<Vec<ChatMessage>> {
        Ok(self.inner.read().await.messages.iter().cloned().collect())
    }

    async fn reset(&self) -> anyhow::Result<()> {
        *self.inner.write().await = Session::default();
        Ok(())
    }
}

/// PostgreSQL-backed store. Documents are kept as JSONB; the single-row
/// tables are pinned to `id = 1`.
#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let db = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .context("connect to database")?;
        sqlx::migrate!("./migrations")
            .run(&db)
            .await
            .context("run migrations")?;
        Ok(Self { db })
    }
}

async fn insert_history(conn: &mut PgConnection, entry: &MealHistoryEntry) -> anyhow::Result<()> {
    sqlx::query(r#"INSERT INTO meal_history (entry, eaten_at) VALUES ($1, $2)"#)
        .bind(Json(entry))
        .bind(entry.eaten_at)
        .execute(&mut *conn)
        .await
        .context("insert meal history")?;
    sqlx::query(
        r#"
        DELETE FROM meal_history
        WHERE seq NOT IN (
            SELECT seq FROM meal_history ORDER BY eaten_at DESC, seq DESC LIMIT $1
        )
        "#,
    )
    .bind(MEAL_HISTORY_LIMIT as i64)
    .execute(&mut *conn)
    .await
    .context("trim meal history")?;
    Ok(())
}

#[async_trait]
impl SessionStore for PgStore {
    async fn load_profile(&self) -> anyhow::Result<Option<UserProfile>> {
        let row = sqlx::query_as::<_, (Json<UserProfile>,)>(
            r#"SELECT profile FROM session_profile WHERE id = 1"#,
        )
        .fetch_optional(&self.db)
        .await
        .context("select profile")?;
        Ok(row.map(|(Json(p),)| p))
    }

    async fn save_profile(&self, profile: &UserProfile) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO session_profile (id, profile, updated_at)
            VALUES (1, $1, now())
            ON CONFLICT (id) DO UPDATE SET profile = EXCLUDED.profile, updated_at = now()
            "#,
        )
        .bind(Json(profile))
        .execute(&self.db)
        .await
        .context("upsert profile")?;
        Ok(())
    }

    async fn update_profile(&self, edit: ProfileEdit) -> anyhow::Result<Option<UserProfile>> {
        let mut tx = self.db.begin().await.context("begin tx")?;
        let row = sqlx::query_as::<_, (Json<UserProfile>,)>(
            r#"SELECT profile FROM session_profile WHERE id = 1 FOR UPDATE"#,
        )
        .fetch_optional(&mut *tx)
        .await
        .context("select profile for update")?;
        let Some((Json(current),)) = row else {
            return Ok(None);
        };
        let next = edit(current)?;
        sqlx::query(r#"UPDATE session_profile SET profile = $1, updated_at = now() WHERE id = 1"#)
            .bind(Json(&next))
            .execute(&mut *tx)
            .await
            .context("update profile")?;
        tx.commit().await.context("commit tx")?;
        Ok(Some(next))
    }

    async fn load_plan(&self) -> anyhow::Result<Option<PlanState>> {
        let row = sqlx::query_as::<_, (Json<PlanState>,)>(
            r#"SELECT state FROM session_plan WHERE id = 1"#,
        )
        .fetch_optional(&self.db)
        .await
        .context("select plan")?;
        Ok(row.map(|(Json(s),)| s))
    }

    async fn save_plan(&self, state: &PlanState) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO session_plan (id, state, updated_at)
            VALUES (1, $1, now())
            ON CONFLICT (id) DO UPDATE SET state = EXCLUDED.state, updated_at = now()
            "#,
        )
        .bind(Json(state))
        .execute(&self.db)
        .await
        .context("upsert plan")?;
        Ok(())
    }

    async fn toggle_meal(&self, food_id: &str, at: OffsetDateTime) -> anyhow::Result<ToggleOutcome> {
        let mut tx = self.db.begin().await.context("begin tx")?;
        let row = sqlx::query_as::<_, (Json<PlanState>,)>(
            r#"SELECT state FROM session_plan WHERE id = 1 FOR UPDATE"#,
        )
        .fetch_optional(&mut *tx)
        .await
        .context("select plan for update")?;
        let Some((Json(mut state),)) = row else {
            return Ok(ToggleOutcome::NoPlan);
        };
        let Some((meal, consumed)) = state.toggle(food_id) else {
            return Ok(ToggleOutcome::UnknownMeal);
        };

        sqlx::query(r#"UPDATE session_plan SET state = $1, updated_at = now() WHERE id = 1"#)
            .bind(Json(&state))
            .execute(&mut *tx)
            .await
            .context("update plan")?;
        if consumed {
            insert_history(&mut tx, &MealHistoryEntry { meal, eaten_at: at }).await?;
        }
        tx.commit().await.context("commit tx")?;
        Ok(ToggleOutcome::Toggled { consumed, state })
    }

    async fn list_history(&self) -> anyhow::Result<Vec<MealHistoryEntry>> {
        let rows = sqlx::query_as::<_, (Json<MealHistoryEntry>,)>(
            r#"SELECT entry FROM meal_history ORDER BY eaten_at DESC, seq DESC LIMIT $1"#,
        )
        .bind(MEAL_HISTORY_LIMIT as i64)
        .fetch_all(&self.db)
        .await
        .context("select meal history")?;
        Ok(rows.into_iter().map(|(Json(e),)| e).collect())
    }

    async fn append_message(&self, message: &ChatMessage) -> anyhow::Result<()> {
        let mut tx = self.db.begin().await.context("begin tx")?;
        sqlx::query(r#"INSERT INTO chat_messages (id, message) VALUES ($1, $2)"#)
            .bind(message.id)
            .bind(Json(message))
            .execute(&mut *tx)
            .await
            .context("insert chat message")?;
        sqlx::query(
            r#"
            DELETE FROM chat_messages
            WHERE seq NOT IN (SELECT seq FROM chat_messages ORDER BY seq DESC LIMIT $1)
            "#,
        )
        .bind(CHAT_TRANSCRIPT_LIMIT as i64)
        .execute(&mut *tx)
        .await
        .context("trim chat transcript")?;
        tx.commit().await.context("commit tx")?;
        Ok(())
    }

    async fn list_messages(&self) -> anyhow::Result<Vec<ChatMessage>> {
        let rows = sqlx::query_as::<_, (Json<ChatMessage>,)>(
            r#"SELECT message FROM chat_messages ORDER BY seq ASC"#,
        )
        .fetch_all(&self.db)
        .await
        .context("select chat messages")?;
        Ok(rows.into_iter().map(|(Json(m),)| m).collect())
    }

    async fn reset(&self) -> anyhow::Result<()> {
        let mut tx = self.db.begin().await.context("begin tx")?;
        for table in ["session_profile", "session_plan", "meal_history", "chat_messages"] {
            sqlx::query(&format!("DELETE FROM {table}"))
                .execute(&mut *tx)
                .await
                .with_context(|| format!("clear {table}"))?;
        }
        tx.commit().await.context("commit tx")?;
        Ok(())
    }
}
