use crate::catalog::FoodCatalog;
use crate::config::AppConfig;
use crate::storage::{MemoryStore, PgStore, SessionStore};
use anyhow::Context;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub catalog: Arc<FoodCatalog>,
    pub store: Arc<dyn SessionStore>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let catalog = FoodCatalog::load(config.catalog_path.as_deref())
            .context("load food catalog")?;
        tracing::info!(foods = catalog.len(), "food catalog loaded");

        let store = match config.database_url.as_deref() {
            Some(url) => {
                tracing::info!("using postgres session store");
                Arc::new(PgStore::connect(url).await?) as Arc<dyn SessionStore>
            }
            None => {
                tracing::warn!("DATABASE_URL not set; session state is kept in memory");
                Arc::new(MemoryStore::new()) as Arc<dyn SessionStore>
            }
        };

        Ok(Self::from_parts(config, Arc::new(catalog), store))
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        catalog: Arc<FoodCatalog>,
        store: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            config,
            catalog,
            store,
        }
    }

    /// Built-in catalog, memory store and no chat delay.
    #[cfg(test)]
    pub fn fake() -> Self {
        let config = Arc::new(AppConfig {
            database_url: None,
            catalog_path: None,
            chat: crate::config::ChatConfig {
                delay_min_ms: 0,
                delay_max_ms: 0,
            },
        });
        Self::from_parts(
            config,
            Arc::new(FoodCatalog::builtin()),
            Arc::new(MemoryStore::new()),
        )
    }
}
