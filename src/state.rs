use std::sync::Arc;

use crate::config::AppConfig;
use crate::store::UserStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UserStore>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;
        Ok(Self::new(config))
    }

    /// Fresh, empty store with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self::from_parts(Arc::new(UserStore::new()), Arc::new(config))
    }

    pub fn from_parts(store: Arc<UserStore>, config: Arc<AppConfig>) -> Self {
        Self { store, config }
    }
}
