//! Shared application state for the mm2q web front end.
//!
//! Holds only the validated config. Requests share nothing else.

use std::sync::Arc;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: AppConfig,
}

impl AppState {
    /// Build application state from an already validated config.
    pub fn new(cfg: AppConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg }),
        }
    }

    pub fn cfg(&self) -> &AppConfig {
        &self.inner.cfg
    }

    /// Decimal places for rendered metrics.
    pub fn precision(&self) -> usize {
        self.inner.cfg.display.precision
    }
}
