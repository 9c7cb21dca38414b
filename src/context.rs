//! Application Context
//!
//! Services shared with every component via the Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::auth::StaffDirectory;
use crate::config::AppConfig;
use crate::models::Staff;
use crate::session::SessionStorage;

/// Services the views call into
#[derive(Clone)]
pub struct PosContext {
    pub config: Arc<AppConfig>,
    api: ApiClient,
    pub storage: Arc<dyn SessionStorage + Send + Sync>,
    pub directory: Arc<dyn StaffDirectory + Send + Sync>,
}

impl PosContext {
    pub fn new(
        config: AppConfig,
        storage: Arc<dyn SessionStorage + Send + Sync>,
        directory: Arc<dyn StaffDirectory + Send + Sync>,
    ) -> Self {
        let api = ApiClient::new(&config);
        Self {
            config: Arc::new(config),
            api,
            storage,
            directory,
        }
    }

    /// API client stamped with the given staff member's PIN
    pub fn api(&self, staff: Option<&Staff>) -> ApiClient {
        self.api.for_staff(staff.map(|s| s.pin.as_str()))
    }

    pub fn currency(&self) -> &str {
        &self.config.currency_symbol
    }
}

pub fn use_pos_context() -> PosContext {
    expect_context::<PosContext>()
}
