//! Application state shared across handlers

use std::sync::Arc;

use pickup_common::{AppConfig, JwtService};
use pickup_service::ServiceContext;

/// Shared state: the service dependency container plus configuration.
/// Cloning is cheap; both halves sit behind an Arc.
#[derive(Clone)]
pub struct AppState {
    services: Arc<ServiceContext>,
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(services: ServiceContext, config: AppConfig) -> Self {
        Self {
            services: Arc::new(services),
            config: Arc::new(config),
        }
    }

    /// The service context
    pub fn services(&self) -> &ServiceContext {
        &self.services
    }

    /// The application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.services.jwt_service()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
