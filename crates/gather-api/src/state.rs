use std::sync::Arc;

use gather_core::services::GroupService;
use gather_security::SessionTokenService;
use gather_shared::config::AuthSettings;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub groups: Arc<GroupService>,
    pub tokens: Arc<SessionTokenService>,
    pub auth: Arc<AuthSettings>,
}

impl AppState {
    pub fn new(groups: GroupService, tokens: SessionTokenService, auth: AuthSettings) -> Self {
        Self {
            groups: Arc::new(groups),
            tokens: Arc::new(tokens),
            auth: Arc::new(auth),
        }
    }
}
