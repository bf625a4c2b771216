/*
 * Responsibility
 * - Shared context bound to the Router (AppState)
 *   - auth validator, public route policy, cookie flags
 * - Cheap to clone (Arc inside); nothing in here is mutated per request
 */
use std::sync::Arc;

use crate::middleware::auth::RoutePolicy;
use crate::services::auth::AuthValidator;

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn AuthValidator>,
    pub routes: Arc<RoutePolicy>,
    pub cookie_secure: bool,
}

impl AppState {
    pub fn new(auth: Arc<dyn AuthValidator>, routes: RoutePolicy, cookie_secure: bool) -> Self {
        Self {
            auth,
            routes: Arc::new(routes),
            cookie_secure,
        }
    }
}
