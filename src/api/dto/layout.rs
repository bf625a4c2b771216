use serde::Serialize;

use crate::api::extractors::{AuthCtx, Identity};

/// Data every page layout receives.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutData {
    pub user: Option<Identity>,
    pub is_authenticated: bool,
}

impl LayoutData {
    pub fn from_ctx(ctx: Option<AuthCtx>) -> Self {
        let user = ctx.map(|ctx| ctx.identity);
        Self {
            is_authenticated: user.is_some(),
            user,
        }
    }
}
