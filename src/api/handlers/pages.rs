/*
 * Responsibility
 * - Layout data for dashboard pages ({ user, isAuthenticated })
 * - Private pages get the identity the gate verified; public pages get none
 */
use axum::Json;

use crate::api::dto::layout::LayoutData;
use crate::api::extractors::AuthCtxExtractor;

pub async fn layout(ctx: Option<AuthCtxExtractor>) -> Json<LayoutData> {
    Json(LayoutData::from_ctx(ctx.map(|AuthCtxExtractor(ctx)| ctx)))
}
