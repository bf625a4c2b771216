/*!
 * Authentication context extractor
 *
 * Responsibility:
 * - Hand the verified identity (AuthCtx) to handlers
 * - axum glue lives in core, the types in types
 *
 * Public API:
 * - AuthCtx, Identity
 * - AuthCtxExtractor
 */

mod core;
mod types;

pub use core::AuthCtxExtractor;
pub use types::{AuthCtx, Identity};
