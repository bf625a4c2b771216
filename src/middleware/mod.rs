/*
 * Responsibility
 * - Public interface of the middleware layers
 * - auth gate, HTTP cross-cutting stack, browser security headers
 */
pub mod auth;
pub mod http;
pub mod security_headers;
