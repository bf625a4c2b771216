//! Request authentication gate.
//!
//! Every request is classified (`routes`), private ones must carry a session
//! cookie (`token`) that the remote auth service confirms (`gate`).

pub mod gate;
pub mod routes;
pub mod token;

pub use gate::{Decision, GateError, apply, evaluate, redirect_to_login};
pub use routes::{LOGIN_PATH, LOGOUT_PATH, RoutePolicy};
pub use token::{SESSION_COOKIE, clear_session_cookie, extract_token, session_cookie};
