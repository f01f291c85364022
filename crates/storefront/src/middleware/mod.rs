//! HTTP middleware configuration.

pub mod session;

pub use session::create_session_layer;
