//! Role capability and route gating.
//!
//! Token decoding happens elsewhere; this module only sees the identity it
//! produced, as a user id and a role list.

mod guard;
mod session;
mod types;

pub use guard::*;
pub use session::*;
pub use types::*;

use crate::config::SessionConfig;

/// Factory function to create the session from config
pub fn create_session(config: Option<&SessionConfig>) -> Box<dyn Session> {
    match config {
        Some(config) => Box::new(StaticSession::new(Identity::from_claim(
            &config.user_id,
            &config.roles,
        ))),
        None => Box::new(AnonymousSession::new()),
    }
}
