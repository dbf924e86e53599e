//! Authorization gate for reply creation.
//!
//! The gate sees callers only through the `Identity` capability, never a
//! concrete user type, so tests can substitute stubs and future role checks
//! land here without touching the reply control flow.

use crate::models::user::Principal;

/// Capability view of an authenticated principal.
pub trait Identity {
    fn user_id(&self) -> i64;
    fn is_active(&self) -> bool;
    fn roles(&self) -> &[String];
}

impl Identity for Principal {
    fn user_id(&self) -> i64 {
        self.user_id
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn roles(&self) -> &[String] {
        &self.roles
    }
}

/// True iff the identity may create a reply: any authenticated, active user.
/// Roles are available on the identity but not consulted yet.
pub fn can_post_reply(identity: &dyn Identity) -> bool {
    identity.is_active()
}
