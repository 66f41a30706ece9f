//! Navigation side effects
//!
//! The client never drives a UI directly; everything that would be a
//! `window.location` change goes through this trait so hosts (and
//! tests) decide what a redirect means.

/// Entry points the client may force navigation to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectTarget {
    /// The login page, after logout or an unrecoverable auth failure.
    Login,
    /// The biometric profile form, for users who have not filled it.
    ProfileForm,
}

impl RedirectTarget {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::ProfileForm => "/form",
        }
    }
}

/// Host-provided navigation capability.
pub trait Navigator: Send + Sync {
    fn redirect(&self, target: RedirectTarget);
}
