//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`AuthContext`] is provided once by the root component and read by route
//! guards, pages and the REST client. It owns the `access` resolver and
//! mirrors each session transition into a reactive signal. The resolver
//! notifies synchronously, so code reading the signal right after
//! `login`/`logout` already sees the new session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use access::{AccessError, AuthResolver, DurableSlot, Identity, IdentityClaim, IdentityHeaders, Session, SessionStore};
use leptos::prelude::*;

use crate::util::storage::BrowserSlot;

/// Reactive snapshot of the current session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Session,
}

impl AuthState {
    /// Still restoring the persisted session.
    #[must_use]
    pub fn loading(&self) -> bool {
        !self.session.is_resolved()
    }

    #[must_use]
    pub fn user(&self) -> Option<&Identity> {
        self.session.identity()
    }
}

/// Handle to the auth resolver and its reactive mirror.
pub struct AuthContext<S: 'static = BrowserSlot> {
    pub state: RwSignal<AuthState>,
    resolver: StoredValue<AuthResolver<S>>,
}

impl<S: 'static> Clone for AuthContext<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: 'static> Copy for AuthContext<S> {}

impl<S> AuthContext<S>
where
    S: DurableSlot + Send + Sync + 'static,
{
    /// Build a context over `slot`. The session starts unresolved; call
    /// [`Self::initialize`] from the client once mounted.
    pub fn new(slot: S) -> Self {
        let state = RwSignal::new(AuthState::default());
        let mut resolver = AuthResolver::new(SessionStore::new(slot));
        resolver.subscribe(move |session| state.set(AuthState { session: session.clone() }));
        Self { state, resolver: StoredValue::new(resolver) }
    }

    /// Restore the persisted session. Later calls are no-ops.
    pub fn initialize(&self) {
        self.resolver.update_value(|r| {
            r.initialize();
        });
    }

    /// Validate and store `claim` as the current identity.
    ///
    /// # Errors
    ///
    /// Returns the resolver's error, e.g. [`AccessError::InvalidRole`]; the
    /// session is unchanged in that case.
    pub fn login(&self, claim: IdentityClaim) -> Result<Identity, AccessError> {
        let mut result = Err(AccessError::NotResolved);
        self.resolver.update_value(|r| result = r.login(claim).cloned());
        result
    }

    pub fn logout(&self) {
        self.resolver.update_value(AuthResolver::logout);
    }

    /// Identity headers for the session as it is right now.
    #[must_use]
    pub fn headers(&self) -> Option<IdentityHeaders> {
        self.resolver.with_value(AuthResolver::headers)
    }

    /// Current session, tracked.
    #[must_use]
    pub fn session(&self) -> Session {
        self.state.with(|s| s.session.clone())
    }
}

/// Create the browser auth context, provide it to descendants and schedule
/// the one-time restore. Effects only run in the browser, so server-rendered
/// HTML always shows the loading state.
pub fn provide_auth() -> AuthContext {
    let auth = AuthContext::new(BrowserSlot);
    provide_context(auth);
    Effect::new(move || auth.initialize());
    auth
}

/// The auth context provided by [`provide_auth`].
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
