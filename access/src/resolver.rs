//! Auth resolver: sole owner and mutator of the session.
//!
//! ARCHITECTURE
//! ============
//! The resolver wraps a [`SessionStore`] and the current [`Session`]. UI code
//! receives it by injection (context, constructor) rather than through a
//! global, so every test builds an isolated instance.
//!
//! `initialize` performs the single `Unresolved -> Resolved` transition.
//! `login` and `logout` mutate the resolved session. Every transition
//! notifies subscribers synchronously before returning, so a route decision
//! taken right after a mutator call sees the new state.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use crate::error::AccessError;
use crate::headers::IdentityHeaders;
use crate::identity::{Identity, IdentityClaim};
use crate::session::{Session, SessionStore};
use crate::storage::DurableSlot;

type Subscriber = Box<dyn Fn(&Session) + Send + Sync>;

/// Handle returned by [`AuthResolver::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct AuthResolver<S> {
    store: SessionStore<S>,
    session: Session,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<S: DurableSlot> AuthResolver<S> {
    #[must_use]
    pub fn new(store: SessionStore<S>) -> Self {
        Self { store, session: Session::Unresolved, subscribers: Vec::new(), next_subscription: 0 }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    /// Identity headers for the current session, read fresh on every call.
    #[must_use]
    pub fn headers(&self) -> Option<IdentityHeaders> {
        IdentityHeaders::from_session(&self.session)
    }

    /// Register a callback run after every session transition.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&Session) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Restore the persisted identity and mark the session resolved.
    ///
    /// Only the first call does anything; later calls return `false` and
    /// leave the session untouched.
    pub fn initialize(&mut self) -> bool {
        if self.session.is_resolved() {
            return false;
        }
        let identity = self.store.load();
        tracing::debug!(
            user_id = identity.as_ref().map(|i| i.id.as_str()),
            role = identity.as_ref().map(|i| i.role.as_str()),
            "session resolved"
        );
        self.transition(Session::Resolved(identity));
        true
    }

    /// Log in with an unvalidated identity.
    ///
    /// # Errors
    ///
    /// - [`AccessError::InvalidRole`] if the claim's role is not a known role.
    /// - [`AccessError::NotResolved`] if called before [`Self::initialize`].
    ///
    /// On error the session and the slot are left untouched.
    pub fn login(&mut self, claim: IdentityClaim) -> Result<&Identity, AccessError> {
        let identity = Identity::try_from(claim).inspect_err(|e| {
            tracing::warn!(error = %e, "login rejected");
        })?;
        if !self.session.is_resolved() {
            return Err(AccessError::NotResolved);
        }
        self.store.save(&identity);
        tracing::info!(user_id = %identity.id, role = %identity.role, "logged in");
        self.transition(Session::Resolved(Some(identity)));
        self.session.identity().ok_or(AccessError::NotResolved)
    }

    /// Log out. Safe to call repeatedly; the slot is always cleared.
    ///
    /// Before initialization the slot is cleared but the session stays
    /// unresolved, so the pending restore simply finds nothing.
    pub fn logout(&mut self) {
        self.store.clear();
        if !self.session.is_resolved() {
            return;
        }
        if let Some(identity) = self.session.identity() {
            tracing::info!(user_id = %identity.id, "logged out");
        }
        self.transition(Session::Resolved(None));
    }

    fn transition(&mut self, next: Session) {
        self.session = next;
        for (_, subscriber) in &self.subscribers {
            subscriber(&self.session);
        }
    }
}
