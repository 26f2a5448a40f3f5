//! Explicit subscription to AuthState updates.
//!
//! Components do not reach for an ambient auth global. They are handed an
//! [`AuthStateSource`], read its current value, and subscribe for changes.
//! Dropping the returned [`Subscription`] unsubscribes.

use crate::auth_state::AuthState;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Callback invoked with each published state.
pub type Observer = Box<dyn Fn(&AuthState) + Send + Sync>;

/// A stream of AuthState values.
pub trait AuthStateSource: Send + Sync {
    /// Returns the latest published state, if any has been published.
    fn current(&self) -> Option<AuthState>;

    /// Registers an observer for every state published after this call.
    ///
    /// The current value is not replayed; read [`current`](Self::current) first.
    fn subscribe(&self, observer: Observer) -> Subscription;
}

struct ChannelInner {
    current: Option<AuthState>,
    observers: Vec<(u64, Arc<dyn Fn(&AuthState) + Send + Sync>)>,
    next_id: u64,
}

/// In-memory AuthState stream.
///
/// Cloning shares the same channel.
#[derive(Clone)]
pub struct AuthStateChannel {
    inner: Arc<Mutex<ChannelInner>>,
}

impl AuthStateChannel {
    /// Creates a channel with no published value.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(ChannelInner {
                current: None,
                observers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Creates a channel seeded with an initial value.
    #[must_use]
    pub fn with_state(state: AuthState) -> Self {
        let channel = Self::new();
        lock(&channel.inner).current = Some(state);
        channel
    }

    /// Stores `state` and notifies every live observer once.
    ///
    /// Observers run in subscription order, after the internal lock is released,
    /// so an observer may read or publish to the channel.
    pub fn publish(&self, state: AuthState) {
        let observers: Vec<_> = {
            let mut inner = lock(&self.inner);
            inner.current = Some(state.clone());
            inner.observers.iter().map(|(_, o)| Arc::clone(o)).collect()
        };

        for observer in observers {
            observer(&state);
        }
    }

    /// Returns the number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        lock(&self.inner).observers.len()
    }
}

impl Default for AuthStateChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AuthStateChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = lock(&self.inner);
        f.debug_struct("AuthStateChannel")
            .field("current", &inner.current)
            .field("subscribers", &inner.observers.len())
            .finish()
    }
}

impl AuthStateSource for AuthStateChannel {
    fn current(&self) -> Option<AuthState> {
        lock(&self.inner).current.clone()
    }

    fn subscribe(&self, observer: Observer) -> Subscription {
        let mut inner = lock(&self.inner);
        let id = inner.next_id;
        inner.next_id += 1;
        inner.observers.push((id, Arc::from(observer)));

        Subscription {
            channel: Arc::downgrade(&self.inner),
            id,
        }
    }
}

/// Handle for a registered observer.
///
/// The observer stays registered until this handle is dropped or
/// [`unsubscribe`](Self::unsubscribe) is called. It does not keep the channel
/// alive.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    channel: Weak<Mutex<ChannelInner>>,
    id: u64,
}

impl Subscription {
    /// Removes the observer from its channel.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.channel.upgrade() {
            lock(&inner).observers.retain(|(id, _)| *id != self.id);
        }
    }
}

fn lock(inner: &Mutex<ChannelInner>) -> MutexGuard<'_, ChannelInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth_state::DisplayIdentity;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_observer(count: &Arc<AtomicUsize>) -> Observer {
        let count = Arc::clone(count);
        Box::new(move |_| {
            count.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn new_channel_has_no_current_value() {
        let channel = AuthStateChannel::new();
        assert!(channel.current().is_none());
    }

    #[test]
    fn seeded_channel_reports_current_value() {
        let channel = AuthStateChannel::with_state(AuthState::signed_out());
        assert_eq!(channel.current(), Some(AuthState::SignedOut));
    }

    #[test]
    fn publish_updates_current_and_notifies() {
        let channel = AuthStateChannel::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _sub = channel.subscribe(Box::new(move |state| {
            sink.lock().expect("lock").push(state.is_signed_in());
        }));

        channel.publish(AuthState::signed_in(DisplayIdentity::default()));
        channel.publish(AuthState::signed_out());

        assert_eq!(*seen.lock().expect("lock"), vec![true, false]);
        assert_eq!(channel.current(), Some(AuthState::SignedOut));
    }

    #[test]
    fn subscribe_does_not_replay_current() {
        let channel = AuthStateChannel::with_state(AuthState::signed_out());
        let count = Arc::new(AtomicUsize::new(0));
        let _sub = channel.subscribe(counting_observer(&count));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let channel = AuthStateChannel::new();
        let count = Arc::new(AtomicUsize::new(0));

        let sub = channel.subscribe(counting_observer(&count));
        channel.publish(AuthState::signed_out());
        assert_eq!(channel.subscriber_count(), 1);

        sub.unsubscribe();
        channel.publish(AuthState::signed_out());

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(channel.subscriber_count(), 0);
    }

    #[test]
    fn unsubscribe_only_removes_its_own_observer() {
        let channel = AuthStateChannel::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let sub_first = channel.subscribe(counting_observer(&first));
        let _sub_second = channel.subscribe(counting_observer(&second));
        drop(sub_first);

        channel.publish(AuthState::signed_out());
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn subscription_outliving_channel_is_harmless() {
        let channel = AuthStateChannel::new();
        let sub = channel.subscribe(Box::new(|_| {}));
        drop(channel);
        drop(sub);
    }

    #[test]
    fn clones_share_the_stream() {
        let channel = AuthStateChannel::new();
        let publisher = channel.clone();
        let count = Arc::new(AtomicUsize::new(0));
        let _sub = channel.subscribe(counting_observer(&count));

        publisher.publish(AuthState::signed_out());
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(channel.current(), Some(AuthState::SignedOut));
    }

    #[test]
    fn observer_may_read_channel_during_notification() {
        let channel = AuthStateChannel::new();
        let reader = channel.clone();
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        let _sub = channel.subscribe(Box::new(move |_| {
            *sink.lock().expect("lock") = reader.current();
        }));

        channel.publish(AuthState::signed_out());
        assert_eq!(*seen.lock().expect("lock"), Some(AuthState::SignedOut));
    }
}
