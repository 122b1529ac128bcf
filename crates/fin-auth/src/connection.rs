//! Provider-side connection state and its change listeners.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use fin_core::Identity;

/// Listener invoked with the new identity, or `None` after a logout.
pub type ConnectionCallback = Arc<dyn Fn(Option<&Identity>) + Send + Sync>;

/// Registration returned by [`ConnectionHandle::on_connection_change`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Connection channel owned by an identity provider.
///
/// Providers call [`notify`](Self::notify) whenever their notion of the
/// signed-in user changes; registered listeners run synchronously on the
/// notifying thread.
#[derive(Default)]
pub struct ConnectionHandle {
    current: RwLock<Option<Identity>>,
    listeners: RwLock<Vec<(ListenerId, ConnectionCallback)>>,
    next_id: AtomicU64,
}

impl ConnectionHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` and invoke it once with the current state.
    ///
    /// The listener stays registered until passed to
    /// [`remove_listener`](Self::remove_listener).
    pub fn on_connection_change<F>(&self, callback: F) -> ListenerId
    where
        F: Fn(Option<&Identity>) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let callback: ConnectionCallback = Arc::new(callback);
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::clone(&callback)));

        let current = self.current();
        callback(current.as_ref());
        id
    }

    /// Unregister a listener. Returns `false` if it was already gone.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.write().unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(registered, _)| *registered != id);
        listeners.len() != before
    }

    /// Record the provider's new state and fan it out to every listener.
    pub fn notify(&self, identity: Option<Identity>) {
        (*self.current.write().unwrap_or_else(PoisonError::into_inner)).clone_from(&identity);

        // Listeners may register further listeners; never hold the lock while calling out.
        let listeners: Vec<ConnectionCallback> = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();
        for listener in &listeners {
            listener(identity.as_ref());
        }
    }

    /// Identity the provider currently considers signed in.
    #[must_use]
    pub fn current(&self) -> Option<Identity> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl fmt::Debug for ConnectionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionHandle")
            .field("current", &self.current())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;

    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<Option<String>>>>, impl Fn(Option<&Identity>) + Send + Sync + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let callback = move |identity: Option<&Identity>| {
            sink.lock()
                .expect("lock")
                .push(identity.map(|i| i.uid.clone()));
        };
        (seen, callback)
    }

    #[test]
    fn registration_fires_with_current_state() {
        let handle = ConnectionHandle::new();
        let (seen, callback) = recorder();
        handle.on_connection_change(callback);
        assert_eq!(*seen.lock().expect("lock"), vec![None]);
        assert_eq!(handle.listener_count(), 1);
    }

    #[test]
    fn registration_after_login_sees_identity() {
        let handle = ConnectionHandle::new();
        handle.notify(Some(Identity::new("u1", "password")));
        let (seen, callback) = recorder();
        handle.on_connection_change(callback);
        assert_eq!(*seen.lock().expect("lock"), vec![Some("u1".to_string())]);
    }

    #[test]
    fn notify_reaches_every_listener_in_order() {
        let handle = ConnectionHandle::new();
        let (first, first_cb) = recorder();
        let (second, second_cb) = recorder();
        handle.on_connection_change(first_cb);
        handle.on_connection_change(second_cb);

        handle.notify(Some(Identity::new("u1", "password")));
        handle.notify(None);

        let expected = vec![None, Some("u1".to_string()), None];
        assert_eq!(*first.lock().expect("lock"), expected);
        assert_eq!(*second.lock().expect("lock"), expected);
        assert_eq!(handle.current(), None);
    }

    #[test]
    fn removed_listener_stops_receiving() {
        let handle = ConnectionHandle::new();
        let (kept, kept_cb) = recorder();
        let (removed, removed_cb) = recorder();
        handle.on_connection_change(kept_cb);
        let id = handle.on_connection_change(removed_cb);

        assert!(handle.remove_listener(id));
        assert!(!handle.remove_listener(id));
        assert_eq!(handle.listener_count(), 1);

        handle.notify(Some(Identity::new("u1", "password")));
        assert_eq!(*kept.lock().expect("lock"), vec![None, Some("u1".to_string())]);
        assert_eq!(*removed.lock().expect("lock"), vec![None]);
    }
}
