//! Dynamic event channel dispatching string payloads.
//!
//! The channel is the boundary the payload subsystem serves: producers
//! build a payload and `raise` it, registered listeners each receive it
//! synchronously. Dispatch collects no return values and never fails;
//! whatever a listener makes of the payload is its own business.

use core::fmt;
use std::rc::Rc;

use tracing::trace;

/// Receives payloads raised on a [`PayloadChannel`].
pub trait PayloadListener {
    /// Called once per [`PayloadChannel::raise`] with the raised payload.
    fn on_payload(&self, payload: &str);
}

/// Ordered listener list for one logical event.
///
/// Listener identity is the `Rc` allocation: registering the same `Rc`
/// twice is a no-op, as is unregistering one that was never registered.
/// [`raise`](Self::raise) walks the listeners in reverse registration
/// order.
///
/// Listeners are `Rc`, not `Arc`: the channel shares the crate's
/// single-threaded model.
///
/// # Examples
///
/// ```
/// use std::{cell::RefCell, rc::Rc};
/// use eventwire::{PayloadChannel, PayloadListener};
///
/// struct Recorder(RefCell<Vec<String>>);
///
/// impl PayloadListener for Recorder {
///     fn on_payload(&self, payload: &str) {
///         self.0.borrow_mut().push(payload.to_owned());
///     }
/// }
///
/// let recorder = Rc::new(Recorder(RefCell::new(Vec::new())));
/// let mut channel = PayloadChannel::new();
/// channel.register(recorder.clone());
/// channel.raise("type=Ping");
/// assert_eq!(recorder.0.borrow()[0], "type=Ping");
/// ```
#[derive(Default)]
pub struct PayloadChannel {
    listeners: Vec<Rc<dyn PayloadListener>>,
}

impl PayloadChannel {
    /// Creates a channel with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Invokes every listener with `payload`, newest registration first.
    pub fn raise(&self, payload: &str) {
        trace!(listeners = self.listeners.len(), payload, "raising payload event");
        for listener in self.listeners.iter().rev() {
            listener.on_payload(payload);
        }
    }

    /// Adds `listener` unless that exact allocation is already registered.
    pub fn register(&mut self, listener: Rc<dyn PayloadListener>) {
        if self.listeners.iter().any(|l| Rc::ptr_eq(l, &listener)) {
            return;
        }
        self.listeners.push(listener);
        trace!(listeners = self.listeners.len(), "registered payload listener");
    }

    /// Removes `listener` if registered; otherwise does nothing.
    pub fn unregister(&mut self, listener: &Rc<dyn PayloadListener>) {
        let before = self.listeners.len();
        self.listeners.retain(|l| !Rc::ptr_eq(l, listener));
        if self.listeners.len() != before {
            trace!(listeners = self.listeners.len(), "unregistered payload listener");
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl fmt::Debug for PayloadChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PayloadChannel")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct Tagged {
        tag: &'static str,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl PayloadListener for Tagged {
        fn on_payload(&self, _payload: &str) {
            self.log.borrow_mut().push(self.tag);
        }
    }

    fn tagged(tag: &'static str, log: &Rc<RefCell<Vec<&'static str>>>) -> Rc<dyn PayloadListener> {
        Rc::new(Tagged {
            tag,
            log: log.clone(),
        })
    }

    #[test]
    fn raises_in_reverse_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut channel = PayloadChannel::new();
        channel.register(tagged("first", &log));
        channel.register(tagged("second", &log));

        channel.raise("type=Ping");
        assert_eq!(*log.borrow(), ["second", "first"]);
    }

    #[test]
    fn register_is_idempotent_per_allocation() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let listener = tagged("only", &log);
        let mut channel = PayloadChannel::new();
        channel.register(listener.clone());
        channel.register(listener.clone());
        assert_eq!(channel.listener_count(), 1);

        channel.raise("type=Ping");
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn unregister_removes_only_the_given_listener() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let a = tagged("a", &log);
        let b = tagged("b", &log);
        let mut channel = PayloadChannel::new();
        channel.register(a.clone());
        channel.register(b.clone());

        channel.unregister(&a);
        assert_eq!(channel.listener_count(), 1);

        channel.raise("type=Ping");
        assert_eq!(*log.borrow(), ["b"]);
    }

    #[test]
    fn unregister_of_unknown_listener_is_a_no_op() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let stranger = tagged("stranger", &log);
        let mut channel = PayloadChannel::new();
        channel.register(tagged("resident", &log));

        channel.unregister(&stranger);
        assert_eq!(channel.listener_count(), 1);
    }

    #[test]
    fn raise_with_no_listeners_is_harmless() {
        let channel = PayloadChannel::new();
        channel.raise("type=Ping");
    }
}
