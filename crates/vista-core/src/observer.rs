//! Observer registrations for camera change notifications.

/// Events a camera engine reports to its observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraEvent {
    /// Any camera parameter changed.
    Modified,
    /// The camera is being torn down.
    Released,
}

/// Handle identifying a single observer registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverTag(u64);

impl ObserverTag {
    /// Returns the raw tag value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Boxed observer callback.
pub type ObserverCallback = Box<dyn FnMut(CameraEvent)>;

struct Observer {
    tag: ObserverTag,
    event: CameraEvent,
    callback: ObserverCallback,
}

/// Ordered list of observer callbacks.
///
/// Tags are handed out monotonically and never reused, so a stale tag can
/// never remove a newer registration.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<Observer>,
    next_tag: u64,
}

impl ObserverRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` for `event` and returns its tag.
    pub fn add(&mut self, event: CameraEvent, callback: ObserverCallback) -> ObserverTag {
        let tag = ObserverTag(self.next_tag);
        self.next_tag += 1;
        self.observers.push(Observer {
            tag,
            event,
            callback,
        });
        tag
    }

    /// Removes the registration with the given tag.
    ///
    /// Returns true if a registration was removed.
    pub fn remove(&mut self, tag: ObserverTag) -> bool {
        let before = self.observers.len();
        self.observers.retain(|o| o.tag != tag);
        before != self.observers.len()
    }

    /// Removes every registration.
    pub fn clear(&mut self) {
        if !self.observers.is_empty() {
            log::debug!("removing {} camera observers", self.observers.len());
        }
        self.observers.clear();
    }

    /// Invokes every callback registered for `event`, in registration order.
    pub fn notify(&mut self, event: CameraEvent) {
        for observer in self.observers.iter_mut().filter(|o| o.event == event) {
            (observer.callback)(event);
        }
    }

    /// Returns the number of registrations.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .field("next_tag", &self.next_tag)
            .finish()
    }
}
